//! Integration tests for the wordhoard_parser crate.
//!
//! Tests for the full command pipeline:
//! - Segmentation and verb ellipsis
//! - Template matching and unbound events
//! - Noun resolution and event expansion
//! - Pronouns and error reporting

mod binding_tests;
mod fixture;
mod pipeline_tests;
mod pronoun_tests;
mod segmentation_tests;
