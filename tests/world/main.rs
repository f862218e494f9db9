//! Integration tests for Layer 1: World
//!
//! Tests for atom inheritance, containment, traversal policies, and
//! property lookup.

mod containment;
mod inheritance;
mod properties;
