//! Input highlighting for the REPL.

use std::borrow::Cow;
use std::sync::Arc;

use wordhoard_parser::{Vocabulary, WordTypes};

const RESET: &str = "\x1b[0m";
const META: &str = "\x1b[34m";
const STRING: &str = "\x1b[33m";
const NUMBER: &str = "\x1b[35m";
const VERB: &str = "\x1b[1;32m";
const NOUN: &str = "\x1b[36m";
const ADJECTIVE: &str = "\x1b[96m";
const DIRECTION: &str = "\x1b[1;36m";
const FUNCTION: &str = "\x1b[2m";

/// Characters the tokenizer splits off as words of their own.
const PUNCTUATION: &[char] = &['.', ',', ';', '!'];

/// Colors input words by the categories the vocabulary gives them.
#[derive(Default)]
pub struct WordHighlighter {
    vocabulary: Option<Arc<Vocabulary>>,
}

impl WordHighlighter {
    /// Creates a highlighter with no vocabulary.
    #[must_use]
    pub const fn new() -> Self {
        Self { vocabulary: None }
    }

    /// Sets the vocabulary used to classify words.
    pub fn set_vocabulary(&mut self, vocabulary: Arc<Vocabulary>) {
        self.vocabulary = Some(vocabulary);
    }

    /// Highlight a line of input.
    #[must_use]
    pub fn highlight<'l>(&self, line: &'l str, _pos: usize) -> Cow<'l, str> {
        if line.is_empty() {
            return Cow::Borrowed(line);
        }

        let mut result = String::with_capacity(line.len() * 2);
        let mut chars = line.char_indices().peekable();

        while let Some((start, c)) = chars.next() {
            match c {
                '"' => {
                    result.push_str(STRING);
                    result.push(c);
                    for (_, next) in chars.by_ref() {
                        result.push(next);
                        if next == '"' {
                            break;
                        }
                    }
                    result.push_str(RESET);
                }
                c if c.is_whitespace() || PUNCTUATION.contains(&c) => result.push(c),
                _ => {
                    let mut end = start + c.len_utf8();
                    while let Some(&(index, next)) = chars.peek() {
                        if next.is_whitespace() || next == '"' || PUNCTUATION.contains(&next) {
                            break;
                        }
                        end = index + next.len_utf8();
                        chars.next();
                    }
                    let word = &line[start..end];
                    match self.style(word, start == 0) {
                        Some(style) => {
                            result.push_str(style);
                            result.push_str(word);
                            result.push_str(RESET);
                        }
                        None => result.push_str(word),
                    }
                }
            }
        }

        Cow::Owned(result)
    }

    fn style(&self, word: &str, first: bool) -> Option<&'static str> {
        if first && word.starts_with(':') {
            return Some(META);
        }
        if word.chars().all(|c| c.is_ascii_digit()) {
            return Some(NUMBER);
        }
        let types = self.vocabulary.as_ref()?.categories(word);
        if types.contains(WordTypes::VERB) {
            Some(VERB)
        } else if types.contains(WordTypes::NOUN) {
            Some(NOUN)
        } else if types.contains(WordTypes::ADJECTIVE) {
            Some(ADJECTIVE)
        } else if types.contains(WordTypes::DIRECTION) {
            Some(DIRECTION)
        } else if types.is_empty() {
            None
        } else {
            Some(FUNCTION)
        }
    }
}
