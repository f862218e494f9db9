//! Input tokenization.
//!
//! Converts raw player input into a stream of tokens.

use crate::word::Word;

/// A token from player input.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum InputToken {
    /// A word as typed; punctuation that carries meaning is its own word
    Word(String),
    /// An integer and its rendering
    Number(i64, String),
    /// A quoted string (preserved as-is)
    QuotedString(String),
}

impl InputToken {
    /// Converts the token into an unclassified word.
    #[must_use]
    pub fn into_word(self) -> Word {
        match self {
            Self::Word(text) => Word::text(text),
            Self::Number(value, text) => Word::number(value, text),
            Self::QuotedString(text) => Word::literal(text),
        }
    }
}

/// Tokenizes player input.
pub struct InputTokenizer;

impl InputTokenizer {
    /// Tokenizes a raw input string into tokens.
    ///
    /// - Keeps words as typed (matching is case-insensitive later)
    /// - Emits `.`, `;`, `!` and `,` as words of their own
    /// - Strips other punctuation (except within quotes)
    /// - Preserves quoted strings as atomic units
    #[must_use]
    pub fn tokenize(input: &str) -> Vec<InputToken> {
        let mut tokens = Vec::new();
        let mut chars = input.chars().peekable();
        let mut current_word = String::new();

        while let Some(ch) = chars.next() {
            match ch {
                // Start of quoted string
                '"' => {
                    flush(&mut tokens, &mut current_word);
                    let mut quoted = String::new();
                    while let Some(c) = chars.next_if(|&c| c != '"') {
                        quoted.push(c);
                    }
                    // Closing quote, if any
                    chars.next();
                    tokens.push(InputToken::QuotedString(quoted));
                }
                c if c.is_whitespace() => flush(&mut tokens, &mut current_word),
                // Sentence and clause boundaries
                '.' | ';' | '!' | ',' => {
                    flush(&mut tokens, &mut current_word);
                    tokens.push(InputToken::Word(ch.to_string()));
                }
                // Punctuation to strip
                '?' | ':' | '\'' => {}
                _ => current_word.push(ch),
            }
        }

        flush(&mut tokens, &mut current_word);
        tokens
    }
}

fn flush(tokens: &mut Vec<InputToken>, current_word: &mut String) {
    if current_word.is_empty() {
        return;
    }
    let word = std::mem::take(current_word);
    match word.parse::<i64>() {
        Ok(value) => tokens.push(InputToken::Number(value, word)),
        Err(_) => tokens.push(InputToken::Word(word)),
    }
}
