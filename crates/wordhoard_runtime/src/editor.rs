//! Line input for the REPL.
//!
//! [`LineEditor`] is what the REPL reads commands through. The terminal
//! implementation wraps rustyline and completes and colours words from the
//! session's vocabulary; tests substitute a scripted editor.

use std::borrow::Cow;
use std::sync::Arc;

use rustyline::completion::{Completer, Pair};
use rustyline::error::ReadlineError;
use rustyline::highlight::{CmdKind, Highlighter};
use rustyline::hint::HistoryHinter;
use rustyline::history::DefaultHistory;
use rustyline::validate::{ValidationContext, ValidationResult, Validator};
use rustyline::{Completer, Config, Context, Editor, Helper, Hinter, Validator as RLValidator};
use wordhoard_foundation::{Error, ErrorKind, Result};
use wordhoard_parser::Vocabulary;

use crate::highlight::WordHighlighter;

/// REPL commands offered for completion next to the vocabulary.
pub const META_COMMANDS: &[&str] = &[":help", ":look", ":inv", ":quit"];

/// Outcome of one prompt.
#[derive(Debug)]
pub enum ReadResult {
    /// The player entered a line.
    Line(String),
    /// User pressed Ctrl+C.
    Interrupted,
    /// Ctrl+D: end of input.
    Eof,
}

/// Source of command lines.
pub trait LineEditor {
    /// Prompts for one line.
    ///
    /// # Errors
    ///
    /// Fails when the terminal cannot be read.
    fn read_line(&mut self, prompt: &str) -> Result<ReadResult>;

    /// Remembers a command for recall.
    fn add_history(&mut self, line: &str);

    /// Use a vocabulary for completion and highlighting.
    fn set_vocabulary(&mut self, vocabulary: Arc<Vocabulary>);
}

/// Rustyline helper bundling the word completer, history hints, word colouring
/// and the open-quote validator.
#[derive(Helper, Completer, Hinter, RLValidator)]
struct WordhoardHelper {
    #[rustyline(Completer)]
    completer: WordCompleter,
    #[rustyline(Hinter)]
    hinter: HistoryHinter,
    #[rustyline(Validator)]
    validator: QuoteValidator,
    highlighter: WordHighlighter,
}

impl Highlighter for WordhoardHelper {
    fn highlight<'l>(&self, line: &'l str, pos: usize) -> Cow<'l, str> {
        self.highlighter.highlight(line, pos)
    }

    fn highlight_prompt<'b, 's: 'b, 'p: 'b>(
        &'s self,
        prompt: &'p str,
        default: bool,
    ) -> Cow<'b, str> {
        if default {
            Cow::Owned(format!("\x1b[1;32m{prompt}\x1b[0m"))
        } else {
            Cow::Borrowed(prompt)
        }
    }

    fn highlight_char(&self, _line: &str, _pos: usize, _kind: CmdKind) -> bool {
        true
    }

    fn highlight_hint<'h>(&self, hint: &'h str) -> Cow<'h, str> {
        Cow::Owned(format!("\x1b[2m{hint}\x1b[0m"))
    }
}

/// Completes vocabulary words and REPL commands.
struct WordCompleter {
    words: Vec<String>,
}

impl WordCompleter {
    fn new() -> Self {
        Self {
            words: META_COMMANDS.iter().map(|c| (*c).to_string()).collect(),
        }
    }

    fn set_vocabulary(&mut self, vocabulary: &Vocabulary) {
        let mut words: Vec<String> = vocabulary
            .words()
            .map(|(word, _)| word)
            .filter(|word| word.chars().all(char::is_alphanumeric))
            .map(str::to_string)
            .collect();
        words.sort_unstable();
        words.extend(META_COMMANDS.iter().map(|c| (*c).to_string()));
        self.words = words;
    }

    fn candidates(&self, line: &str, pos: usize) -> (usize, Vec<Pair>) {
        let before = &line[..pos];
        if before.chars().filter(|&c| c == '"').count() % 2 == 1 {
            return (pos, Vec::new());
        }

        let start = before.rfind(char::is_whitespace).map_or(0, |i| i + 1);
        let prefix = before[start..].to_lowercase();
        if prefix.is_empty() {
            return (start, Vec::new());
        }

        let candidates = self
            .words
            .iter()
            .filter(|word| word.starts_with(&prefix))
            .map(|word| Pair {
                display: word.clone(),
                replacement: word.clone(),
            })
            .collect();
        (start, candidates)
    }
}

impl Completer for WordCompleter {
    type Candidate = Pair;

    fn complete(
        &self,
        line: &str,
        pos: usize,
        _ctx: &Context<'_>,
    ) -> rustyline::Result<(usize, Vec<Pair>)> {
        Ok(self.candidates(line, pos))
    }
}

/// Keeps reading while a double quote is open.
#[derive(Default)]
struct QuoteValidator;

impl Validator for QuoteValidator {
    fn validate(&self, ctx: &mut ValidationContext<'_>) -> rustyline::Result<ValidationResult> {
        if ctx.input().chars().filter(|&c| c == '"').count() % 2 == 1 {
            Ok(ValidationResult::Incomplete)
        } else {
            Ok(ValidationResult::Valid(None))
        }
    }
}

/// Terminal editor backed by rustyline.
pub struct RustylineEditor {
    editor: Editor<WordhoardHelper, DefaultHistory>,
}

impl RustylineEditor {
    /// Creates a terminal editor with an empty vocabulary.
    ///
    /// # Errors
    ///
    /// Fails when rustyline cannot attach to the terminal.
    pub fn new() -> Result<Self> {
        let config = Config::builder()
            .auto_add_history(false)
            .max_history_size(1000)
            .map_err(|e| Error::new(ErrorKind::Internal(e.to_string())))?
            .build();

        let helper = WordhoardHelper {
            completer: WordCompleter::new(),
            hinter: HistoryHinter::new(),
            validator: QuoteValidator,
            highlighter: WordHighlighter::new(),
        };

        let mut editor = Editor::with_config(config)
            .map_err(|e| Error::new(ErrorKind::Internal(e.to_string())))?;
        editor.set_helper(Some(helper));

        Ok(Self { editor })
    }
}

impl LineEditor for RustylineEditor {
    fn read_line(&mut self, prompt: &str) -> Result<ReadResult> {
        match self.editor.readline(prompt) {
            Ok(line) => Ok(ReadResult::Line(line)),
            Err(ReadlineError::Interrupted) => Ok(ReadResult::Interrupted),
            Err(ReadlineError::Eof) => Ok(ReadResult::Eof),
            Err(e) => Err(Error::new(ErrorKind::Internal(e.to_string()))),
        }
    }

    fn add_history(&mut self, line: &str) {
        let _ = self.editor.add_history_entry(line);
    }

    fn set_vocabulary(&mut self, vocabulary: Arc<Vocabulary>) {
        if let Some(helper) = self.editor.helper_mut() {
            helper.completer.set_vocabulary(&vocabulary);
            helper.highlighter.set_vocabulary(vocabulary);
        }
    }
}
