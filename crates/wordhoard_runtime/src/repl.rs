//! Interactive command loop over a [`Session`].

use std::io::{self, Write};
use std::sync::Arc;

use wordhoard_foundation::{Error, Result};

use crate::editor::{LineEditor, ReadResult, RustylineEditor};
use crate::session::Session;

/// What evaluating one line produced.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Reply {
    /// Lines to print.
    Lines(Vec<String>),
    /// The user asked to leave.
    Quit,
}

/// The interactive REPL.
pub struct Repl<E: LineEditor = RustylineEditor> {
    /// Where command lines come from.
    editor: E,

    /// Session state (world, parser).
    session: Session,

    /// Print the banner before the first prompt.
    show_banner: bool,

    /// Primary prompt.
    prompt: String,

    /// Continuation prompt (for an open quote).
    continuation_prompt: String,
}

impl Repl<RustylineEditor> {
    /// Creates a new REPL over the demo world with the default rustyline
    /// editor.
    ///
    /// # Errors
    ///
    /// Returns an error if the editor or the demo world fails to build.
    pub fn new() -> Result<Self> {
        let editor = RustylineEditor::new()?;
        Ok(Self::with_editor(editor, Session::demo()?))
    }
}

impl<E: LineEditor> Repl<E> {
    /// Creates a new REPL with the given editor and session.
    pub fn with_editor(mut editor: E, session: Session) -> Self {
        editor.set_vocabulary(Arc::clone(session.vocabulary()));
        Self {
            editor,
            session,
            show_banner: true,
            prompt: "> ".to_string(),
            continuation_prompt: ".. ".to_string(),
        }
    }

    /// Skips the banner.
    #[must_use]
    pub const fn without_banner(mut self) -> Self {
        self.show_banner = false;
        self
    }

    /// Replaces the `> ` prompt.
    #[must_use]
    pub fn with_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.prompt = prompt.into();
        self
    }

    /// The session commands run against.
    #[must_use]
    pub const fn session(&self) -> &Session {
        &self.session
    }

    /// Mutable access to the session, e.g. to swap in a new world.
    pub fn session_mut(&mut self) -> &mut Session {
        &mut self.session
    }

    /// Runs the REPL loop.
    ///
    /// # Errors
    ///
    /// Returns an error if reading input fails fatally.
    pub fn run(&mut self) -> Result<()> {
        if self.show_banner {
            self.print_banner();
        }

        loop {
            match self.read_eval_print() {
                Ok(true) => {}
                Ok(false) => break,
                Err(e) => self.print_error(&e),
            }
        }

        println!("\nGoodbye!");
        Ok(())
    }

    /// Handles one command. `Ok(false)` ends the loop.
    fn read_eval_print(&mut self) -> Result<bool> {
        let Some(input) = self.read_input()? else {
            return Ok(false);
        };

        if input.trim().is_empty() {
            return Ok(true);
        }

        self.editor.add_history(&input);

        match self.eval(&input) {
            Reply::Lines(lines) => {
                for line in lines {
                    println!("{line}");
                }
                Ok(true)
            }
            Reply::Quit => Ok(false),
        }
    }

    /// Reads one command, continuing while a double quote is open.
    fn read_input(&mut self) -> Result<Option<String>> {
        let mut input = String::new();
        let mut first_line = true;

        loop {
            let prompt = if first_line {
                &self.prompt
            } else {
                &self.continuation_prompt
            };

            match self.editor.read_line(prompt)? {
                ReadResult::Line(line) => {
                    if !first_line {
                        input.push('\n');
                    }
                    input.push_str(&line);
                    if is_complete(&input) {
                        return Ok(Some(input));
                    }
                    first_line = false;
                }
                ReadResult::Interrupted => {
                    if !first_line {
                        println!("\nInput cancelled.");
                    }
                    return Ok(Some(String::new()));
                }
                ReadResult::Eof => {
                    return if first_line { Ok(None) } else { Ok(Some(input)) };
                }
            }
        }
    }

    /// Evaluates one line: a `:` command or a sentence for the parser.
    pub fn eval(&mut self, input: &str) -> Reply {
        let trimmed = input.trim();
        if !trimmed.starts_with(':') {
            return Reply::Lines(self.session.execute(input));
        }

        match trimmed {
            ":quit" | ":q" => Reply::Quit,
            ":look" => Reply::Lines(self.session.look()),
            ":inv" => Reply::Lines(self.session.inventory()),
            ":help" => Reply::Lines(help()),
            other => Reply::Lines(vec![format!("Unknown command: {other} (try :help)")]),
        }
    }

    /// Reports an input failure without ending the loop.
    #[allow(clippy::unused_self)]
    fn print_error(&self, error: &Error) {
        eprintln!("\x1b[31mError: {error}\x1b[0m");
    }

    /// Names the program and the REPL commands.
    #[allow(clippy::unused_self)]
    fn print_banner(&self) {
        println!("\x1b[1;36mwordhoard\x1b[0m v{}", env!("CARGO_PKG_VERSION"));
        println!("Type commands like \"get sword\". :help lists REPL commands, Ctrl+D exits.\n");
        let _ = io::stdout().flush();
    }
}

/// Checks whether every double quote is closed.
fn is_complete(input: &str) -> bool {
    input.chars().filter(|&c| c == '"').count() % 2 == 0
}

fn help() -> Vec<String> {
    [
        ":look    list what is in the room",
        ":inv     list what you carry",
        ":quit    leave",
        "Anything else is parsed as a command and the resulting events are printed.",
    ]
    .iter()
    .map(|line| (*line).to_string())
    .collect()
}
