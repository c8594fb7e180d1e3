//! User confirmation and text input.
//!
//! The orchestrator only ever talks to the [`Prompter`] trait, so its state
//! machine can be driven by tests (or a future GUI) without a terminal.

use std::io::{self, BufRead, Write};

pub trait Prompter {
    /// Ask a yes/no question. `false` cancels the run.
    fn confirm(&mut self, message: &str) -> io::Result<bool>;
    /// Ask for a line of free text, trimmed.
    fn ask_text(&mut self, message: &str) -> io::Result<String>;
}

/// Interactive prompter over stdin/stderr. Prompts go to stderr so stdout
/// stays clean for the report.
pub struct StdioPrompter;

impl StdioPrompter {
    fn read_line(&self) -> io::Result<String> {
        let mut line = String::new();
        io::stdin().lock().read_line(&mut line)?;
        Ok(line.trim().to_string())
    }
}

impl Prompter for StdioPrompter {
    fn confirm(&mut self, message: &str) -> io::Result<bool> {
        eprint!("{} [y/N] ", message);
        io::stderr().flush().ok();
        let answer = self.read_line()?;
        Ok(matches!(answer.to_lowercase().as_str(), "y" | "yes"))
    }

    fn ask_text(&mut self, message: &str) -> io::Result<String> {
        eprint!("{}: ", message);
        io::stderr().flush().ok();
        self.read_line()
    }
}

/// Non-interactive prompter for `--yes`: answers yes to every gate. The CLI
/// only constructs this together with a preset `--new` name, so `ask_text`
/// is never reached; if it somehow is, the empty answer aborts the run.
pub struct AssumeYes;

impl Prompter for AssumeYes {
    fn confirm(&mut self, _message: &str) -> io::Result<bool> {
        Ok(true)
    }

    fn ask_text(&mut self, _message: &str) -> io::Result<String> {
        Ok(String::new())
    }
}
