use std::{fmt, io::BufRead};

use crate::cli::output;
use crate::errors::CliError;

/// Result of asking the operator for one line of input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReadOutcome {
    Line(String),
    Interrupted,
    Eof,
}

/// Source of operator input lines for the shell and its prompts.
pub trait LineInput {
    fn read_line(&mut self, prompt: &str) -> Result<ReadOutcome, CliError>;

    fn add_history(&mut self, _line: &str) {}
}

/// Reads lines from any buffered reader, used in script mode and tests.
pub struct ScriptInput<R> {
    reader: R,
}

impl<R: BufRead> ScriptInput<R> {
    pub fn new(reader: R) -> Self {
        Self { reader }
    }
}

impl<R: BufRead> LineInput for ScriptInput<R> {
    fn read_line(&mut self, _prompt: &str) -> Result<ReadOutcome, CliError> {
        let mut buffer = String::new();
        if self.reader.read_line(&mut buffer)? == 0 {
            return Ok(ReadOutcome::Eof);
        }
        let line = buffer.trim_end_matches(['\r', '\n']).to_string();
        Ok(ReadOutcome::Line(line))
    }
}

/// Print an informational message via the standard CLI output helpers.
pub fn print_info(message: impl fmt::Display) {
    output::info(message);
}

/// Print a warning message via the standard CLI output helpers.
pub fn print_warning(message: impl fmt::Display) {
    output::warning(message);
}

/// Print an error message via the standard CLI output helpers.
pub fn print_error(message: impl fmt::Display) {
    output::error(message);
}

/// Print a success message via the standard CLI output helpers.
pub fn print_success(message: impl fmt::Display) {
    output::success(message);
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn script_input_strips_line_endings_then_reports_eof() {
        let mut input = ScriptInput::new(Cursor::new("add\r\n2\n"));

        assert_eq!(input.read_line("> ").unwrap(), ReadOutcome::Line("add".into()));
        assert_eq!(input.read_line("> ").unwrap(), ReadOutcome::Line("2".into()));
        assert_eq!(input.read_line("> ").unwrap(), ReadOutcome::Eof);
    }
}
