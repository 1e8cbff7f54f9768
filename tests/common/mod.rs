use std::collections::VecDeque;
use std::io::Cursor;

use toll_tax::{
    cli::{
        io::{LineInput, ReadOutcome, ScriptInput},
        run_loop,
        shell_context::{CliMode, ShellContext},
    },
    config::Config,
    errors::CliError,
};

/// Runs the shell loop in script mode over the given input lines and returns
/// the context so tests can inspect the catalog afterwards.
pub fn run_script(lines: &[&str]) -> ShellContext {
    run_lines(CliMode::Script, lines)
}

/// Same as [`run_script`] but with the interactive menu and continue question.
pub fn run_interactive(lines: &[&str]) -> ShellContext {
    run_lines(CliMode::Interactive, lines)
}

/// Runs script mode over explicit read outcomes, e.g. to inject a Ctrl-C.
pub fn run_outcomes(outcomes: Vec<ReadOutcome>) -> ShellContext {
    run_input(CliMode::Script, Box::new(QueuedInput(outcomes.into())))
}

pub fn line(text: &str) -> ReadOutcome {
    ReadOutcome::Line(text.to_string())
}

fn run_lines(mode: CliMode, lines: &[&str]) -> ShellContext {
    let mut script = lines.join("\n");
    script.push('\n');
    let input = ScriptInput::new(Cursor::new(script.into_bytes()));
    run_input(mode, Box::new(input))
}

fn run_input(mode: CliMode, input: Box<dyn LineInput>) -> ShellContext {
    let mut context = ShellContext::new(mode, Config::default(), input);
    run_loop(&mut context).expect("script run succeeds");
    context
}

struct QueuedInput(VecDeque<ReadOutcome>);

impl LineInput for QueuedInput {
    fn read_line(&mut self, _prompt: &str) -> Result<ReadOutcome, CliError> {
        Ok(self.0.pop_front().unwrap_or(ReadOutcome::Eof))
    }
}
