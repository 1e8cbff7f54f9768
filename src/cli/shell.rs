use std::{borrow::Cow, fmt, io};

use rustyline::{
    completion::{Completer, Pair},
    error::ReadlineError,
    highlight::Highlighter,
    hint::Hinter,
    history::DefaultHistory,
    validate::{ValidationContext, ValidationResult, Validator},
    Cmd, Context as ReadlineContext, Editor, Helper, KeyEvent,
};
use shell_words::split;
use tracing::{debug, warn};

use crate::cli::commands::{self, system::print_farewell};
use crate::cli::core::{CliError, CliMode, CommandError, LoopControl, ShellContext};
use crate::cli::io::{LineInput, ReadOutcome, ScriptInput};
use crate::cli::output::{self, info as output_info, OutputPreferences};
use crate::cli::prompts;
use crate::config::{self, Config, ConfigManager};

const SCRIPT_ENV: &str = "TOLL_TAX_CLI_SCRIPT";
const CONTINUE_PROMPT: &str = "Do you want to perform another operation? (Y/N): ";
const CONTINUE_RETRY: &str = "Invalid input. Please press 'Y' to continue or 'N' to exit.";

pub fn run_cli() -> Result<(), CliError> {
    let mode = if std::env::var_os(SCRIPT_ENV).is_some() {
        CliMode::Script
    } else {
        CliMode::Interactive
    };

    let (config, manager) = load_config();
    output::set_preferences(OutputPreferences::from_config(&config));

    let input: Box<dyn LineInput> = match mode {
        CliMode::Interactive => Box::new(EditorInput::new(commands::names())?),
        CliMode::Script => Box::new(ScriptInput::new(io::stdin().lock())),
    };

    let mut context = ShellContext::new(mode, config, input);
    if let Some(manager) = manager {
        context = context.with_config_manager(manager);
    }
    run_loop(&mut context)
}

/// Drives the menu loop until the operator exits or input ends.
pub fn run_loop(context: &mut ShellContext) -> Result<(), CliError> {
    output::section("Toll Vehicle Tax Management System");
    output_info("Welcome! Type `help` to list commands.");

    while context.running {
        if context.mode == CliMode::Interactive {
            print_menu();
        }

        let prompt = context.prompt();
        let line = match context.input.read_line(&prompt)? {
            ReadOutcome::Line(line) => line,
            ReadOutcome::Interrupted => {
                if context.confirm_exit()? {
                    break;
                }
                continue;
            }
            ReadOutcome::Eof => {
                output_info("Exiting shell.");
                break;
            }
        };

        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }
        context.input.add_history(trimmed);

        match handle_line(context, trimmed) {
            Ok(LoopControl::Continue) => {}
            Ok(LoopControl::Exit) => break,
            Err(CommandError::InputClosed) => {
                output_info("Exiting shell.");
                break;
            }
            Err(err) => context.report_error(err)?,
        }

        if context.mode == CliMode::Interactive && !ask_to_continue(context)? {
            print_farewell();
            break;
        }
    }

    context.running = false;
    debug!(status = %context.status(), "shell stopped");
    Ok(())
}

fn load_config() -> (Config, Option<ConfigManager>) {
    let manager = match config::default_manager() {
        Ok(manager) => manager,
        Err(err) => {
            warn!(error = %err, "config directory unavailable, preferences last for this session");
            return (Config::default(), None);
        }
    };
    match manager.load() {
        Ok(config) => (config, Some(manager)),
        Err(err) => {
            warn!(error = %err, "falling back to default configuration");
            (Config::default(), Some(manager))
        }
    }
}

fn print_menu() {
    output::section("Choose an option");
    output_info("1. Add a New Vehicle");
    output_info("2. View Total Vehicles");
    output_info("3. View Total Tax Paying Vehicles");
    output_info("4. View Total Non-Tax Paying Vehicles");
    output_info("5. View Total Tax Collected");
    output_info("6. Exit");
}

fn ask_to_continue(context: &mut ShellContext) -> Result<bool, CliError> {
    match prompts::read_choice(
        context.input.as_mut(),
        CONTINUE_PROMPT,
        &["Y", "N"],
        CONTINUE_RETRY,
    ) {
        Ok(answer) => Ok(answer == "Y"),
        Err(CommandError::InputClosed | CommandError::Cancelled) => Ok(false),
        Err(err) => Err(CliError::Command(err.to_string())),
    }
}

fn handle_line(context: &mut ShellContext, line: &str) -> Result<LoopControl, CommandError> {
    let tokens = match parse_command_line(line) {
        Ok(tokens) => tokens,
        Err(err) => {
            crate::cli::io::print_warning(&err.message);
            return Ok(LoopControl::Continue);
        }
    };

    if tokens.is_empty() {
        return Ok(LoopControl::Continue);
    }

    let raw = &tokens[0];
    let command = raw.to_lowercase();
    let args: Vec<&str> = tokens.iter().skip(1).map(String::as_str).collect();

    context.last_command = Some(line.trim().to_string());

    match context.dispatch(&command, raw, &args) {
        Ok(LoopControl::Exit) => {
            context.running = false;
            Ok(LoopControl::Exit)
        }
        other => other,
    }
}

/// Interactive line editor with command completion.
struct EditorInput {
    editor: Editor<CommandHelper, DefaultHistory>,
}

impl EditorInput {
    fn new(names: Vec<&'static str>) -> Result<Self, CliError> {
        let mut editor = Editor::<CommandHelper, DefaultHistory>::new()?;
        editor.set_helper(Some(CommandHelper::new(names)));
        editor.bind_sequence(KeyEvent::from('?'), Cmd::Complete);
        Ok(Self { editor })
    }
}

impl LineInput for EditorInput {
    fn read_line(&mut self, prompt: &str) -> Result<ReadOutcome, CliError> {
        match self.editor.readline(prompt) {
            Ok(line) => Ok(ReadOutcome::Line(line)),
            Err(ReadlineError::Interrupted) => Ok(ReadOutcome::Interrupted),
            Err(ReadlineError::Eof) => Ok(ReadOutcome::Eof),
            Err(err) => Err(err.into()),
        }
    }

    fn add_history(&mut self, line: &str) {
        self.editor.add_history_entry(line).ok();
    }
}

struct CommandHelper {
    commands: Vec<String>,
}

impl CommandHelper {
    fn new(names: Vec<&'static str>) -> Self {
        let mut commands: Vec<String> = names
            .into_iter()
            .map(|name| name.to_ascii_lowercase())
            .collect();
        commands.sort();
        commands.dedup();
        Self { commands }
    }
}

impl Helper for CommandHelper {}

impl Completer for CommandHelper {
    type Candidate = Pair;

    fn complete(
        &self,
        line: &str,
        pos: usize,
        _ctx: &ReadlineContext<'_>,
    ) -> rustyline::Result<(usize, Vec<Pair>)> {
        let prefix = &line[..pos];
        if prefix.trim_start().contains(char::is_whitespace) {
            return Ok((pos, Vec::new()));
        }
        let start = prefix.len() - prefix.trim_start().len();

        let needle = prefix[start..].to_ascii_lowercase();
        let candidates = self
            .commands
            .iter()
            .filter(|name| name.starts_with(&needle))
            .map(|name| Pair {
                display: name.clone(),
                replacement: name.clone(),
            })
            .collect();
        Ok((start, candidates))
    }
}

impl Hinter for CommandHelper {
    type Hint = String;
}

impl Highlighter for CommandHelper {
    fn highlight<'l>(&self, line: &'l str, _pos: usize) -> Cow<'l, str> {
        Cow::Borrowed(line)
    }
}

impl Validator for CommandHelper {
    fn validate(&self, _ctx: &mut ValidationContext) -> rustyline::Result<ValidationResult> {
        Ok(ValidationResult::Valid(None))
    }
}

pub(crate) fn parse_command_line(input: &str) -> Result<Vec<String>, ParseError> {
    split(input).map_err(|err| ParseError {
        message: err.to_string(),
    })
}

#[derive(Debug)]
pub(crate) struct ParseError {
    message: String,
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}
