//! Shared runtime state for CLI interactions and command execution.

use dialoguer::theme::ColorfulTheme;
use strsim::levenshtein;
use toll_core::VehicleCatalog;

use crate::cli::core::{CommandError, CommandResult, LoopControl};
use crate::cli::io::{self as cli_io, LineInput};
use crate::cli::output::{self, OutputPreferences};
use crate::config::{Config, ConfigManager};
use crate::errors::CliError;

use super::commands;
use super::registry::{CommandEntry, CommandRegistry};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CliMode {
    Interactive,
    Script,
}

pub struct ShellContext {
    pub mode: CliMode,
    pub registry: CommandRegistry,
    pub catalog: VehicleCatalog,
    pub config: Config,
    pub config_manager: Option<ConfigManager>,
    pub theme: ColorfulTheme,
    pub input: Box<dyn LineInput>,
    pub last_command: Option<String>,
    pub running: bool,
}

impl ShellContext {
    pub fn new(mode: CliMode, config: Config, input: Box<dyn LineInput>) -> Self {
        let mut registry = CommandRegistry::new();
        commands::register_all(&mut registry);
        Self {
            mode,
            registry,
            catalog: VehicleCatalog::new(),
            config,
            config_manager: None,
            theme: ColorfulTheme::default(),
            input,
            last_command: None,
            running: true,
        }
    }

    /// Persists `config` changes through `manager`; without one they last for the session.
    pub fn with_config_manager(mut self, manager: ConfigManager) -> Self {
        self.config_manager = Some(manager);
        self
    }

    pub fn prompt(&self) -> String {
        "toll> ".to_string()
    }

    pub fn command(&self, name: &str) -> Option<&CommandEntry> {
        self.registry.get(name)
    }

    pub(crate) fn dispatch(
        &mut self,
        command: &str,
        raw: &str,
        args: &[&str],
    ) -> Result<LoopControl, CommandError> {
        if let Some(handler) = self.registry.handler(command) {
            match handler(self, args) {
                Ok(()) => Ok(LoopControl::Continue),
                Err(CommandError::ExitRequested) => Ok(LoopControl::Exit),
                Err(err) => Err(err),
            }
        } else {
            self.suggest_command(raw);
            Ok(LoopControl::Continue)
        }
    }

    pub(crate) fn suggest_command(&self, input: &str) {
        cli_io::print_error(format!(
            "Invalid option `{}`. Please choose a number between 1 and 6 or type `help`.",
            input
        ));

        if input.parse::<u32>().is_ok() {
            return;
        }

        let lowered = input.to_lowercase();
        let best = self
            .registry
            .names()
            .map(|key| (levenshtein(key, &lowered), key))
            .min_by_key(|(distance, _)| *distance);

        if let Some((distance, best)) = best {
            if distance <= 3 {
                cli_io::print_info(format!("Suggestion: `{}`?", best));
            }
        }
    }

    pub(crate) fn show_config(&self) -> CommandResult {
        output::section("Configuration");
        cli_io::print_info(format!(
            "  Currency symbol: {:?}",
            self.config.currency_symbol
        ));
        cli_io::print_info(format!(
            "  Colour output: {}",
            on_off(self.config.ui_color_enabled)
        ));
        cli_io::print_info(format!(
            "  Plain output: {}",
            on_off(self.config.accessibility.plain_output)
        ));
        match &self.config_manager {
            Some(manager) => {
                cli_io::print_info(format!("  File: {}", manager.config_path().display()))
            }
            None => cli_io::print_info("  File: (not persisted)"),
        }
        Ok(())
    }

    pub(crate) fn set_config_value(&mut self, key: &str, value: &str) -> CommandResult {
        match key.to_lowercase().as_str() {
            "currency" => {
                if value.trim().is_empty() {
                    return Err(CommandError::InvalidArguments(
                        "currency symbol cannot be empty".into(),
                    ));
                }
                self.config.currency_symbol = value.to_string();
            }
            "color" | "colour" => self.config.ui_color_enabled = parse_toggle(key, value)?,
            "plain" => self.config.accessibility.plain_output = parse_toggle(key, value)?,
            other => {
                return Err(CommandError::InvalidArguments(format!(
                    "unknown config key `{}`",
                    other
                )))
            }
        }
        self.persist_config()?;
        output::set_preferences(OutputPreferences::from_config(&self.config));
        cli_io::print_success("Configuration updated.");
        Ok(())
    }

    fn persist_config(&self) -> CommandResult {
        if let Some(manager) = &self.config_manager {
            manager.save(&self.config).map_err(CliError::from)?;
            tracing::debug!(path = %manager.config_path().display(), "config saved");
        }
        Ok(())
    }

    pub(crate) fn confirm_exit(&self) -> Result<bool, CliError> {
        if self.mode == CliMode::Script {
            return Ok(true);
        }
        Ok(dialoguer::Confirm::with_theme(&self.theme)
            .with_prompt("Exit Toll Tax?")
            .default(false)
            .interact()?)
    }

    pub(crate) fn report_error(&self, err: CommandError) -> Result<(), CliError> {
        match err {
            CommandError::ExitRequested | CommandError::InputClosed => Ok(()),
            CommandError::InvalidArguments(message) => {
                cli_io::print_error(&message);
                cli_io::print_info("Use `help <command>` for usage details.");
                Ok(())
            }
            CommandError::Cancelled => {
                cli_io::print_warning("Operation cancelled.");
                Ok(())
            }
            CommandError::Io(err) => Err(CliError::from(err)),
            other => {
                tracing::warn!(error = %other, "command failed");
                cli_io::print_error(other.to_string());
                Ok(())
            }
        }
    }

    pub fn status(&self) -> String {
        format!(
            "ShellContext {{ running: {}, last_command: {:?}, vehicles: {} }}",
            self.running,
            self.last_command,
            self.catalog.len()
        )
    }
}

fn on_off(enabled: bool) -> &'static str {
    if enabled {
        "on"
    } else {
        "off"
    }
}

fn parse_toggle(key: &str, value: &str) -> Result<bool, CommandError> {
    match value.to_lowercase().as_str() {
        "on" | "true" | "yes" => Ok(true),
        "off" | "false" | "no" => Ok(false),
        _ => Err(CommandError::InvalidArguments(format!(
            "usage: config set {} <on|off>",
            key
        ))),
    }
}
