use thiserror::Error;
use toll_config::ConfigError as TollConfigError;
use toll_core::CoreError;

/// Unified error type for core/config layers.
#[derive(Error, Debug)]
pub enum TollError {
    #[error(transparent)]
    Core(#[from] CoreError),
    #[error("Configuration error: {0}")]
    ConfigError(String),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// User-facing CLI error wrapper.
#[derive(Error, Debug)]
pub enum CliError {
    #[error(transparent)]
    Toll(#[from] TollError),
    #[error("Input error: {0}")]
    Readline(#[from] rustyline::error::ReadlineError),
    #[error(transparent)]
    Prompt(#[from] dialoguer::Error),
    #[error("Invalid input: {0}")]
    Input(String),
    #[error("Command failed: {0}")]
    Command(String),
}

impl From<TollConfigError> for TollError {
    fn from(err: TollConfigError) -> Self {
        match err {
            TollConfigError::Io(io) => TollError::Io(io),
            TollConfigError::Serde(message) => TollError::ConfigError(message),
        }
    }
}

impl From<TollConfigError> for CliError {
    fn from(err: TollConfigError) -> Self {
        CliError::from(TollError::from(err))
    }
}

impl From<std::io::Error> for CliError {
    fn from(err: std::io::Error) -> Self {
        CliError::from(TollError::from(err))
    }
}
