//! Command result types shared by the shell loop and command handlers.

use std::io;

use toll_core::CoreError;

pub use crate::cli::shell_context::{CliMode, ShellContext};
pub use crate::errors::CliError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum LoopControl {
    Continue,
    Exit,
}

pub type CommandResult = Result<(), CommandError>;

#[derive(Debug, thiserror::Error)]
pub enum CommandError {
    #[error("{0}")]
    InvalidArguments(String),
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error(transparent)]
    Serde(#[from] serde_json::Error),
    #[error(transparent)]
    Core(#[from] CoreError),
    #[error(transparent)]
    Cli(Box<CliError>),
    #[error("input closed")]
    InputClosed,
    #[error("operation cancelled")]
    Cancelled,
    #[error("exit requested")]
    ExitRequested,
}

impl From<CliError> for CommandError {
    fn from(err: CliError) -> Self {
        match err {
            CliError::Input(message) | CliError::Command(message) => {
                CommandError::InvalidArguments(message)
            }
            other => CommandError::Cli(Box::new(other)),
        }
    }
}
