pub mod commands;
pub mod core;
pub mod help;
pub mod io;
pub mod output;
pub mod prompts;
pub mod registry;
pub mod shell;
pub mod shell_context;
pub mod validation;

pub use shell::{run_cli, run_loop};
