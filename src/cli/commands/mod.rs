pub mod config;
pub mod report;
pub mod system;
pub mod vehicle;

use crate::cli::registry::{CommandEntry, CommandRegistry};

const ROOT_COMMAND_ORDER: &[&str] = &[
    "add",
    "total",
    "paying",
    "non-paying",
    "collected",
    "exit",
    "summary",
    "list",
    "config",
    "help",
    "version",
];

pub(crate) fn all_entries() -> Vec<CommandEntry> {
    let mut commands = Vec::new();
    commands.extend(vehicle::definitions());
    commands.extend(report::definitions());
    commands.extend(config::definitions());
    commands.extend(system::definitions());
    commands
}

pub(crate) fn register_all(registry: &mut CommandRegistry) {
    let mut entries = all_entries();
    entries.sort_by_key(|entry| {
        ROOT_COMMAND_ORDER
            .iter()
            .position(|name| entry.name.eq_ignore_ascii_case(name))
            .unwrap_or(ROOT_COMMAND_ORDER.len())
    });
    for entry in entries {
        registry.register(entry);
    }
}

/// Command names used for interactive completion.
pub(crate) fn names() -> Vec<&'static str> {
    all_entries().into_iter().map(|entry| entry.name).collect()
}
