use crate::cli::core::{CommandError, CommandResult, ShellContext};
use crate::cli::registry::CommandEntry;

pub(crate) fn definitions() -> Vec<CommandEntry> {
    vec![CommandEntry::new(
        "config",
        "View and change console preferences",
        "config [show|set <currency|color|plain> <value>]",
        cmd_config,
    )]
}

fn cmd_config(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    if args.is_empty() || args[0].eq_ignore_ascii_case("show") {
        return context.show_config();
    }

    match args[0].to_lowercase().as_str() {
        "set" => {
            if args.len() < 3 {
                return Err(CommandError::InvalidArguments(
                    "usage: config set <currency|color|plain> <value>".into(),
                ));
            }
            context.set_config_value(args[1], &args[2..].join(" "))
        }
        _ => Err(CommandError::InvalidArguments(
            "usage: config [show|set <currency|color|plain> <value>]".into(),
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::core::CliMode;
    use crate::cli::io::ScriptInput;
    use crate::config::{Config, ConfigManager};
    use std::io::Cursor;
    use tempfile::TempDir;

    fn context_with_manager(dir: &TempDir) -> ShellContext {
        let input = ScriptInput::new(Cursor::new(Vec::new()));
        let manager = ConfigManager::with_base_dir(dir.path().to_path_buf()).unwrap();
        ShellContext::new(CliMode::Script, Config::default(), Box::new(input))
            .with_config_manager(manager)
    }

    #[test]
    fn set_currency_persists_to_disk() {
        let dir = TempDir::new().unwrap();
        let mut context = context_with_manager(&dir);

        cmd_config(&mut context, &["set", "currency", "EUR "]).unwrap();
        cmd_config(&mut context, &["set", "plain", "on"]).unwrap();

        let stored = ConfigManager::with_base_dir(dir.path().to_path_buf())
            .unwrap()
            .load()
            .unwrap();
        assert_eq!(stored.currency_symbol, "EUR ");
        assert!(stored.accessibility.plain_output);
        assert_eq!(context.config.format_amount(2.0), "EUR 2");
    }

    #[test]
    fn rejects_unknown_keys_and_bad_toggles() {
        let dir = TempDir::new().unwrap();
        let mut context = context_with_manager(&dir);

        let err = cmd_config(&mut context, &["set", "rate", "9"]).unwrap_err();
        assert!(matches!(err, CommandError::InvalidArguments(_)));

        let err = cmd_config(&mut context, &["set", "color", "maybe"]).unwrap_err();
        assert!(matches!(err, CommandError::InvalidArguments(_)));
        assert!(context.config.ui_color_enabled);
        assert!(!dir.path().join("config.json").exists());
    }

    #[test]
    fn session_only_context_updates_in_memory() {
        let input = ScriptInput::new(Cursor::new(Vec::new()));
        let mut context = ShellContext::new(CliMode::Script, Config::default(), Box::new(input));

        cmd_config(&mut context, &["set", "currency", "£"]).unwrap();
        assert_eq!(context.config.currency_symbol, "£");
        cmd_config(&mut context, &["show"]).unwrap();
    }
}
