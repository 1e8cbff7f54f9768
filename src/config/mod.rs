pub use toll_config::{AccessibilitySettings, Config, ConfigError, ConfigManager};

/// Config manager rooted at `TOLL_TAX_HOME` or the platform config directory.
pub fn default_manager() -> Result<ConfigManager, ConfigError> {
    ConfigManager::with_base_dir(ConfigManager::default_base_dir())
}
