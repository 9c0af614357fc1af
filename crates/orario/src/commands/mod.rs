pub mod init;
pub mod once;
pub mod run;

use orario_core::config::{self, Config};

/// Loads the configuration, applying a CLI language override.
pub fn load_config(lang: Option<String>) -> Config {
    let mut config = config::load();
    if let Some(lang) = lang {
        config.clock.lang = lang;
    }
    config
}
