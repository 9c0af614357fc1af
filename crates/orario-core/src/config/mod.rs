mod loader;
pub mod template;

use serde::{Deserialize, Serialize};

use crate::locale;
use crate::log::LogConfig;

pub use loader::{config_dir, config_path, load, try_load};

/// Top-level configuration for Orario.
///
/// Loaded from `~/.config/orario/config.toml`. Missing sections
/// fall back to defaults thanks to `#[serde(default)]`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Clock display settings.
    pub clock: ClockConfig,
    /// File logging settings.
    pub logging: LogConfig,
}

/// Clock display settings.
///
/// Immutable once handed to the renderer.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ClockConfig {
    /// Whether the time line is rendered.
    pub show_time: bool,
    /// 12-hour or 24-hour time display.
    pub time_format: TimeStyle,
    /// Whether the date line is rendered.
    pub show_date: bool,
    /// strftime-style pattern for the date line. Empty = use the
    /// locale's customary pattern.
    pub date_format: String,
    /// Language code for month/day names and meridiem markers
    /// (e.g. "en-GB", "de"). Unknown codes fall back to en-GB.
    pub lang: String,
}

/// 12-hour vs 24-hour time display.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TimeStyle {
    /// `h:mm:ss AM` style with a meridiem marker.
    #[serde(rename = "12")]
    Twelve,
    /// `HH:mm:ss` style.
    #[default]
    #[serde(rename = "24")]
    TwentyFour,
}

impl Default for ClockConfig {
    fn default() -> Self {
        Self {
            show_time: true,
            time_format: TimeStyle::default(),
            show_date: true,
            date_format: String::new(),
            lang: locale::FALLBACK.into(),
        }
    }
}

impl Config {
    /// Fills derived values after loading.
    ///
    /// An empty date pattern resolves to the customary pattern of the
    /// configured locale, so `config.toml` only needs a `lang` line to
    /// get sensible output.
    pub fn validate(&mut self) {
        if self.clock.date_format.trim().is_empty() {
            self.clock.date_format = locale::lookup(&self.clock.lang).date_format.into();
        }
    }
}
