/// Generates the default `config.toml` contents with explanatory comments.
///
/// This is used by `orario init` to create a starter config file that
/// users can immediately edit.
pub fn generate_config() -> String {
    r##"# Orario configuration
# Location: ~/.config/orario/config.toml

[clock]
# Whether the time line is shown.
show_time = true
# Time display style: "24" for 14:05:07, "12" for 2:05:07 PM.
time_format = "24"
# Whether the date line is shown.
show_date = true
# strftime-style date pattern. Leave empty to use the pattern
# customary for the configured language.
# Tokens: %A weekday, %a short weekday, %d day, %B month name,
# %b short month, %m month number, %Y year. %-d drops the leading zero.
date_format = ""
# Language for month/day names and AM/PM markers.
# Available: en-GB, en-US, de, fr, es, it. Unknown codes fall back to en-GB.
lang = "en-GB"

[logging]
# Enable file logging to ~/.config/orario/logs/orario.log.
enabled = false
# Minimum log level: "debug", "info", "warn", or "error".
level = "info"
# Maximum log file size in MB before rotation.
max_file_mb = 10
"##
    .to_string()
}
