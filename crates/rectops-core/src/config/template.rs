/// Generates the default `config.toml` contents with explanatory comments.
///
/// This is used by `rectops init` to create a starter config file that
/// users can immediately edit.
pub fn generate_config() -> String {
    r##"# rectops configuration
# Location: ~/.config/rectops/config.toml

[output]
# Result format: "text" (one line per result) or "json".
# The --json flag always forces JSON.
format = "text"

[logging]
# Enable file logging to ~/.config/rectops/logs/rectops.log.
enabled = false
# Minimum log level: "debug", "info", "warn", or "error".
level = "info"
# Maximum log file size in MB before rotation.
max_file_mb = 10
"##
    .to_string()
}
