//! Physical key names to navigation commands.

use crate::error::ConfigError;
use crate::navigation::NavCommand;

/// Map a key name (`left`, `ArrowLeft`, `Home`, `Enter`, ...) to a command.
///
/// `Enter` and `Space` select, `Escape` closes, `PageUp`/`PageDown` change
/// month.
pub fn parse_key(name: &str) -> Result<NavCommand, ConfigError> {
    let key = name.trim().to_lowercase();
    let key = key.strip_prefix("arrow").unwrap_or(&key);
    match key {
        "left" | "h" => Ok(NavCommand::MoveLeft),
        "right" | "l" => Ok(NavCommand::MoveRight),
        "up" | "k" => Ok(NavCommand::MoveUp),
        "down" | "j" => Ok(NavCommand::MoveDown),
        "home" => Ok(NavCommand::JumpHome),
        "end" => Ok(NavCommand::JumpEnd),
        "enter" | "return" | "space" => Ok(NavCommand::Select),
        "escape" | "esc" => Ok(NavCommand::Close),
        "pageup" | "pgup" => Ok(NavCommand::PreviousMonth),
        "pagedown" | "pgdn" => Ok(NavCommand::NextMonth),
        _ => Err(ConfigError::UnknownKey(name.to_string())),
    }
}

/// Parse a comma-separated key script such as `"down,down,right,enter"`.
/// Empty entries are skipped.
pub fn parse_key_script(script: &str) -> Result<Vec<NavCommand>, ConfigError> {
    script
        .split(',')
        .filter(|key| !key.trim().is_empty())
        .map(parse_key)
        .collect()
}
