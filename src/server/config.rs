//! Configuration extraction from LSP settings.
//!
//! This module handles parsing configuration values from JSON settings
//! received via `didChangeConfiguration` notifications.

/// Extract the panel-updates toggle from LSP settings.
///
/// Expects settings in the format:
/// ```json
/// { "z80CheatSheet": { "panel": { "enabled": true } } }
/// ```
pub fn extract_panel_enabled(settings: &serde_json::Value) -> Option<bool> {
    settings
        .get("z80CheatSheet")
        .and_then(|v| v.get("panel"))
        .and_then(|v| v.get("enabled"))
        .and_then(|v| v.as_bool())
}

/// Extract the instruction-hovers toggle from LSP settings.
///
/// Expects settings in the format:
/// ```json
/// { "z80CheatSheet": { "hovers": { "enabled": true } } }
/// ```
pub fn extract_hovers_enabled(settings: &serde_json::Value) -> Option<bool> {
    settings
        .get("z80CheatSheet")
        .and_then(|v| v.get("hovers"))
        .and_then(|v| v.get("enabled"))
        .and_then(|v| v.as_bool())
}
