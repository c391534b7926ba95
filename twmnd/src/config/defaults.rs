//! All setting definitions with their default values.

use std::collections::HashMap;
use std::sync::LazyLock;

type DefTuple = (&'static str, &'static str, &'static str);

const DEFS: &[DefTuple] = &[
    ("gui/background_color", "black", "Popup background colour"),
    ("gui/foreground_color", "#999999", "Popup text colour"),
    ("gui/font", "", "Path to the TTF/OTF font used to measure text"),
    ("gui/bold_font", "", "Path to the bold face; falls back to gui/font"),
    ("gui/font_size", "13", "Font pixel size"),
    ("gui/position", "top_right", "Corner: top_left, top_right, bottom_left, bottom_right"),
    ("gui/height", "18", "Popup height in pixels"),
    ("gui/screen_width", "1920", "Available screen width for the headless surface"),
    ("gui/screen_height", "1080", "Available screen height for the headless surface"),
    ("main/host", "0.0.0.0", "Address the daemon listens on"),
    ("main/port", "9797", "UDP port the daemon listens on"),
    ("main/sound_command", "", "Command run when a notification is shown"),
    ("main/duration", "3000", "Hold time in milliseconds once the popup is fully out"),
    ("main/animation_duration", "1000", "Slide animation length in milliseconds"),
];

/// Namespace for named icon paths (`icons/<name>`).
pub const ICONS_SECTION: &str = "icons";

/// A single setting definition.
#[derive(Debug, Clone)]
pub struct SettingDef {
    pub key: &'static str,
    pub default: &'static str,
    pub description: &'static str,
}

/// Global setting definitions indexed by key.
pub static DEFAULT_SETTINGS: LazyLock<HashMap<&'static str, SettingDef>> = LazyLock::new(|| {
    DEFS.iter()
        .map(|&(key, default, description)| {
            (
                key,
                SettingDef {
                    key,
                    default,
                    description,
                },
            )
        })
        .collect()
});

/// Get the default value for a setting key, or `None` if not defined.
pub fn get_default(key: &str) -> Option<&'static str> {
    DEFAULT_SETTINGS.get(key).map(|d| d.default)
}

/// Environment variable that overrides `key`, e.g. `main/port` → `TWMND_MAIN_PORT`.
pub fn env_var_name(key: &str) -> String {
    format!("TWMND_{}", key.replace('/', "_").to_uppercase())
}
