//! Runtime application configuration loaded from settings.

use std::path::PathBuf;
use std::time::Duration;

use serde::Serialize;

use super::manager::SettingsManager;
use crate::notification::position::Anchor;

/// Runtime configuration populated from the settings provider.
#[derive(Debug, Clone, Serialize)]
pub struct AppConfig {
    pub background_color: String,
    pub foreground_color: String,
    pub font: Option<PathBuf>,
    pub bold_font: Option<PathBuf>,
    pub font_size: u32,
    pub position: Anchor,
    pub height: u32,
    pub screen_width: u32,
    pub screen_height: u32,
    pub host: String,
    pub port: u16,
    pub sound_command: Option<String>,
    pub hold_ms: u64,
    pub animation_ms: u64,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            background_color: "black".into(),
            foreground_color: "#999999".into(),
            font: None,
            bold_font: None,
            font_size: 13,
            position: Anchor::TopRight,
            height: 18,
            screen_width: 1920,
            screen_height: 1080,
            host: "0.0.0.0".into(),
            port: 9797,
            sound_command: None,
            hold_ms: 3000,
            animation_ms: 1000,
        }
    }
}

impl AppConfig {
    /// Load configuration from the settings manager.
    pub fn load(sm: &SettingsManager) -> Result<Self, anyhow::Error> {
        let g = |key: &str| -> String { sm.get_setting(key).unwrap_or_default() };
        let d = Self::default();

        Ok(Self {
            background_color: g("gui/background_color"),
            foreground_color: g("gui/foreground_color"),
            font: non_empty(g("gui/font")).map(PathBuf::from),
            bold_font: non_empty(g("gui/bold_font")).map(PathBuf::from),
            font_size: parse_or(&g("gui/font_size"), d.font_size),
            position: Anchor::from_str_setting(&g("gui/position")),
            height: parse_or(&g("gui/height"), d.height),
            screen_width: parse_or(&g("gui/screen_width"), d.screen_width),
            screen_height: parse_or(&g("gui/screen_height"), d.screen_height),
            host: non_empty(g("main/host")).unwrap_or(d.host),
            port: parse_or(&g("main/port"), d.port),
            sound_command: non_empty(g("main/sound_command")),
            hold_ms: parse_or(&g("main/duration"), d.hold_ms),
            animation_ms: parse_or(&g("main/animation_duration"), d.animation_ms),
        })
    }

    /// Time the popup stays fully extended.
    pub fn hold_duration(&self) -> Duration {
        Duration::from_millis(self.hold_ms)
    }

    /// Length of one slide animation.
    pub fn animation_duration(&self) -> Duration {
        Duration::from_millis(self.animation_ms.max(1))
    }
}

fn non_empty(s: String) -> Option<String> {
    let trimmed = s.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

fn parse_or<T: std::str::FromStr>(s: &str, default: T) -> T {
    if s.is_empty() {
        return default;
    }
    s.trim().parse().unwrap_or(default)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_default_settings() {
        let config = AppConfig::load(&SettingsManager::default()).unwrap();
        let d = AppConfig::default();
        assert_eq!(config.port, d.port);
        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.height, d.height);
        assert_eq!(config.position, d.position);
        assert_eq!(config.hold_duration(), Duration::from_millis(3000));
        assert_eq!(config.animation_duration(), Duration::from_millis(1000));
        assert!(config.font.is_none());
        assert!(config.sound_command.is_none());
    }

    #[test]
    fn typed_values_from_file() {
        let sm = SettingsManager::from_toml_str(
            "[gui]\nposition = \"bottom_right\"\nfont = \"/fonts/a.ttf\"\n\
             [main]\nport = 1234\nduration = 500\nsound_command = \"  \"\n",
        )
        .unwrap();
        let config = AppConfig::load(&sm).unwrap();
        assert_eq!(config.position, Anchor::BottomRight);
        assert_eq!(config.port, 1234);
        assert_eq!(config.hold_ms, 500);
        assert_eq!(config.font, Some(PathBuf::from("/fonts/a.ttf")));
        assert!(config.sound_command.is_none());
    }

    #[test]
    fn upper_case_position_is_accepted() {
        let sm = SettingsManager::from_toml_str("[gui]\nposition = \"BOTTOM_RIGHT\"\n").unwrap();
        assert_eq!(sm.get_setting("gui/position").unwrap(), "BOTTOM_RIGHT");
        let config = AppConfig::load(&sm).unwrap();
        assert_eq!(config.position, Anchor::BottomRight);
    }
}
