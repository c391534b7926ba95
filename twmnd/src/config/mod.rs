//! Configuration management: defaults, validation, loading from file + environment.

pub mod app_config;
pub mod defaults;
pub mod manager;
pub mod validation;

pub use app_config::AppConfig;
pub use manager::SettingsManager;

use std::path::PathBuf;

/// Location of the config file.
/// Priority: TWMND_CONFIG env var > <config dir>/twmn/twmnd.toml
pub fn config_path() -> PathBuf {
    if let Ok(path) = std::env::var("TWMND_CONFIG") {
        return PathBuf::from(path);
    }
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("twmn")
        .join("twmnd.toml")
}
