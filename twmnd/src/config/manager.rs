//! SettingsManager: file-backed settings with defaults, validation, and env overrides.

use std::collections::BTreeMap;
use std::path::Path;

use anyhow::Context;

use super::defaults::{DEFAULT_SETTINGS, ICONS_SECTION, env_var_name};
use super::validation::validate_setting;

/// Read-only settings addressed by `section/name` keys.
///
/// Lookup order: environment override, config file, built-in default.
#[derive(Debug, Clone, Default)]
pub struct SettingsManager {
    values: BTreeMap<String, String>,
}

/// One setting as reported by [`SettingsManager::all_settings`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SettingInfo {
    pub key: String,
    pub value: String,
    pub description: &'static str,
    pub is_default: bool,
}

impl SettingsManager {
    /// Load settings from an optional TOML file plus process environment overrides.
    ///
    /// A missing file is not an error; an unreadable or unparsable one is.
    pub fn load(path: &Path) -> Result<Self, anyhow::Error> {
        let table = if path.exists() {
            let text = std::fs::read_to_string(path)
                .with_context(|| format!("failed to read {}", path.display()))?;
            let table = parse_table(&text)
                .with_context(|| format!("failed to parse {}", path.display()))?;
            tracing::info!("Loaded settings from {}", path.display());
            Some(table)
        } else {
            tracing::info!("No config file at {}, using defaults", path.display());
            None
        };
        Ok(Self::from_sources(table, |name| std::env::var(name).ok()))
    }

    /// Parse settings from TOML text without consulting the environment.
    pub fn from_toml_str(text: &str) -> Result<Self, anyhow::Error> {
        let table = parse_table(text)?;
        Ok(Self::from_sources(Some(table), |_| None))
    }

    /// Build settings from a parsed file and an environment lookup.
    pub fn from_sources(table: Option<toml::Table>, env: impl Fn(&str) -> Option<String>) -> Self {
        let mut values = BTreeMap::new();

        for (key, value) in table.map(flatten).unwrap_or_default() {
            if let Err(e) = validate_setting(&key, &value) {
                tracing::warn!("Ignoring {key}={value:?}: {e}");
                continue;
            }
            if !DEFAULT_SETTINGS.contains_key(key.as_str()) && !is_icon_key(&key) {
                tracing::debug!("Unknown setting {key}");
            }
            values.insert(key, value);
        }

        for key in DEFAULT_SETTINGS.keys() {
            let name = env_var_name(key);
            let Some(env_val) = env(&name) else {
                continue;
            };
            match validate_setting(key, &env_val) {
                Ok(()) => {
                    tracing::info!("Setting {key} overridden by {name}");
                    values.insert(key.to_string(), env_val);
                }
                Err(e) => tracing::warn!("Ignoring {name}={env_val:?}: {e}"),
            }
        }

        Self { values }
    }

    /// Get a setting value. Falls back to default if not configured.
    pub fn get_setting(&self, key: &str) -> Result<String, anyhow::Error> {
        if let Some(val) = self.values.get(key) {
            return Ok(val.clone());
        }
        if let Some(def) = DEFAULT_SETTINGS.get(key) {
            return Ok(def.default.to_string());
        }
        anyhow::bail!("setting not found: {key}");
    }

    /// Whether `key` has a configured or default value.
    pub fn has_setting(&self, key: &str) -> bool {
        self.values.contains_key(key) || DEFAULT_SETTINGS.contains_key(key)
    }

    /// Every known key: defaults plus configured icons, sorted.
    pub fn all_keys(&self) -> Vec<String> {
        let mut keys: Vec<String> = DEFAULT_SETTINGS.keys().map(|k| k.to_string()).collect();
        let extra = self
            .values
            .keys()
            .filter(|k| !DEFAULT_SETTINGS.contains_key(k.as_str()));
        keys.extend(extra.cloned());
        keys.sort();
        keys
    }

    /// Every known setting with its effective value, sorted by key.
    pub fn all_settings(&self) -> Vec<SettingInfo> {
        self.all_keys()
            .into_iter()
            .map(|key| {
                let def = DEFAULT_SETTINGS.get(key.as_str());
                let configured = self.values.get(&key);
                SettingInfo {
                    value: configured
                        .cloned()
                        .or_else(|| def.map(|d| d.default.to_string()))
                        .unwrap_or_default(),
                    description: def.map_or("", |d| d.description),
                    is_default: configured.is_none(),
                    key,
                }
            })
            .collect()
    }

    /// Path configured under `icons/<name>`, if any.
    pub fn icon_path(&self, name: &str) -> Option<&str> {
        self.values
            .get(&format!("{ICONS_SECTION}/{name}"))
            .map(String::as_str)
    }
}

fn parse_table(text: &str) -> Result<toml::Table, anyhow::Error> {
    Ok(toml::from_str::<toml::Table>(text)?)
}

fn is_icon_key(key: &str) -> bool {
    key.split_once('/')
        .is_some_and(|(section, name)| section == ICONS_SECTION && !name.is_empty())
}

/// Turn `[section] name = value` tables into `section/name` → string pairs.
fn flatten(table: toml::Table) -> Vec<(String, String)> {
    let mut out = Vec::new();
    for (section, value) in table {
        let toml::Value::Table(entries) = value else {
            tracing::warn!("Ignoring top-level setting {section}: settings live in sections");
            continue;
        };
        for (name, value) in entries {
            let key = format!("{section}/{name}");
            let text = match value {
                toml::Value::String(s) => s,
                toml::Value::Integer(i) => i.to_string(),
                toml::Value::Float(f) => f.to_string(),
                toml::Value::Boolean(b) => b.to_string(),
                other => {
                    tracing::warn!("Ignoring {key}: unsupported value type {}", other.type_str());
                    continue;
                }
            };
            out.push((key, text));
        }
    }
    out
}
