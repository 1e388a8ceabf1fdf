//! Widget preference persistence.
//!
//! Stores display labels and reply timing as JSON at
//! `~/.local/share/chat-widget-sim/config.json`. Loaded once on startup;
//! any read or parse error falls back to defaults.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

/// Default config file path.
fn default_path() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("chat-widget-sim")
        .join("config.json")
}

/// Persisted widget settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WidgetConfig {
    #[serde(default = "default_user_label")]
    pub user_label: String,
    #[serde(default = "default_admin_label")]
    pub admin_label: String,
    /// Lower bound of the simulated reply delay, inclusive.
    #[serde(default = "default_delay_min")]
    pub reply_delay_min_ms: u64,
    /// Upper bound of the simulated reply delay, exclusive.
    #[serde(default = "default_delay_max")]
    pub reply_delay_max_ms: u64,
    #[serde(default = "default_true")]
    pub auto_focus: bool,
    /// Path the config was loaded from (not serialized).
    #[serde(skip)]
    path: PathBuf,
}

fn default_user_label() -> String { "You".into() }
fn default_admin_label() -> String { "Admin".into() }
fn default_delay_min() -> u64 { 1000 }
fn default_delay_max() -> u64 { 3000 }
fn default_true() -> bool { true }

impl Default for WidgetConfig {
    fn default() -> Self {
        Self {
            user_label: default_user_label(),
            admin_label: default_admin_label(),
            reply_delay_min_ms: default_delay_min(),
            reply_delay_max_ms: default_delay_max(),
            auto_focus: true,
            path: default_path(),
        }
    }
}

impl WidgetConfig {
    /// Load from disk, falling back to defaults on any error.
    pub fn load() -> Self {
        Self::load_from(default_path())
    }

    /// Load from an explicit path (tests use a temp dir).
    pub fn load_from(path: PathBuf) -> Self {
        let mut config: Self = match std::fs::read_to_string(&path) {
            Ok(contents) => serde_json::from_str(&contents).unwrap_or_default(),
            Err(_) => Self::default(),
        };
        config.path = path;
        config
    }

    /// Persist current config to disk.
    pub fn save(&self) {
        if let Some(parent) = self.path.parent() {
            let _ = std::fs::create_dir_all(parent);
        }
        if let Ok(json) = serde_json::to_string_pretty(self) {
            let _ = std::fs::write(&self.path, json);
        }
    }

    pub fn reply_delay_min(&self) -> Duration {
        Duration::from_millis(self.reply_delay_min_ms)
    }

    pub fn reply_delay_max(&self) -> Duration {
        Duration::from_millis(self.reply_delay_max_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = WidgetConfig::load_from(dir.path().join("config.json"));
        assert_eq!(config.user_label, "You");
        assert_eq!(config.reply_delay_min_ms, 1000);
        assert_eq!(config.reply_delay_max_ms, 3000);
        assert!(config.auto_focus);
    }

    #[test]
    fn save_then_load_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");

        let mut config = WidgetConfig::load_from(path.clone());
        config.admin_label = "Support".into();
        config.reply_delay_max_ms = 5000;
        config.save();

        let reloaded = WidgetConfig::load_from(path);
        assert_eq!(reloaded.admin_label, "Support");
        assert_eq!(reloaded.reply_delay_max_ms, 5000);
    }

    #[test]
    fn partial_json_fills_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, r#"{"admin_label":"Helpdesk"}"#).unwrap();

        let config = WidgetConfig::load_from(path);
        assert_eq!(config.admin_label, "Helpdesk");
        assert_eq!(config.user_label, "You");
        assert_eq!(config.reply_delay_min_ms, 1000);
    }
}
