/// Optional user configuration
///
/// A small JSON file in the user's config directory can point the viewer
/// at a data file and an assets directory. Missing or malformed config
/// falls back to defaults; the last opened data file is written back
/// best-effort so the next launch reopens it.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Data file to open at startup (default: ./data.json)
    #[serde(default)]
    pub data_path: Option<PathBuf>,
    /// Assets root override (default: the data file's directory)
    #[serde(default)]
    pub assets_dir: Option<PathBuf>,
}

impl Config {
    /// Load the config file, or defaults when it is absent or malformed
    pub fn load() -> Self {
        let path = Self::config_path();

        match std::fs::read_to_string(&path) {
            Ok(text) => match serde_json::from_str(&text) {
                Ok(config) => config,
                Err(e) => {
                    eprintln!("⚠️  Ignoring malformed config {}: {}", path.display(), e);
                    Self::default()
                }
            },
            Err(_) => Self::default(),
        }
    }

    /// Write the config back; failures are logged and otherwise ignored
    pub fn save(&self) {
        let path = Self::config_path();

        if let Some(parent) = path.parent() {
            if let Err(e) = std::fs::create_dir_all(parent) {
                eprintln!("⚠️  Could not create config directory: {}", e);
                return;
            }
        }

        match serde_json::to_string_pretty(self) {
            Ok(json) => {
                if let Err(e) = std::fs::write(&path, json) {
                    eprintln!("⚠️  Could not save config {}: {}", path.display(), e);
                }
            }
            Err(e) => eprintln!("⚠️  Could not serialize config: {}", e),
        }
    }

    /// Get the path where the config should be stored
    ///
    /// - Linux: ~/.config/meetup-viewer/config.json
    /// - macOS: ~/Library/Application Support/meetup-viewer/config.json
    /// - Windows: %APPDATA%\meetup-viewer\config.json
    fn config_path() -> PathBuf {
        let mut path = dirs::config_dir()
            .or_else(dirs::home_dir)
            .expect("Could not determine user config directory");

        path.push("meetup-viewer");
        path.push("config.json");
        path
    }
}
