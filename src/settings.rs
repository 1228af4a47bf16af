pub use crate::settings_types::*;
use crate::storage_dir;

use anyhow::Context;
use std::fs;
use std::path::Path;
use tracing::{error, info};

fn read_settings(path: &Path) -> anyhow::Result<Settings> {
    let content =
        fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))?;
    toml::from_str(&content).with_context(|| format!("failed to parse {}", path.display()))
}

impl Settings {
    /// Loads settings from the per-user data directory, creating the file
    /// with defaults on first run. A broken file falls back to defaults with
    /// a logged error rather than refusing to start.
    pub fn load() -> Self {
        let path = storage_dir().join("settings.toml");
        if path.exists() {
            match read_settings(&path) {
                Ok(settings) => {
                    info!("Loaded settings from {:?}", path);
                    settings
                }
                Err(e) => {
                    error!("{:#}; using defaults", e);
                    Settings::default()
                }
            }
        } else {
            info!("Creating default settings at {:?}", path);
            let settings = Settings::default();
            settings.save();
            settings
        }
    }

    pub fn save(&self) {
        let path = storage_dir().join("settings.toml");
        match toml::to_string_pretty(self) {
            Ok(content) => {
                if let Err(e) = fs::write(&path, content) {
                    error!("Failed to write settings.toml: {}", e);
                }
            }
            Err(e) => error!("Failed to serialize settings: {}", e),
        }
    }
}
