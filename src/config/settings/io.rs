// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

use std::path::PathBuf;

use crate::error::{DeployError, Result};

use super::Settings;

impl Settings {
    /// Get the default settings file path.
    pub fn default_path() -> PathBuf {
        Self::home().join("settings.json")
    }

    /// Load settings from the default path.
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::default_path())
    }

    /// Load settings from a specific path. A missing file yields pure
    /// defaults; an unreadable or invalid one is a configuration error.
    pub fn load_from(path: &PathBuf) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)?;
        let settings: Settings = serde_json::from_str(&content).map_err(|e| {
            DeployError::Config(format!("invalid settings file {}: {}", path.display(), e))
        })?;
        settings.validate()?;
        Ok(settings)
    }

    /// Save settings to a specific path, creating parent directories.
    pub fn save_to(&self, path: &PathBuf) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Get the whoamictl home directory (~/.whoamictl or $WHOAMICTL_HOME).
    pub fn home() -> PathBuf {
        if let Ok(home) = std::env::var("WHOAMICTL_HOME") {
            return PathBuf::from(home);
        }
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".whoamictl")
    }
}
