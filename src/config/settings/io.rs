// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

use std::path::{Path, PathBuf};

use crate::error::Result;

use super::Settings;

/// Environment variable that replaces `endpoint.base_url`
pub const ENDPOINT_ENV: &str = "GREENOPS_CHAT_ENDPOINT";

/// Environment variable that relocates the settings home
pub const HOME_ENV: &str = "GREENOPS_CHAT_HOME";

impl Settings {
    /// Get the default settings file path.
    pub fn default_path() -> PathBuf {
        Self::home().join("settings.json")
    }

    /// Load settings from the default path.
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::default_path())
    }

    /// Load settings from a specific path, then apply environment overrides.
    /// A missing file yields the defaults. Callers validate once every
    /// override has been applied.
    pub fn load_from(path: &Path) -> Result<Self> {
        let mut settings = if path.exists() {
            let content = std::fs::read_to_string(path)?;
            serde_json::from_str(&content)?
        } else {
            Self::default()
        };

        settings.apply_env_overrides();
        Ok(settings)
    }

    /// Save settings to a specific path.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Apply environment overrides on top of file values.
    pub fn apply_env_overrides(&mut self) {
        if let Ok(url) = std::env::var(ENDPOINT_ENV) {
            if !url.trim().is_empty() {
                self.endpoint.base_url = url.trim().to_string();
            }
        }
    }

    /// Get the greenops-chat home directory (~/.greenops-chat or $GREENOPS_CHAT_HOME).
    pub fn home() -> PathBuf {
        if let Ok(home) = std::env::var(HOME_ENV) {
            return PathBuf::from(home);
        }
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".greenops-chat")
    }

    /// Log file used while the terminal widget owns the screen.
    pub fn log_path() -> PathBuf {
        Self::home().join("chat.log")
    }
}
