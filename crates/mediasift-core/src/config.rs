use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

use crate::error::SiftError;

const DEFAULT_CONFIG: &str = include_str!("../../../config/default.toml");

/// Top-level configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SiftConfig {
    pub policy: PolicyConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PolicyConfig {
    /// Merge the user policy file over the built-in rules.
    pub use_user_rules: bool,
    /// Explicit user policy file. Defaults to `policy.toml` in the config dir.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_policy_path: Option<PathBuf>,
}

impl SiftConfig {
    /// Load config: the user file if it exists, otherwise the built-in defaults.
    pub fn load() -> Result<Self, SiftError> {
        Self::load_or_default(&Self::config_path())
    }

    /// Load config from `path` if it exists, otherwise the built-in defaults.
    pub fn load_or_default(path: &Path) -> Result<Self, SiftError> {
        if path.exists() {
            Self::load_from(path)
        } else {
            tracing::debug!(path = %path.display(), "No config file, using defaults");
            Self::from_toml(DEFAULT_CONFIG)
        }
    }

    /// Load config from a specific file.
    pub fn load_from(path: &Path) -> Result<Self, SiftError> {
        let content =
            std::fs::read_to_string(path).map_err(|e| SiftError::Config(e.to_string()))?;
        Self::from_toml(&content)
    }

    pub fn from_toml(toml_str: &str) -> Result<Self, SiftError> {
        toml::from_str(toml_str).map_err(|e| SiftError::Config(e.to_string()))
    }

    /// Save current config to a specific file, creating parent directories.
    pub fn save_to(&self, path: &Path) -> Result<(), SiftError> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content =
            toml::to_string_pretty(self).map_err(|e| SiftError::Config(e.to_string()))?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Path to user config file (XDG on Linux, AppData on Windows).
    pub fn config_path() -> PathBuf {
        Self::project_dirs()
            .map(|d| d.config_dir().join("config.toml"))
            .unwrap_or_else(|| PathBuf::from("config.toml"))
    }

    /// Path to the user policy file.
    pub fn policy_path(&self) -> PathBuf {
        if let Some(path) = &self.policy.user_policy_path {
            return path.clone();
        }
        Self::project_dirs()
            .map(|d| d.config_dir().join("policy.toml"))
            .unwrap_or_else(|| PathBuf::from("policy.toml"))
    }

    fn project_dirs() -> Option<ProjectDirs> {
        ProjectDirs::from("", "", "mediasift")
    }
}

impl Default for SiftConfig {
    fn default() -> Self {
        toml::from_str(DEFAULT_CONFIG).expect("built-in default config is valid TOML")
    }
}
