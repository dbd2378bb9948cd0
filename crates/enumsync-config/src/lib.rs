//! Configuration management for enumsync
//!
//! The configuration lives in a small TOML file. Every key is optional; the
//! accessors fall back to the defaults used by a standard Inertia + Vue layout.
//!
//! Resolution order for the file itself:
//! 1. `ENUMSYNC_CONFIG` environment variable
//! 2. `./enumsync.toml` in the working directory
//! 3. `~/.config/enumsync/enumsync.toml`

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Environment variable that overrides the config file location
pub const CONFIG_ENV: &str = "ENUMSYNC_CONFIG";

/// Name of the config file
pub const CONFIG_FILE_NAME: &str = "enumsync.toml";

/// Default location of the generated enum declarations
pub const DEFAULT_ENUMS_OUTPUT: &str = "resources/js/types/enums.d.ts";

/// Default location of the generated shared-props declarations
pub const DEFAULT_PAGE_PROPS_OUTPUT: &str = "resources/js/types/inertia.d.ts";

/// Module whose `PageProps` interface receives the `enums` field
pub const DEFAULT_PROPS_MODULE: &str = "@inertiajs/vue3";

/// Lifetime of the cached enum payload
pub const DEFAULT_CACHE_TTL_SECS: u64 = 3600;

/// Keys accepted by `Config::get` / `Config::set`
pub const SUPPORTED_KEYS: &[&str] = &[
    "source-dir",
    "enums-output",
    "page-props-output",
    "props-module",
    "cache-path",
    "cache-ttl",
];

/// Error type for config loading and updates
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Failed to serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),

    #[error("Unknown config key: {0}. Currently supported keys: {keys}", keys = SUPPORTED_KEYS.join(", "))]
    UnknownKey(String),

    #[error("Invalid value for {key}: {value}")]
    InvalidValue { key: String, value: String },
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub struct Config {
    /// Directory of enum definition files; the built-in registry is used when unset
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_dir: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enums_output: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_props_output: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub props_module: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cache_path: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cache_ttl: Option<u64>,
}

impl Config {
    pub fn path() -> PathBuf {
        if let Ok(env_path) = std::env::var(CONFIG_ENV) {
            let trimmed = env_path.trim();
            if !trimmed.is_empty() {
                return PathBuf::from(trimmed);
            }
        }

        let local = PathBuf::from(CONFIG_FILE_NAME);
        if local.is_file() {
            return local;
        }

        #[cfg(not(target_os = "windows"))]
        let default = dirs::home_dir().map(|h| h.join(".config").join("enumsync"));

        #[cfg(target_os = "windows")]
        let default = dirs::config_dir().map(|c| c.join("enumsync"));

        default.map_or(local, |dir| dir.join(CONFIG_FILE_NAME))
    }

    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from_path(&Self::path())
    }

    /// Load from an explicit path; a missing file yields the default config
    pub fn load_from_path(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Ok(Config::default());
        }
        let content = fs::read_to_string(path)?;
        Ok(toml::from_str(&content)?)
    }

    pub fn save(&self) -> Result<(), ConfigError> {
        self.save_to_path(&Self::path())
    }

    pub fn save_to_path(&self, path: &Path) -> Result<(), ConfigError> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        let content = toml::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }

    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            "source-dir" => self.source_dir.clone(),
            "enums-output" => self.enums_output.clone(),
            "page-props-output" => self.page_props_output.clone(),
            "props-module" => self.props_module.clone(),
            "cache-path" => self.cache_path.clone(),
            "cache-ttl" => self.cache_ttl.map(|ttl| ttl.to_string()),
            _ => None,
        }
    }

    pub fn set(&mut self, key: &str, value: String) -> Result<(), ConfigError> {
        match key {
            "source-dir" => self.source_dir = Some(value),
            "enums-output" => self.enums_output = Some(value),
            "page-props-output" => self.page_props_output = Some(value),
            "props-module" => self.props_module = Some(value),
            "cache-path" => self.cache_path = Some(value),
            "cache-ttl" => {
                let ttl = value
                    .trim()
                    .parse::<u64>()
                    .map_err(|_| ConfigError::InvalidValue {
                        key: key.to_string(),
                        value: value.clone(),
                    })?;
                self.cache_ttl = Some(ttl);
            }
            _ => return Err(ConfigError::UnknownKey(key.to_string())),
        }
        Ok(())
    }

    pub fn is_empty(&self) -> bool {
        self.values_iter().is_empty()
    }

    pub fn values_iter(&self) -> Vec<(&'static str, String)> {
        SUPPORTED_KEYS
            .iter()
            .filter_map(|key| self.get(key).map(|value| (*key, value)))
            .collect()
    }

    pub fn source_dir(&self) -> Option<PathBuf> {
        self.source_dir.as_ref().map(PathBuf::from)
    }

    pub fn enums_output_path(&self) -> PathBuf {
        PathBuf::from(
            self.enums_output
                .as_deref()
                .unwrap_or(DEFAULT_ENUMS_OUTPUT),
        )
    }

    pub fn page_props_output_path(&self) -> PathBuf {
        PathBuf::from(
            self.page_props_output
                .as_deref()
                .unwrap_or(DEFAULT_PAGE_PROPS_OUTPUT),
        )
    }

    pub fn props_module(&self) -> &str {
        self.props_module.as_deref().unwrap_or(DEFAULT_PROPS_MODULE)
    }

    pub fn cache_ttl_secs(&self) -> u64 {
        self.cache_ttl.unwrap_or(DEFAULT_CACHE_TTL_SECS)
    }

    /// Directory holding the cached enum payload
    pub fn cache_dir(&self) -> PathBuf {
        if let Some(ref path) = self.cache_path {
            return PathBuf::from(path);
        }

        #[cfg(not(target_os = "windows"))]
        {
            dirs::home_dir().map_or_else(
                || PathBuf::from(".cache/enumsync"),
                |h| h.join(".cache").join("enumsync"),
            )
        }

        #[cfg(target_os = "windows")]
        {
            dirs::cache_dir().map_or_else(
                || PathBuf::from("cache\\enumsync"),
                |c| c.join("enumsync"),
            )
        }
    }
}
