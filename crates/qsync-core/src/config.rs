use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Default quiet period before the URL is rewritten.
pub const DEFAULT_DEBOUNCE_MS: u64 = 500;

/// Rejected configuration values.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("filter key must not be empty")]
    EmptyKey,
    #[error("listing route must be an absolute path, got {0:?}")]
    RelativeListingRoute(String),
    #[error("debounce_ms must be greater than zero")]
    ZeroDebounce,
}

/// Which query key is synced, and where clearing it is meaningful.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FilterConfig {
    /// Query parameter the filter value is written to.
    pub key: String,
    /// Path on which an empty value removes the key. Elsewhere an empty value is ignored.
    pub listing_route: String,
    /// Options offered by the filter input (besides "all").
    pub subjects: Vec<String>,
    /// Values treated like the empty value. Empty by default, so "all" is written as-is.
    pub clear_values: Vec<String>,
}

impl Default for FilterConfig {
    fn default() -> Self {
        Self {
            key: "subject".to_string(),
            listing_route: "/companions".to_string(),
            subjects: [
                "maths",
                "language",
                "science",
                "history",
                "coding",
                "economics",
            ]
            .into_iter()
            .map(String::from)
            .collect(),
            clear_values: Vec::new(),
        }
    }
}

impl FilterConfig {
    /// True if `value` means "no filter".
    pub fn is_clear_value(&self, value: &str) -> bool {
        value.is_empty() || self.clear_values.iter().any(|v| v == value)
    }

    pub fn is_known_subject(&self, value: &str) -> bool {
        self.subjects.iter().any(|s| s == value)
    }
}

/// Global configuration loaded from `~/.config/qsync/config.toml`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct QsyncConfig {
    /// Quiet period in milliseconds.
    pub debounce_ms: u64,
    pub filter: FilterConfig,
}

impl Default for QsyncConfig {
    fn default() -> Self {
        Self {
            debounce_ms: DEFAULT_DEBOUNCE_MS,
            filter: FilterConfig::default(),
        }
    }
}

impl QsyncConfig {
    pub fn debounce(&self) -> Duration {
        Duration::from_millis(self.debounce_ms)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.debounce_ms == 0 {
            return Err(ConfigError::ZeroDebounce);
        }
        if self.filter.key.is_empty() {
            return Err(ConfigError::EmptyKey);
        }
        if !self.filter.listing_route.starts_with('/') {
            return Err(ConfigError::RelativeListingRoute(
                self.filter.listing_route.clone(),
            ));
        }
        Ok(())
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("qsync")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load and validate configuration from `path`.
pub fn load_from(path: &Path) -> Result<QsyncConfig> {
    let data = fs::read_to_string(path)
        .with_context(|| format!("reading config {}", path.display()))?;
    let cfg: QsyncConfig =
        toml::from_str(&data).with_context(|| format!("parsing config {}", path.display()))?;
    cfg.validate()
        .with_context(|| format!("invalid config {}", path.display()))?;
    Ok(cfg)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<QsyncConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = QsyncConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    load_from(&path)
}
