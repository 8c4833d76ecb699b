// SPDX-License-Identifier: PMPL-1.0-or-later
//! Configuration handling for sitebot

use crate::error::{Result, SitebotError};
use crate::summary::RatingThresholds;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

/// WCAG AA minimum contrast for normal text
pub const AA_NORMAL_TEXT: f64 = 4.5;

/// WCAG AA minimum contrast for large text
pub const AA_LARGE_TEXT: f64 = 3.0;

/// Default size of the analyzer worker pool
pub const DEFAULT_WORKERS: usize = 4;

/// Main configuration structure
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Number of analyzer threads
    #[serde(default = "default_workers")]
    pub workers: usize,

    #[serde(default)]
    pub contrast: ContrastConfig,

    /// Call-to-action prominence heuristics
    #[serde(default)]
    pub cta: CtaConfig,

    /// Rating bucket boundaries
    #[serde(default)]
    pub rating: RatingThresholds,

    /// Which optional analyzers run
    #[serde(default)]
    pub checks: ChecksConfig,

    #[serde(default)]
    pub log: LogConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            workers: DEFAULT_WORKERS,
            contrast: ContrastConfig::default(),
            cta: CtaConfig::default(),
            rating: RatingThresholds::default(),
            checks: ChecksConfig::default(),
            log: LogConfig::default(),
        }
    }
}

fn default_workers() -> usize {
    DEFAULT_WORKERS
}

fn default_true() -> bool {
    true
}

/// Contrast check configuration
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ContrastConfig {
    /// Minimum passing ratio; AA normal text unless overridden
    #[serde(default = "default_contrast_threshold")]
    pub threshold: f64,
}

impl Default for ContrastConfig {
    fn default() -> Self {
        Self { threshold: AA_NORMAL_TEXT }
    }
}

fn default_contrast_threshold() -> f64 {
    AA_NORMAL_TEXT
}

/// Thresholds that make a button or link count as prominent
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CtaConfig {
    pub min_width: f64,
    pub min_height: f64,
    /// Elements whose top edge is above this y offset are above the fold
    pub fold_cutoff: f64,
    /// Numeric font weight treated as bold
    pub bold_weight: u32,
}

impl Default for CtaConfig {
    fn default() -> Self {
        Self {
            min_width: 80.0,
            min_height: 25.0,
            fold_cutoff: 600.0,
            bold_weight: 600,
        }
    }
}

/// Analyzer toggles. Contrast always runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChecksConfig {
    #[serde(default = "default_true")]
    pub consistency: bool,
    #[serde(default = "default_true")]
    pub hierarchy: bool,
    #[serde(default = "default_true")]
    pub alt_text: bool,
    #[serde(default = "default_true")]
    pub keyboard: bool,
    #[serde(default = "default_true")]
    pub document: bool,
}

impl Default for ChecksConfig {
    fn default() -> Self {
        Self {
            consistency: true,
            hierarchy: true,
            alt_text: true,
            keyboard: true,
            document: true,
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogConfig {
    /// Log level (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self { level: default_log_level() }
    }
}

fn default_log_level() -> String {
    "warn".to_string()
}

impl Config {
    pub fn validate(&self) -> Result<()> {
        if !(1.0..=21.0).contains(&self.contrast.threshold) {
            return Err(SitebotError::Config(format!(
                "contrast threshold {} is outside 1-21",
                self.contrast.threshold
            )));
        }
        if self.workers == 0 {
            return Err(SitebotError::Config("workers must be at least 1".to_string()));
        }
        if self.rating.fair_max < self.rating.good_below {
            return Err(SitebotError::Config(format!(
                "rating.fair_max ({}) must not be below rating.good_below ({})",
                self.rating.fair_max, self.rating.good_below
            )));
        }
        Ok(())
    }
}

/// Load configuration from a path, falling back to defaults when it does not exist
pub fn load_config(path: &Path) -> Result<Config> {
    if !path.exists() {
        debug!("Config file not found at {}, using defaults", path.display());
        return Ok(Config::default());
    }

    let content = std::fs::read_to_string(path)?;

    let config: Config = if path.extension().map(|e| e == "toml").unwrap_or(false) {
        toml::from_str(&content)?
    } else {
        serde_yaml::from_str(&content)?
    };

    config.validate()?;
    debug!(?config, "Loaded configuration");
    Ok(config)
}

/// Get the default config path for a project
pub fn default_config_path() -> PathBuf {
    PathBuf::from(".sitebot/config.yml")
}

/// Write default configuration to a file
pub fn write_default_config(path: &Path) -> Result<()> {
    let config = Config::default();

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    let content = if path.extension().map(|e| e == "toml").unwrap_or(false) {
        toml::to_string_pretty(&config).map_err(|e| SitebotError::Config(e.to_string()))?
    } else {
        serde_yaml::to_string(&config)?
    };

    std::fs::write(path, content)?;
    Ok(())
}
