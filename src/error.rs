// SPDX-License-Identifier: PMPL-1.0-or-later
//! Error types for sitebot

use thiserror::Error;

pub type Result<T> = std::result::Result<T, SitebotError>;

#[derive(Error, Debug)]
pub enum SitebotError {
    /// A color channel outside [0,255] or a non-numeric color triple.
    #[error("Invalid color value: {0}")]
    InvalidColorValue(String),

    /// An element is missing a required field. Recovered per element.
    #[error("Malformed element descriptor at index {index}: {reason}")]
    MalformedElementDescriptor { index: usize, reason: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Worker pool error: {0}")]
    WorkerPool(#[from] rayon::ThreadPoolBuildError),

    #[error("Configuration error: {0}")]
    Config(String),
}
