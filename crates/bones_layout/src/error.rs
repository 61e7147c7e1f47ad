//! Error types for bones_layout

use thiserror::Error;

/// Errors raised while loading a skeleton configuration
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Malformed TOML document
    #[error("invalid skeleton TOML: {0}")]
    Toml(#[from] toml::de::Error),

    /// Malformed JSON document
    #[error("invalid skeleton JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type for configuration loading
pub type Result<T> = std::result::Result<T, ConfigError>;
