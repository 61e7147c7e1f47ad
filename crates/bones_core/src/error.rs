//! Error types for bones_core

use thiserror::Error;

/// Errors produced while parsing a CSS color string
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ColorError {
    /// The input was empty or whitespace only
    #[error("empty color value")]
    Empty,

    /// The input is not a supported hex, rgb(), rgba() or named color
    #[error("invalid color '{0}'")]
    Invalid(String),
}
