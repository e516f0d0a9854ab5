//! Error types for style resolution.

use thiserror::Error;

/// Errors that can occur while resolving style directives.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum StyleError {
    /// Unknown foreground color name.
    #[error("unknown color: {0}")]
    UnknownColor(String),

    /// Unknown background color name.
    #[error("unknown background color: {0}")]
    UnknownBackground(String),

    /// Unknown modifier name.
    #[error("unknown modifier: {0}")]
    UnknownModifier(String),

    /// A bare style name that matched none of the three tables.
    #[error("unknown style: {0}")]
    UnknownStyle(String),

    /// A directive of a type the styling grammar does not accept.
    #[error("unsupported style directive type: {0}")]
    UnsupportedType(&'static str),
}

impl StyleError {
    /// Returns true for the "name failed to resolve" family of errors.
    pub fn is_unknown(&self) -> bool {
        !matches!(self, StyleError::UnsupportedType(_))
    }
}
