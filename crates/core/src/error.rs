//! Error types for the particle-field core.

use thiserror::Error;

/// Errors produced by particle source operations.
#[derive(Debug, Error)]
pub enum FieldError {
    /// A pool size of zero was requested at construction.
    #[error("invalid pool size: particle count must be non-zero")]
    EmptyPool,

    /// A requested source name was not found in the registry.
    #[error("unknown source: {0}")]
    UnknownSource(String),

    /// A fractional parameter was outside [0, 1].
    #[error("invalid fraction for '{name}': {value} is outside [0, 1]")]
    InvalidFraction { name: String, value: f32 },

    /// A snapshot could not be written.
    #[error("i/o error: {0}")]
    Io(String),
}
