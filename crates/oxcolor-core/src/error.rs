//! Error types for oxcolor

use thiserror::Error;

/// Result type for oxcolor operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in oxcolor operations
///
/// Only the CSS hex parser can fail. Out-of-gamut channels, negative
/// chroma and out-of-range hues are not errors; every conversion
/// processes them arithmetically.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum Error {
    /// Hex string length (after stripping an optional `#`) is not 3 or 6
    #[error("invalid hex color length: {0} (expected 3 or 6 digits)")]
    InvalidHexLength(usize),

    /// A character in a hex string is not a hex digit
    #[error("invalid hex digit: {0:?}")]
    InvalidHexDigit(char),
}
