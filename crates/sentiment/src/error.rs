//! Error types for the sentiment crate.

use thiserror::Error;

/// Errors surfaced by the analyzer wrapper.
///
/// The analyzer's output contract is four named polarity fields; anything
/// else is a contract violation and aborts the run instead of defaulting
/// to zero.
#[derive(Error, Debug)]
pub enum SentimentError {
    /// The analyzer output lacked one of its four polarity fields
    #[error("Analyzer output missing field: {field}")]
    MissingField { field: &'static str },
}

/// Convenience type alias for Results in this crate
pub type Result<T> = std::result::Result<T, SentimentError>;
