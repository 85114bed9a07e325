//! Error types for the catalog crate.

use thiserror::Error;

/// Errors that can occur while loading the movie catalog or parsing
/// vocabulary values.
///
/// All of these are fatal to a run: there is no retry or partial-result
/// handling anywhere in the pipeline.
#[derive(Error, Debug)]
pub enum CatalogError {
    /// I/O error occurred while reading or creating a file
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The CSV reader rejected the input
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// A required column is absent from the header row
    #[error("Missing required column: {column}")]
    MissingColumn { column: String },

    /// A field had a value outside its fixed vocabulary
    #[error("Invalid value for {field}: {value}")]
    InvalidValue { field: String, value: String },
}

/// Convenience type alias for Results in this crate
pub type Result<T> = std::result::Result<T, CatalogError>;
