//! CSV catalog loader.
//!
//! The input file needs at least a `title` and a `description` column; any
//! other columns are ignored. Rows missing either value are dropped, the
//! way the rest of the pipeline expects: every surviving row is scorable
//! text.

use crate::error::{CatalogError, Result};
use crate::types::Movie;
use serde::Deserialize;
use std::path::Path;
use tracing::info;

/// Raw row as it appears in the input file. The two required fields may
/// still be empty on malformed rows, which is why they come in as options.
#[derive(Debug, Deserialize)]
struct RawMovieRecord {
    title: Option<String>,
    description: Option<String>,
}

/// Load the movie catalog from a CSV file.
///
/// A missing file or a header row without the required columns fails the
/// whole run; there is no recovery path. Description values are carried
/// verbatim as text, so a numeric-looking description stays a string.
///
/// # Arguments
/// * `path` - Path to a comma-delimited UTF-8 file with `title` and
///   `description` columns
///
/// # Returns
/// * `Ok(Vec<Movie>)` - All complete rows, in file order
/// * `Err` - On I/O failure, CSV failure, or a missing required column
pub fn load_movies(path: &Path) -> Result<Vec<Movie>> {
    let mut reader = csv::Reader::from_path(path)?;

    // Check the header row up front so a missing column reports its name
    // instead of surfacing as a per-row deserialization error.
    let headers = reader.headers()?.clone();
    for column in ["title", "description"] {
        if !headers.iter().any(|h| h == column) {
            return Err(CatalogError::MissingColumn {
                column: column.to_string(),
            });
        }
    }

    let mut movies = Vec::new();
    let mut dropped = 0usize;

    for record in reader.deserialize() {
        let record: RawMovieRecord = record?;
        match (record.title, record.description) {
            (Some(title), Some(description))
                if !title.is_empty() && !description.is_empty() =>
            {
                movies.push(Movie { title, description });
            }
            _ => dropped += 1,
        }
    }

    info!(
        "Loaded {} movies from {} ({} incomplete rows dropped)",
        movies.len(),
        path.display(),
        dropped
    );

    Ok(movies)
}
