//! # Catalog Crate
//!
//! Domain types and data acquisition for the MoodRecs pipeline.
//!
//! ## Main Components
//!
//! - **types**: Core domain types (Movie, User, the fixed vocabularies)
//! - **loader**: Load the movie catalog from a CSV file
//! - **users**: Fabricate the synthetic five-user set
//! - **error**: Error types for loading and vocabulary parsing
//!
//! ## Example Usage
//!
//! ```ignore
//! use catalog::{generate_users_seeded, load_movies};
//! use std::path::Path;
//!
//! let movies = load_movies(Path::new("dataset_movies.csv"))?;
//! let users = generate_users_seeded(42);
//!
//! println!("{} movies, {} users", movies.len(), users.len());
//! ```

// Public modules
pub mod error;
pub mod loader;
pub mod types;
pub mod users;

// Re-export commonly used types for convenience
pub use error::{CatalogError, Result};
pub use loader::load_movies;
pub use types::{Genre, Movie, SentimentLabel, User};
pub use users::{USER_COUNT, generate_users, generate_users_seeded};
