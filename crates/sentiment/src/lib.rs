//! # Sentiment Crate
//!
//! Wrapper around the external VADER polarity analyzer, plus the fixed
//! preference-to-axis mapping that turns polarity scores into similarity
//! values.
//!
//! ## Components
//!
//! - **analyzer**: `SentimentEngine`, the black-box analyzer behind a typed
//!   API; `PolarityScores`; bulk catalog scoring into `ScoredMovie` rows
//! - **mapper**: `PolarityAxis` and the seven-label mapping table
//! - **error**: Error types for analyzer contract violations
//!
//! ## Example Usage
//!
//! ```ignore
//! use sentiment::{SentimentEngine, similarity};
//! use catalog::SentimentLabel;
//!
//! let engine = SentimentEngine::new();
//! let scores = engine.score("I love this heartwarming story")?;
//! let value = similarity(SentimentLabel::Love, &scores);
//! ```

// Public modules
pub mod analyzer;
pub mod error;
pub mod mapper;

// Re-export commonly used types
pub use analyzer::{PolarityScores, ScoredMovie, SentimentEngine};
pub use error::{Result, SentimentError};
pub use mapper::{PolarityAxis, similarity};
