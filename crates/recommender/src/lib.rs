//! # Recommender Crate
//!
//! Ranking and batch orchestration for the MoodRecs pipeline.
//!
//! ## Components
//!
//! - **ranking**: `Recommender`, per-user top-N ranking of scored movies
//! - **batch**: `BatchRecommender`, the sequential run over the whole
//!   synthetic user set producing the combined recommendation rows
//!
//! ## Example Usage
//!
//! ```ignore
//! use recommender::{BatchRecommender, Recommender};
//!
//! let batch = BatchRecommender::new(Recommender::new(10));
//! let combined = batch.run(&users, &scored_movies)?;
//! ```

// Public modules
pub mod batch;
pub mod ranking;

// Re-export main types
pub use batch::{BatchRecommender, RecommendationRow};
pub use ranking::{Recommendation, Recommender};
