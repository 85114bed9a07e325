//! Batch orchestration across the whole synthetic user set.
//!
//! Every user's ranking is computed against the same scored catalog; rows
//! are tagged with the user's id and the per-user results concatenated in
//! user order.

use crate::ranking::{Recommendation, Recommender};
use anyhow::{Context, Result};
use catalog::User;
use sentiment::ScoredMovie;
use serde::{Deserialize, Serialize};
use tracing::info;

/// One row of the combined recommendation set.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecommendationRow {
    pub title: String,
    pub description: String,
    pub similarity: f64,
    pub user_id: String,
}

impl RecommendationRow {
    fn tagged(rec: Recommendation, user_id: &str) -> Self {
        Self {
            title: rec.title,
            description: rec.description,
            similarity: rec.similarity,
            user_id: user_id.to_string(),
        }
    }
}

/// Runs the recommender for every user and concatenates the results.
pub struct BatchRecommender {
    recommender: Recommender,
}

impl BatchRecommender {
    pub fn new(recommender: Recommender) -> Self {
        Self { recommender }
    }

    /// Compute recommendations for all users against the scored catalog.
    ///
    /// Rows come back grouped by user, in user order, each tagged with the
    /// user's id. With the fixed five-user set and a catalog of at least
    /// ten movies the combined set has fifty rows.
    pub fn run(
        &self,
        users: &[User],
        movies: &[ScoredMovie],
    ) -> Result<Vec<RecommendationRow>> {
        let mut combined = Vec::new();

        for user in users {
            let recommendations = self
                .recommender
                .recommend(&user.user_id, users, movies)
                .with_context(|| format!("Failed to rank movies for {}", user.user_id))?;
            info!(
                "Ranked {} movies for {} (preference: {})",
                recommendations.len(),
                user.user_id,
                user.preferred_sentiment
            );

            combined.extend(
                recommendations
                    .into_iter()
                    .map(|rec| RecommendationRow::tagged(rec, &user.user_id)),
            );
        }

        info!("Combined recommendation set: {} rows", combined.len());
        Ok(combined)
    }
}
