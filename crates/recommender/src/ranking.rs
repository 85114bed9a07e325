//! Per-user ranking of scored movies.

use anyhow::{Result, anyhow};
use catalog::User;
use sentiment::{ScoredMovie, similarity};
use serde::{Deserialize, Serialize};

/// A ranked movie for a single user.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Recommendation {
    pub title: String,
    pub description: String,
    pub similarity: f64,
}

/// Ranks movies for one user by the polarity axis their preferred sentiment
/// maps onto.
pub struct Recommender {
    top_n: usize,
}

impl Recommender {
    /// Default number of recommendations per user
    pub const DEFAULT_TOP_N: usize = 10;

    pub fn new(top_n: usize) -> Self {
        Self { top_n }
    }

    /// Rank all movies for the user with the given id.
    ///
    /// Looks up the first user row matching `user_id`; an unknown id is an
    /// error. Similarity is the scalar the user's preferred sentiment
    /// selects from each movie's polarity scores.
    ///
    /// # Returns
    /// min(top_n, movie count) rows sorted by similarity descending; equal
    /// similarities keep catalog order (the sort is stable).
    pub fn recommend(
        &self,
        user_id: &str,
        users: &[User],
        movies: &[ScoredMovie],
    ) -> Result<Vec<Recommendation>> {
        let user = users
            .iter()
            .find(|u| u.user_id == user_id)
            .ok_or_else(|| anyhow!("User {} not found", user_id))?;

        let mut ranked: Vec<Recommendation> = movies
            .iter()
            .map(|movie| Recommendation {
                title: movie.title.clone(),
                description: movie.description.clone(),
                similarity: similarity(user.preferred_sentiment, &movie.scores()),
            })
            .collect();

        // Sort by similarity DESC
        ranked.sort_by(|a, b| {
            b.similarity
                .partial_cmp(&a.similarity)
                .unwrap_or(std::cmp::Ordering::Equal)
        });
        ranked.truncate(self.top_n);

        Ok(ranked)
    }
}

impl Default for Recommender {
    fn default() -> Self {
        Self::new(Self::DEFAULT_TOP_N)
    }
}
