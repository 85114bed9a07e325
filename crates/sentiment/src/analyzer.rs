//! Wrapper around the external VADER polarity analyzer.
//!
//! The analyzer is a black box that maps a piece of text to four polarity
//! fields. Its lexicon ships with the crate and is parsed when the engine
//! is constructed, so construction should happen once per process and the
//! engine be reused for every description.

use crate::error::{Result, SentimentError};
use catalog::Movie;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};
use vader_sentiment::SentimentIntensityAnalyzer;

/// The four polarity fields the analyzer reports for a piece of text.
///
/// Invariants guaranteed by the analyzer (not recomputed here): `neg`,
/// `neu`, `pos` are proportions in [0, 1] summing to ~1.0 for non-empty
/// text; `compound` is in [-1, 1].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PolarityScores {
    pub neg: f64,
    pub neu: f64,
    pub pos: f64,
    pub compound: f64,
}

/// A catalog row after scoring. Flat rather than nested so it serializes
/// straight to a CSV row.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoredMovie {
    pub title: String,
    pub description: String,
    pub neg: f64,
    pub neu: f64,
    pub pos: f64,
    pub compound: f64,
}

impl ScoredMovie {
    pub fn new(movie: Movie, scores: PolarityScores) -> Self {
        Self {
            title: movie.title,
            description: movie.description,
            neg: scores.neg,
            neu: scores.neu,
            pos: scores.pos,
            compound: scores.compound,
        }
    }

    /// The polarity fields of this row, for axis selection.
    pub fn scores(&self) -> PolarityScores {
        PolarityScores {
            neg: self.neg,
            neu: self.neu,
            pos: self.pos,
            compound: self.compound,
        }
    }
}

/// Engine wrapping the lexicon-based analyzer.
pub struct SentimentEngine {
    analyzer: SentimentIntensityAnalyzer<'static>,
}

impl SentimentEngine {
    /// Build the engine, parsing the bundled lexicon.
    pub fn new() -> Self {
        debug!("Initializing VADER sentiment analyzer");
        Self {
            analyzer: SentimentIntensityAnalyzer::new(),
        }
    }

    /// Score a single piece of text.
    ///
    /// # Returns
    /// * `Ok(PolarityScores)` - The four polarity fields
    /// * `Err` - If the analyzer output lacked one of its fields
    pub fn score(&self, text: &str) -> Result<PolarityScores> {
        let raw = self.analyzer.polarity_scores(text);
        let field = |name: &'static str| {
            raw.get(name)
                .copied()
                .ok_or(SentimentError::MissingField { field: name })
        };

        Ok(PolarityScores {
            neg: field("neg")?,
            neu: field("neu")?,
            pos: field("pos")?,
            compound: field("compound")?,
        })
    }

    /// Score every description in the catalog, preserving row order.
    pub fn score_catalog(&self, movies: &[Movie]) -> Result<Vec<ScoredMovie>> {
        let scored: Vec<ScoredMovie> = movies
            .iter()
            .map(|movie| {
                let scores = self.score(&movie.description)?;
                Ok(ScoredMovie::new(movie.clone(), scores))
            })
            .collect::<Result<_>>()?;

        info!("Scored {} movie descriptions", scored.len());
        Ok(scored)
    }
}

impl Default for SentimentEngine {
    fn default() -> Self {
        Self::new()
    }
}
