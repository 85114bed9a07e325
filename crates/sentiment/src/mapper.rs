//! Mapping from sentiment-preference labels to polarity axes.
//!
//! This fixed table is the entire domain logic of the recommender: each of
//! the seven preference labels selects one of the analyzer's two signed
//! axes, and the selected scalar is the similarity used for ranking.

use crate::analyzer::PolarityScores;
use catalog::SentimentLabel;
use serde::{Deserialize, Serialize};

/// The polarity axis a preference label maps onto.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PolarityAxis {
    Neg,
    Pos,
}

impl PolarityAxis {
    /// Fixed label-to-axis table:
    /// Anxiety and Fear select the negative axis, everything else the
    /// positive one. Total over the vocabulary, so an in-vocabulary label
    /// can never fail to map; out-of-vocabulary strings are rejected
    /// earlier, when parsing into `SentimentLabel`.
    pub fn for_label(label: SentimentLabel) -> Self {
        match label {
            SentimentLabel::Anxiety | SentimentLabel::Fear => PolarityAxis::Neg,
            SentimentLabel::Excitement
            | SentimentLabel::Thrill
            | SentimentLabel::Attachment
            | SentimentLabel::Motivation
            | SentimentLabel::Love => PolarityAxis::Pos,
        }
    }

    /// Select this axis' scalar from a set of polarity scores.
    pub fn select(self, scores: &PolarityScores) -> f64 {
        match self {
            PolarityAxis::Neg => scores.neg,
            PolarityAxis::Pos => scores.pos,
        }
    }
}

/// Similarity between a scored description and a preference label: the
/// scalar on the axis the label maps onto.
pub fn similarity(label: SentimentLabel, scores: &PolarityScores) -> f64 {
    PolarityAxis::for_label(label).select(scores)
}
