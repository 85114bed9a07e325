//! Core domain types for the recommendation pipeline.

use crate::error::CatalogError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// =============================================================================
// Movie
// =============================================================================

/// A catalog entry: a title plus the free-text description that gets scored.
///
/// Polarity fields live on `ScoredMovie` in the sentiment crate; a `Movie`
/// is a row before scoring has happened.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Movie {
    pub title: String,
    pub description: String,
}

// =============================================================================
// User and vocabularies
// =============================================================================

/// A synthetic user profile.
///
/// `preferred_genre` is generated and written to the users file but never
/// consumed by the recommender; ranking is driven entirely by
/// `preferred_sentiment`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub user_id: String,
    pub name: String,
    pub age: u8,
    pub preferred_genre: Genre,
    pub preferred_sentiment: SentimentLabel,
}

/// The fixed five-genre vocabulary assigned to synthetic users
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Genre {
    Action,
    Comedy,
    Drama,
    Horror,
    Romance,
}

impl Genre {
    /// Vocabulary in declaration order; the user generator shuffles a copy.
    pub const ALL: [Genre; 5] = [
        Genre::Action,
        Genre::Comedy,
        Genre::Drama,
        Genre::Horror,
        Genre::Romance,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Genre::Action => "Action",
            Genre::Comedy => "Comedy",
            Genre::Drama => "Drama",
            Genre::Horror => "Horror",
            Genre::Romance => "Romance",
        }
    }
}

impl FromStr for Genre {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Action" => Ok(Genre::Action),
            "Comedy" => Ok(Genre::Comedy),
            "Drama" => Ok(Genre::Drama),
            "Horror" => Ok(Genre::Horror),
            "Romance" => Ok(Genre::Romance),
            _ => Err(CatalogError::InvalidValue {
                field: "preferred_genre".to_string(),
                value: s.to_string(),
            }),
        }
    }
}

impl fmt::Display for Genre {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The fixed seven-label sentiment-preference vocabulary.
///
/// Each label maps onto exactly one polarity axis of the analyzer output;
/// the mapping table lives in the sentiment crate. A string outside this
/// vocabulary fails to parse rather than silently defaulting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SentimentLabel {
    Anxiety,
    Fear,
    Excitement,
    Thrill,
    Attachment,
    Motivation,
    Love,
}

impl SentimentLabel {
    /// Vocabulary in declaration order; the user generator shuffles a copy
    /// and uses only the first five entries.
    pub const ALL: [SentimentLabel; 7] = [
        SentimentLabel::Anxiety,
        SentimentLabel::Fear,
        SentimentLabel::Excitement,
        SentimentLabel::Thrill,
        SentimentLabel::Attachment,
        SentimentLabel::Motivation,
        SentimentLabel::Love,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SentimentLabel::Anxiety => "Anxiety",
            SentimentLabel::Fear => "Fear",
            SentimentLabel::Excitement => "Excitement",
            SentimentLabel::Thrill => "Thrill",
            SentimentLabel::Attachment => "Attachment",
            SentimentLabel::Motivation => "Motivation",
            SentimentLabel::Love => "Love",
        }
    }
}

impl FromStr for SentimentLabel {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Anxiety" => Ok(SentimentLabel::Anxiety),
            "Fear" => Ok(SentimentLabel::Fear),
            "Excitement" => Ok(SentimentLabel::Excitement),
            "Thrill" => Ok(SentimentLabel::Thrill),
            "Attachment" => Ok(SentimentLabel::Attachment),
            "Motivation" => Ok(SentimentLabel::Motivation),
            "Love" => Ok(SentimentLabel::Love),
            _ => Err(CatalogError::InvalidValue {
                field: "preferred_sentiment".to_string(),
                value: s.to_string(),
            }),
        }
    }
}

impl fmt::Display for SentimentLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
