//! CSV output files.
//!
//! All three files are overwritten unconditionally on each run; no index
//! column, headers come straight from the serialized field names.

use anyhow::{Context, Result};
use catalog::User;
use recommender::RecommendationRow;
use sentiment::ScoredMovie;
use serde::Serialize;
use std::fs;
use std::path::Path;

/// Combined per-user recommendation rows
pub const RECOMMENDATIONS_FILE: &str = "all_recommendations.csv";
/// The full catalog with polarity columns attached
pub const MOVIES_FILE: &str = "movies_dataset.csv";
/// The synthetic user set
pub const USERS_FILE: &str = "users_dataset.csv";

/// Write the three output files into `out_dir`, creating it if needed.
pub fn write_outputs(
    out_dir: &Path,
    recommendations: &[RecommendationRow],
    movies: &[ScoredMovie],
    users: &[User],
) -> Result<()> {
    fs::create_dir_all(out_dir)
        .with_context(|| format!("Failed to create output directory {}", out_dir.display()))?;

    write_csv(&out_dir.join(RECOMMENDATIONS_FILE), recommendations)?;
    write_csv(&out_dir.join(MOVIES_FILE), movies)?;
    write_csv(&out_dir.join(USERS_FILE), users)?;

    Ok(())
}

fn write_csv<T: Serialize>(path: &Path, rows: &[T]) -> Result<()> {
    let mut writer = csv::Writer::from_path(path)
        .with_context(|| format!("Failed to open {} for writing", path.display()))?;

    for row in rows {
        writer.serialize(row)?;
    }
    writer.flush()?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use catalog::{Genre, SentimentLabel};

    fn sample_rows() -> Vec<RecommendationRow> {
        vec![
            RecommendationRow {
                title: "Glowing".to_string(),
                description: "A joyful tale".to_string(),
                similarity: 0.9,
                user_id: "user_1".to_string(),
            },
            RecommendationRow {
                title: "Mild".to_string(),
                description: "A quiet week".to_string(),
                similarity: 0.2,
                user_id: "user_1".to_string(),
            },
            RecommendationRow {
                title: "Grim".to_string(),
                description: "A dark descent".to_string(),
                similarity: 0.7,
                user_id: "user_2".to_string(),
            },
        ]
    }

    fn read_rows(path: &Path) -> Vec<RecommendationRow> {
        let mut reader = csv::Reader::from_path(path).expect("Failed to read output file");
        reader
            .deserialize()
            .map(|r| r.expect("Failed to parse written row"))
            .collect()
    }

    #[test]
    fn test_written_recommendations_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let rows = sample_rows();

        write_csv(&dir.path().join(RECOMMENDATIONS_FILE), &rows).unwrap();
        let read_back = read_rows(&dir.path().join(RECOMMENDATIONS_FILE));

        assert_eq!(read_back.len(), rows.len());
        for (written, read) in rows.iter().zip(&read_back) {
            assert_eq!(written.title, read.title);
            assert_eq!(written.user_id, read.user_id);
            assert_eq!(written.similarity, read.similarity);
        }
    }

    #[test]
    fn test_reselecting_top_n_from_written_file_reproduces_rows() {
        // The ranking step is idempotent given fixed scores: sorting the
        // written rows per user by similarity descending gives back the
        // order they were written in.
        let dir = tempfile::tempdir().unwrap();
        let rows = sample_rows();

        write_csv(&dir.path().join(RECOMMENDATIONS_FILE), &rows).unwrap();
        let mut read_back = read_rows(&dir.path().join(RECOMMENDATIONS_FILE));

        read_back.sort_by(|a, b| {
            a.user_id.cmp(&b.user_id).then(
                b.similarity
                    .partial_cmp(&a.similarity)
                    .unwrap_or(std::cmp::Ordering::Equal),
            )
        });

        let titles: Vec<_> = read_back.iter().map(|r| r.title.as_str()).collect();
        assert_eq!(titles, ["Glowing", "Mild", "Grim"]);
    }

    #[test]
    fn test_outputs_are_overwritten() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(RECOMMENDATIONS_FILE);

        write_csv(&path, &sample_rows()).unwrap();
        write_csv(&path, &sample_rows()[..1]).unwrap();

        let read_back = read_rows(&path);
        assert_eq!(read_back.len(), 1, "Second run should replace the file");
    }

    #[test]
    fn test_write_outputs_creates_all_three_files() {
        let dir = tempfile::tempdir().unwrap();

        let movies = vec![ScoredMovie {
            title: "Glowing".to_string(),
            description: "A joyful tale".to_string(),
            neg: 0.0,
            neu: 0.4,
            pos: 0.6,
            compound: 0.8,
        }];
        let users = vec![User {
            user_id: "user_1".to_string(),
            name: "User_1".to_string(),
            age: 33,
            preferred_genre: Genre::Comedy,
            preferred_sentiment: SentimentLabel::Excitement,
        }];

        write_outputs(dir.path(), &sample_rows(), &movies, &users).unwrap();

        for file in [RECOMMENDATIONS_FILE, MOVIES_FILE, USERS_FILE] {
            assert!(dir.path().join(file).exists(), "{} should exist", file);
        }

        // Users file carries the enum labels as plain variant names
        let contents = fs::read_to_string(dir.path().join(USERS_FILE)).unwrap();
        assert!(contents.starts_with("user_id,name,age,preferred_genre,preferred_sentiment"));
        assert!(contents.contains("user_1,User_1,33,Comedy,Excitement"));
    }
}
