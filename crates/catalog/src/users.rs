//! Synthetic user generation.
//!
//! The generator fabricates exactly five profiles per run. Uniqueness of the
//! genre and sentiment assignments comes from shuffling each fixed
//! vocabulary once and assigning by position, so the guarantee holds only
//! while the user count stays at or below both vocabulary sizes.

use crate::types::{Genre, SentimentLabel, User};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

/// Number of synthetic users fabricated per run
pub const USER_COUNT: usize = 5;

/// Generate the synthetic user set from the given RNG.
///
/// Ids and names are "user_1".."user_5" and "User_1".."User_5". Ages are
/// drawn independently and uniformly from [18, 65] (collisions allowed).
/// Genres and preferred sentiments are assigned by position in two
/// independently shuffled vocabularies, so no two users share either; only
/// the first five of the seven shuffled sentiment labels are used.
pub fn generate_users(rng: &mut impl Rng) -> Vec<User> {
    let mut genres = Genre::ALL.to_vec();
    let mut sentiments = SentimentLabel::ALL.to_vec();
    genres.shuffle(rng);
    sentiments.shuffle(rng);

    (0..USER_COUNT)
        .map(|i| User {
            user_id: format!("user_{}", i + 1),
            name: format!("User_{}", i + 1),
            age: rng.random_range(18..=65),
            preferred_genre: genres[i],
            preferred_sentiment: sentiments[i],
        })
        .collect()
}

/// Deterministic variant for reproducible runs and tests.
pub fn generate_users_seeded(seed: u64) -> Vec<User> {
    let mut rng = StdRng::seed_from_u64(seed);
    generate_users(&mut rng)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_generates_exactly_five_users() {
        let users = generate_users_seeded(42);

        assert_eq!(users.len(), USER_COUNT);
        for (i, user) in users.iter().enumerate() {
            assert_eq!(user.user_id, format!("user_{}", i + 1));
            assert_eq!(user.name, format!("User_{}", i + 1));
        }
    }

    #[test]
    fn test_ages_within_range() {
        for seed in 0..20 {
            for user in generate_users_seeded(seed) {
                assert!(
                    (18..=65).contains(&user.age),
                    "Age {} out of range for seed {}",
                    user.age,
                    seed
                );
            }
        }
    }

    #[test]
    fn test_genres_and_sentiments_pairwise_distinct() {
        for seed in 0..20 {
            let users = generate_users_seeded(seed);

            let genres: HashSet<_> = users.iter().map(|u| u.preferred_genre).collect();
            let sentiments: HashSet<_> =
                users.iter().map(|u| u.preferred_sentiment).collect();

            assert_eq!(
                genres.len(),
                USER_COUNT,
                "Genres must not repeat (seed {})",
                seed
            );
            assert_eq!(
                sentiments.len(),
                USER_COUNT,
                "Sentiments must not repeat (seed {})",
                seed
            );
        }
    }

    #[test]
    fn test_assignments_come_from_the_fixed_vocabularies() {
        let users = generate_users_seeded(7);

        for user in &users {
            assert!(Genre::ALL.contains(&user.preferred_genre));
            assert!(SentimentLabel::ALL.contains(&user.preferred_sentiment));
        }
    }

    #[test]
    fn test_same_seed_same_users() {
        let a = generate_users_seeded(7);
        let b = generate_users_seeded(7);

        for (x, y) in a.iter().zip(&b) {
            assert_eq!(x.user_id, y.user_id);
            assert_eq!(x.age, y.age);
            assert_eq!(x.preferred_genre, y.preferred_genre);
            assert_eq!(x.preferred_sentiment, y.preferred_sentiment);
        }
    }
}
