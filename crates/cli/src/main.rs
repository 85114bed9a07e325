use anyhow::{Context, Result};
use catalog::load_movies;
use clap::Parser;
use colored::Colorize;
use recommender::{BatchRecommender, RecommendationRow, Recommender};
use sentiment::SentimentEngine;
use std::path::PathBuf;
use std::time::Instant;
use tracing::info;

mod output;

/// MoodRecs - Sentiment-preference movie recommender
#[derive(Parser)]
#[command(name = "mood-recs")]
#[command(
    about = "Ranks movies per synthetic user by sentiment preference",
    long_about = None
)]
struct Cli {
    /// Path to the movie catalog CSV (title + description columns)
    #[arg(short, long, default_value = "dataset_movies.csv")]
    input: PathBuf,

    /// Directory the three output CSV files are written to
    #[arg(short, long, default_value = ".")]
    out_dir: PathBuf,

    /// Number of recommendations per user
    #[arg(long, default_value = "10")]
    limit: usize,

    /// RNG seed for the synthetic user generator (random if omitted)
    #[arg(long)]
    seed: Option<u64>,
}

fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    // Load the movie catalog
    println!("Loading movie catalog from {}...", cli.input.display());
    let start = Instant::now();
    let movies = load_movies(&cli.input).context("Failed to load movie catalog")?;
    println!(
        "{} Loaded {} movies in {:?}",
        "✓".green(),
        movies.len(),
        start.elapsed()
    );

    // Fabricate the synthetic user set
    let seed = cli.seed.unwrap_or_else(rand::random);
    let users = catalog::generate_users_seeded(seed);
    println!(
        "{} Generated {} users (seed: {})",
        "✓".green(),
        users.len(),
        seed
    );

    // Score every description once
    let start = Instant::now();
    let engine = SentimentEngine::new();
    let scored = engine
        .score_catalog(&movies)
        .context("Failed to score movie descriptions")?;
    println!(
        "{} Scored {} descriptions in {:?}",
        "✓".green(),
        scored.len(),
        start.elapsed()
    );

    // Rank per user and concatenate
    let batch = BatchRecommender::new(Recommender::new(cli.limit));
    let combined = batch
        .run(&users, &scored)
        .context("Failed to compute recommendations")?;

    print_recommendations(&combined);

    // Write the three output files
    output::write_outputs(&cli.out_dir, &combined, &scored, &users)
        .context("Failed to write output files")?;
    println!(
        "{} Wrote {}, {} and {} to {}",
        "✓".green(),
        output::RECOMMENDATIONS_FILE,
        output::MOVIES_FILE,
        output::USERS_FILE,
        cli.out_dir.display()
    );
    info!("Run complete (seed {})", seed);

    Ok(())
}

/// Print the combined recommendation table, grouped by user.
fn print_recommendations(rows: &[RecommendationRow]) {
    print!("{}", "Combined recommendations:\n".bold().blue());

    let mut current_user: Option<&str> = None;
    for row in rows {
        if current_user != Some(row.user_id.as_str()) {
            println!("{}", row.user_id.bold());
            current_user = Some(row.user_id.as_str());
        }
        println!("  {} {:.4}  {}", "•".green(), row.similarity, row.title);
    }
}
