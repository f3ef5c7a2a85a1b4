use std::sync::Arc;

use anyhow::{Context, Result};
use scrabble_engine::{
    config::Config, protocol, Dictionary, GameSession, LetterDistribution,
};
use tokio::io::BufReader;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Words listed at startup as a sanity check of the loaded dictionary.
const SAMPLE_WORDS: usize = 10;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing; stdout carries the protocol, so logs go to stderr
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "scrabble_engine=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    tracing::info!("Starting scrabble engine...");

    // Load configuration
    let config = Config::from_env()?;
    tracing::info!("Configuration loaded");

    // Load dictionary; no game without one
    let dictionary = Dictionary::load(config.dictionary_path())
        .await
        .with_context(|| format!("Cannot start without a dictionary ({})", config.dictionary_path()))?;
    tracing::info!(
        "Dictionary ready, first words: {}",
        dictionary.sample(SAMPLE_WORDS).join(", ")
    );

    let dictionary = Arc::new(dictionary);
    let distribution = Arc::new(LetterDistribution::romanian());
    let session = match config.game.seed {
        Some(seed) => {
            tracing::info!("Using fixed bag seed {}", seed);
            GameSession::with_seed(dictionary, distribution, seed)
        }
        None => GameSession::new(dictionary, distribution),
    };

    tracing::info!("Reading moves from stdin");
    protocol::run(
        session,
        BufReader::new(tokio::io::stdin()),
        tokio::io::stdout(),
    )
    .await?;

    tracing::info!("Session closed");
    Ok(())
}
