//! Generates a batch of sensor packages as JSON.
//!
//! Run with:
//! ```
//! SEED_COUNT=50 SEED=12345 cargo run -p test-data --bin seed > batch.json
//! WORKOUTS_INPUT=batch.json cargo run -p workouts
//! ```

use std::io::{self, Write};

use test_data::prelude::*;
use tracing_subscriber::EnvFilter;

fn parse_var<T: std::str::FromStr>(key: &str) -> anyhow::Result<Option<T>>
where
    T::Err: std::fmt::Display,
{
    match std::env::var(key) {
        Ok(raw) => raw
            .trim()
            .parse()
            .map(Some)
            .map_err(|e| anyhow::anyhow!("{key}: {e}")),
        Err(_) => Ok(None),
    }
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(io::stderr)
        .init();

    let defaults = GeneratorConfig::default();
    let config = GeneratorConfig {
        session_count: parse_var("SEED_COUNT")?.unwrap_or(defaults.session_count),
        seed: parse_var("SEED")?,
        ..defaults
    };

    let packages = PackageGenerator::new(config.clone()).generate()?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    serde_json::to_writer_pretty(&mut out, &packages)?;
    writeln!(out)?;

    tracing::info!("Seed completed!");
    tracing::info!("  Sessions: {}", packages.len());
    if let Some(seed) = config.seed {
        tracing::info!("  Seed: {}", seed);
    }

    Ok(())
}
