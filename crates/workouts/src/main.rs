use std::io::{self, Write};
use std::process::ExitCode;

use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};
use workouts::{RunConfig, process_batch};

fn init_logging() {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();
}

fn main() -> anyhow::Result<ExitCode> {
    init_logging();

    let config = RunConfig::from_env()?;
    tracing::debug!(?config, "Resolved configuration");

    let packages = config.load_packages()?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    let summary = process_batch(&packages, config.format, &mut out)?;
    out.flush()?;

    Ok(if summary.is_success() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}
