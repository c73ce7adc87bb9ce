use std::fs::File;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use std::time::Duration;

use anyhow::Result;
use clap::Parser;
use tracing::info;

use pomotui::config::{ConfigError, SessionConfig, TimerSettings};
use pomotui::tui::runner::run_tui;

#[derive(Parser)]
#[command(name = "pomotui", about = "Pomodoro dashboard for the terminal.")]
struct Cli {
    /// Milliseconds between progress ticks
    #[arg(long, default_value_t = 1000)]
    tick_ms: u64,

    /// Fraction of the bar filled per tick, in (0, 1]
    #[arg(long, default_value_t = 0.25)]
    step: f64,

    /// Write logs here (the terminal belongs to the dashboard)
    #[arg(long)]
    log_file: Option<PathBuf>,
}

fn init_logging(path: &Path) -> Result<()> {
    let file = File::create(path).map_err(|source| ConfigError::LogFile {
        path: path.to_path_buf(),
        source,
    })?;
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("pomotui=info".parse()?),
        )
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    if let Some(path) = &cli.log_file {
        init_logging(path)?;
    }

    let config = SessionConfig {
        tick_interval: Duration::from_millis(cli.tick_ms),
        step: cli.step,
        ..SessionConfig::default()
    };
    config.validate()?;

    info!(ticks = config.ticks_to_complete(), "pomotui starting");

    run_tui(TimerSettings::default(), config).await
}
