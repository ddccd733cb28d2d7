//! Time-travel tic-tac-toe - command-line entry point.

use anyhow::{Context, Result};
use clap::Parser;
use timetravel_tictactoe::{Cli, Command, GameConfig, init_stderr_logging, replay, tui};
use tracing::info;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => GameConfig::from_file(path)
            .with_context(|| format!("Failed to load config from {}", path.display()))?,
        None => GameConfig::default(),
    };
    if let Some(log_file) = cli.log_file {
        config = config.with_log_file(log_file);
    }

    match cli.command.unwrap_or(Command::Play) {
        Command::Play => tui::run_tui(&config),
        Command::Replay { clicks } => {
            init_stderr_logging(config.log_filter());
            info!(clicks = clicks.len(), "Replaying");
            let stdout = std::io::stdout();
            replay(&clicks, &mut stdout.lock())?;
            Ok(())
        }
    }
}
