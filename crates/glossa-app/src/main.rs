use std::sync::Arc;

use clap::Parser;
use tokio::signal;
use tracing_subscriber::EnvFilter;

pub mod cli;
pub mod console;
pub mod controller;
pub mod events;
pub mod profile;
pub mod state;

#[cfg(test)]
mod tests;

use self::cli::Cli;
use self::controller::AppController;
use self::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let config = profile::load_config()?;
    profile::init_data_dir(&config)?;

    let command = cli.command.into_event(&config.default_level);
    let state = Arc::new(AppState::new(config)?);

    // Shutdown future (Ctrl+C)
    let shutdown = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!("failed to listen for ctrl+c: {e}");
            std::future::pending::<()>().await;
        }
    };

    AppController::new(state).run(command, shutdown).await
}
