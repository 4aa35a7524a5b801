mod domain;
mod error;
mod store;
mod validation;
mod controller;
mod config;

mod messages;
mod actors;
mod clients;
mod app_system;
mod console;

#[cfg(test)]
mod mock_framework;

use tokio::io::BufReader;
use tracing::{error, info};

use crate::app_system::{setup_tracing, RosterSystem};
use crate::config::RosterConfig;
use crate::console::run_console;

#[tokio::main]
async fn main() -> Result<(), String> {
    let config = RosterConfig::from_env().map_err(|e| e.to_string())?;

    // Setup tracing once for the entire application
    setup_tracing(&config.log_filter);

    info!("Starting employee roster");

    let system = RosterSystem::new(&config);

    let stdin = BufReader::new(tokio::io::stdin());
    let mut stdout = tokio::io::stdout();
    let session = run_console(&system.roster_client, stdin, &mut stdout).await;

    if let Err(e) = &session {
        error!(error = %e, "Console session failed");
    }

    system.shutdown().await?;

    info!("Employee roster closed");
    session.map_err(|e| e.to_string())
}
