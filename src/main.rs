//! Server entry point: loads configuration, seeds the in-memory stores and
//! serves the HTTP API.

use std::process::ExitCode;

use tokio::net::TcpListener;
use tracing::{error, info, warn};
use tracing_subscriber::{EnvFilter, fmt};

use salary_engine::api::{AppState, create_router};
use salary_engine::config::ConfigLoader;

#[tokio::main]
async fn main() -> ExitCode {
    if let Err(e) = fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .try_init()
    {
        eprintln!("tracing init failed: {e}");
    }

    let config = match ConfigLoader::from_env() {
        Ok(config) => config,
        Err(e) => {
            error!(error = %e, "failed to load configuration");
            return ExitCode::FAILURE;
        }
    };
    if config.employees().is_empty() {
        warn!("no employees configured; settlement requests will return 404");
    }

    let bind_address = config.server().bind_address.clone();
    let router = create_router(AppState::in_memory(&config));

    let listener = match TcpListener::bind(&bind_address).await {
        Ok(listener) => listener,
        Err(e) => {
            error!(address = %bind_address, error = %e, "failed to bind");
            return ExitCode::FAILURE;
        }
    };

    info!(
        address = %bind_address,
        employees = config.employees().len(),
        holidays = config.holidays().holidays.len(),
        "salary engine listening"
    );

    if let Err(e) = axum::serve(listener, router).await {
        error!(error = %e, "server error");
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}
