mod app;
mod config;
mod error;
mod handlers;
mod labels;
mod lead;
mod models;
mod phone;
mod relay;
mod sanitize;
mod state;

use lead_common::{bind_listener, env_or, init_tracing, shutdown_signal};

use crate::config::{ConfigError, RelayConfig};
use crate::relay::TelegramRelay;
use crate::state::AppState;

#[derive(Debug, thiserror::Error)]
enum StartupError {
    #[error("invalid configuration: {0}")]
    Config(#[from] ConfigError),
    #[error("bind listener: {0}")]
    Bind(std::io::Error),
    #[error("serve: {0}")]
    Serve(std::io::Error),
}

#[tokio::main]
async fn main() {
    let guards = init_tracing("lead-service");

    if let Err(err) = run().await {
        tracing::error!(error = %err, "lead service stopped");
        drop(guards);
        std::process::exit(1);
    }
}

async fn run() -> Result<(), StartupError> {
    let port = env_or("PORT", 8080u16);
    let config = RelayConfig::from_env()?;
    tracing::info!(
        api_base = %config.api_base,
        timeout_secs = config.timeout.as_secs(),
        "relay configured"
    );

    let relay = TelegramRelay::new(&config)?;
    let app = app::build_router(AppState::new(relay));
    let listener = bind_listener(port).await.map_err(StartupError::Bind)?;
    tracing::info!(port, "lead service listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(StartupError::Serve)
}
