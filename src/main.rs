// Start of file: src/main.rs

use axum::{Router, serve};
use tokio::net::TcpListener;

use mock_auth_server::config::state::AppState;
use mock_auth_server::core::{logging, server};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    logging::init_tracing();

    let state: AppState = AppState::from_env()?;
    tracing::info!("Starting in '{}' environment", state.environment.environment);

    let listener: TcpListener = server::setup_listener(&state.environment).await?;
    let app: Router = server::create_app(state);

    tracing::info!("Server listening on: {}", listener.local_addr()?);

    serve(listener, app)
        .with_graceful_shutdown(server::shutdown_signal())
        .await?;

    Ok(())
}

// End of file: src/main.rs
