//! tests/common/mod.rs
//! A shared test helper to spawn the app on an ephemeral port.

use std::collections::HashMap;

use axum::{Router, serve};
use mock_auth_server::config::{environment::EnvironmentVariables, state::AppState};
use mock_auth_server::core::server::create_app;
use tokio::net::TcpListener as TokioTcpListener;

/// Body limit used by the test app, small enough to exceed cheaply.
#[allow(dead_code)]
pub const TEST_BODY_LIMIT: usize = 1024;

/// Spawns the app on a random unused port and returns its base URL.
pub fn spawn_app() -> String {
    let vars: HashMap<String, String> = HashMap::from([
        ("ENVIRONMENT".to_string(), "test".to_string()),
        ("MAX_REQUEST_BODY_SIZE".to_string(), TEST_BODY_LIMIT.to_string()),
    ]);
    let env: EnvironmentVariables =
        EnvironmentVariables::from_map(&vars).expect("Failed to build test configuration");

    // * Build the application exactly as main() does.
    let app: Router = create_app(AppState::new(env));

    // * Bind an ephemeral port using std::net::TcpListener.
    let std_listener: std::net::TcpListener = std::net::TcpListener::bind("127.0.0.1:0")
        .expect("Failed to bind random port");
    std_listener.set_nonblocking(true).unwrap();

    // * Convert std::net::TcpListener to tokio::net::TcpListener.
    let tokio_listener: TokioTcpListener = TokioTcpListener::from_std(std_listener)
        .expect("Failed to convert to tokio listener");

    let addr: std::net::SocketAddr = tokio_listener.local_addr().unwrap();

    // * Spawn the server in a background task.
    tokio::spawn(async move {
        serve(tokio_listener, app)
            .await
            .expect("Server failed");
    });

    format!("http://{}", addr)
}
