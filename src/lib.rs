// Library root for the mock auth server

pub mod api;
pub mod config;
pub mod core;
pub mod utils;

pub use crate::api::auth::AuthResponse;
pub use crate::config::environment::EnvironmentVariables;
pub use crate::config::state::AppState;
pub use crate::core::server::create_app;
