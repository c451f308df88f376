pub mod handler;
pub mod routes;

pub use handler::AuthResponse;
pub use routes::auth_routes;
