// Start of file: /src/utils/mod.rs

/*
    * Error mapping for middleware layers, the 404 fallback,
    * and the JSON envelope they share.
*/

pub mod error_handler;
pub mod fallback_handler;
pub mod response_handler;

// End of file: /src/utils/mod.rs
