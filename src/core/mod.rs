// Process plumbing: logging, router assembly, listener and shutdown

pub mod logging;
pub mod server;
