// API route groups

pub mod auth;
