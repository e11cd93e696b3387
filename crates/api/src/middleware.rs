/// Bearer-token identity resolution
pub mod auth;
/// Mapping of booking errors to HTTP responses
pub mod error_handling;
