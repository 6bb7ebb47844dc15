/// Module containing service interfaces and traits
pub mod interfaces;
/// Module containing shared data types used by services
pub mod models;
/// Module containing service implementations over the HTTP transport
pub mod services;
