/// HTTP client trait and implementation for the ActionKit REST API
pub mod http_client;

pub use http_client::*;
