//! FixFast Client - HTTP client for the FixFast backend
//!
//! Provides network-based HTTP calls to the `/api/productos` and
//! `/api/pedidos` REST endpoints.

pub mod config;
pub mod error;
pub mod http;

pub use config::ClientConfig;
pub use error::{ClientError, ClientResult};
pub use http::HttpClient;
