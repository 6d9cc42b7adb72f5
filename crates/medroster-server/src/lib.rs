//! Medroster REST server.
//!
//! A thin axum layer over [`medroster_core`]: six routes, JSON in and
//! out, `{"message": ...}` bodies on every failure. Exposed as a
//! library so integration tests can drive the router directly.

pub mod config;
pub mod error;
pub mod routes;

pub use config::ServerConfig;
pub use routes::app;
