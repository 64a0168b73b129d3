//! HTTP server for indoor wayfinding: marker lookup and routing to
//! landmarks on top of `wayfinder_core`.

pub mod api;
pub mod cli;
pub mod config;
pub mod error;

pub use api::build_router;
pub use config::ServerConfig;
pub use error::ServerError;
