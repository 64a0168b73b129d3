//! Visitor-facing queries: landmark lookup and routing to a landmark

mod error;
mod service;

pub use error::NavigationError;
pub use service::{NavigationRoute, NavigationService};
