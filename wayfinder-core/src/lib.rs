//! Indoor wayfinding over a graph of scannable markers.
//!
//! Markers are joined by walkways with walking distances. The
//! [`NavigationService`] resolves markers to landmark names and finds the
//! shortest walk from a scanned marker to a named landmark.

pub mod error;
pub mod loading;
pub mod model;
pub mod navigation;
pub mod prelude;
pub mod routing;

pub use error::Error;
pub use loading::{GraphSource, create_navigation_graph};
pub use model::NavigationGraph;
pub use navigation::{NavigationError, NavigationRoute, NavigationService};

/// Walking distance along a walkway, in floor plan units
pub type Distance = f64;
