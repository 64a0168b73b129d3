//! Data model for indoor wayfinding
//!
//! Contains the marker graph and the records it is built from.

pub mod components;
pub mod graph;

pub use components::{MarkerNode, Neighbor, Walkway};
pub use graph::NavigationGraph;
