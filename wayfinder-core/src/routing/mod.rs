//! Route search over the marker graph

pub mod dijkstra;

pub use dijkstra::{Route, shortest_distances, shortest_path};
