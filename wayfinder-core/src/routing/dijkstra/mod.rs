mod paths;
mod search;
mod state;

pub use paths::{Route, shortest_distances, shortest_path};
