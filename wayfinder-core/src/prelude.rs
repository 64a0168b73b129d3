// Re-export key components
pub use crate::loading::{GraphData, GraphSource, build_graph, create_navigation_graph};
pub use crate::model::{MarkerNode, NavigationGraph, Neighbor};
pub use crate::navigation::{NavigationError, NavigationRoute, NavigationService};
pub use crate::routing::{Route, shortest_path};

pub use crate::Distance;
pub use crate::Error;
