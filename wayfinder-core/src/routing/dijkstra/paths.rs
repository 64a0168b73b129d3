use hashbrown::HashMap;
use log::trace;

use super::search::search;
use crate::{Distance, model::NavigationGraph};

/// Cheapest walk between two markers
#[derive(Debug, Clone, PartialEq)]
pub struct Route {
    /// Marker ids from start to target inclusive
    pub markers: Vec<String>,
    /// Sum of walkway distances along `markers`
    pub distance: Distance,
}

impl Route {
    /// Number of markers on the route (not the walking distance)
    pub fn len(&self) -> usize {
        self.markers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.markers.is_empty()
    }
}

/// Shortest route between two markers.
///
/// Returns `None` when the target cannot be reached, including when either
/// marker is not in the graph. Landmarks are not resolved here; both ends
/// are marker ids.
pub fn shortest_path(graph: &NavigationGraph, start: &str, target: &str) -> Option<Route> {
    let (Some(start_idx), Some(target_idx)) = (graph.node_index(start), graph.node_index(target))
    else {
        trace!("Route {start} -> {target} skipped: marker not in graph");
        return None;
    };

    let tree = search(graph, start_idx, Some(target_idx));
    let Some(&distance) = tree.settled.get(&target_idx) else {
        trace!(
            "No route {start} -> {target} after settling {} markers",
            tree.settled.len()
        );
        return None;
    };

    let markers = tree
        .trace(target_idx)
        .into_iter()
        .map(|idx| graph.graph[idx].id.clone())
        .collect();

    Some(Route { markers, distance })
}

/// Walking distance from `start` to every marker reachable from it.
///
/// An unknown start yields an empty map.
pub fn shortest_distances(graph: &NavigationGraph, start: &str) -> HashMap<String, Distance> {
    let Some(start_idx) = graph.node_index(start) else {
        return HashMap::new();
    };

    search(graph, start_idx, None)
        .settled
        .into_iter()
        .map(|(idx, distance)| (graph.graph[idx].id.clone(), distance))
        .collect()
}
