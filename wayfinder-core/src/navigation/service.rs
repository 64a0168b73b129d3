use log::debug;
use serde::Serialize;

use super::error::NavigationError;
use crate::{Distance, model::NavigationGraph, routing::shortest_path};

/// Route to a landmark, with every marker on the way named
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NavigationRoute {
    /// Marker ids from the scanned marker to the destination
    #[serde(rename = "path")]
    pub markers: Vec<String>,
    /// Landmark of each entry in `markers`
    pub landmarks: Vec<String>,
    /// Number of markers on the route
    pub path_length: usize,
    /// Total walking distance
    pub distance: Distance,
}

/// Answers visitor queries against a marker graph it owns.
#[derive(Debug, Clone)]
pub struct NavigationService {
    graph: NavigationGraph,
}

impl NavigationService {
    pub fn new(graph: NavigationGraph) -> Self {
        Self { graph }
    }

    pub fn graph(&self) -> &NavigationGraph {
        &self.graph
    }

    /// Landmark name of a scanned marker.
    ///
    /// # Errors
    ///
    /// `MarkerNotFound` if no marker has this id.
    pub fn resolve_landmark(&self, marker: &str) -> Result<&str, NavigationError> {
        self.graph
            .node(marker)
            .map(|node| node.landmark.as_str())
            .ok_or_else(|| NavigationError::MarkerNotFound(marker.to_string()))
    }

    /// Shortest walk from a scanned marker to the first marker (in insertion
    /// order) whose landmark matches `destination`, ignoring case.
    ///
    /// # Errors
    ///
    /// `LandmarkNotFound` if no landmark matches, `NoRouteFound` if the
    /// destination cannot be reached from `start` (an unknown `start` is
    /// reported the same way).
    pub fn compute_route(
        &self,
        start: &str,
        destination: &str,
    ) -> Result<NavigationRoute, NavigationError> {
        let target = self
            .graph
            .find_node_by_landmark(destination)
            .ok_or_else(|| NavigationError::LandmarkNotFound(destination.to_string()))?;

        let route = shortest_path(&self.graph, start, &target.id).ok_or_else(|| {
            NavigationError::NoRouteFound {
                start: start.to_string(),
                landmark: destination.to_string(),
            }
        })?;

        let landmarks = route
            .markers
            .iter()
            .map(|marker| self.resolve_landmark(marker).map(str::to_string))
            .collect::<Result<Vec<_>, _>>()?;

        debug!(
            "Route {start} -> {} ({destination}): {} markers, distance {}",
            target.id,
            route.len(),
            route.distance
        );

        Ok(NavigationRoute {
            path_length: route.len(),
            distance: route.distance,
            markers: route.markers,
            landmarks,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::loading::{build_graph, demo_graph_data};

    fn demo_service() -> NavigationService {
        NavigationService::new(build_graph(&demo_graph_data()).unwrap())
    }

    #[test]
    fn test_route_to_cafeteria() {
        let route = demo_service()
            .compute_route("entrance", "Cafeteria")
            .unwrap();
        assert_eq!(route.markers, vec!["entrance", "hallway1", "cafeteria"]);
        assert_eq!(
            route.landmarks,
            vec!["Main Entrance", "Hallway Junction", "Cafeteria"]
        );
        assert_eq!(route.path_length, 3);
        assert_eq!(route.distance, 25.0);
    }

    #[test]
    fn test_route_to_elevator() {
        let route = demo_service().compute_route("entrance", "Elevator").unwrap();
        assert_eq!(route.markers, vec!["entrance", "hallway1", "elevator"]);
        assert_eq!(route.path_length, 3);
    }

    #[test]
    fn test_destination_ignores_case() {
        let service = demo_service();
        assert_eq!(
            service.compute_route("entrance", "cafeteria").unwrap(),
            service.compute_route("entrance", "CAFETERIA").unwrap()
        );
    }

    #[test]
    fn test_path_length_counts_markers_not_distance() {
        let route = demo_service()
            .compute_route("cafeteria", "Elevator")
            .unwrap();
        assert_eq!(route.path_length, 3);
        assert_eq!(route.distance, 25.0);
    }

    #[test]
    fn test_route_to_own_landmark() {
        let route = demo_service()
            .compute_route("hallway1", "hallway junction")
            .unwrap();
        assert_eq!(route.markers, vec!["hallway1"]);
        assert_eq!(route.path_length, 1);
        assert_eq!(route.distance, 0.0);
    }

    #[test]
    fn test_resolve_landmark() {
        let service = demo_service();
        assert_eq!(service.resolve_landmark("hallway1"), Ok("Hallway Junction"));
        assert_eq!(
            service.resolve_landmark("unknown_id"),
            Err(NavigationError::MarkerNotFound("unknown_id".into()))
        );
    }

    #[test]
    fn test_unknown_landmark() {
        let err = demo_service()
            .compute_route("entrance", "Nonexistent Place")
            .unwrap_err();
        assert_eq!(
            err,
            NavigationError::LandmarkNotFound("Nonexistent Place".into())
        );
        assert_eq!(err.to_string(), "Landmark Nonexistent Place not found");
    }

    #[test]
    fn test_isolated_landmark_has_no_route() {
        let mut graph = build_graph(&demo_graph_data()).unwrap();
        graph.add_node("storage_room", 30.0, 30.0, "Storage Room");
        let service = NavigationService::new(graph);

        let err = service
            .compute_route("entrance", "Storage Room")
            .unwrap_err();
        assert_eq!(
            err,
            NavigationError::NoRouteFound {
                start: "entrance".into(),
                landmark: "Storage Room".into()
            }
        );
        assert_eq!(
            err.to_string(),
            "No path found from entrance to Storage Room"
        );
    }

    #[test]
    fn test_unknown_start_has_no_route() {
        let err = demo_service()
            .compute_route("roof", "Cafeteria")
            .unwrap_err();
        assert!(matches!(err, NavigationError::NoRouteFound { .. }));
    }

    #[test]
    fn test_duplicate_landmark_uses_first_marker() {
        let mut graph = build_graph(&demo_graph_data()).unwrap();
        graph.add_node("elevator_b", 30.0, 0.0, "Elevator");
        graph.add_edge("entrance", "elevator_b", 1.0).unwrap();
        let service = NavigationService::new(graph);

        let route = service.compute_route("entrance", "elevator").unwrap();
        assert_eq!(route.markers.last().map(String::as_str), Some("elevator"));
    }

    #[test]
    fn test_route_serializes_with_wire_names() {
        let route = demo_service().compute_route("entrance", "Elevator").unwrap();
        let value = serde_json::to_value(&route).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "path": ["entrance", "hallway1", "elevator"],
                "landmarks": ["Main Entrance", "Hallway Junction", "Elevator"],
                "path_length": 3,
                "distance": 20.0
            })
        );
    }
}
