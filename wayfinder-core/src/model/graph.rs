//! Marker graph storage

use hashbrown::HashMap;
use petgraph::graph::{EdgeReference, NodeIndex, UnGraph};
use petgraph::visit::EdgeRef;

use super::components::{MarkerNode, Neighbor, Walkway};
use crate::{Distance, Error};

/// Undirected graph of scannable markers connected by walkways.
///
/// Nodes keep their insertion order (petgraph node indices are assigned
/// sequentially and never removed), which is the order landmark lookups
/// scan in. Parallel walkways between the same pair of markers are kept.
#[derive(Debug, Clone, Default)]
pub struct NavigationGraph {
    pub(crate) graph: UnGraph<MarkerNode, Walkway>,
    index: HashMap<String, NodeIndex>,
}

impl NavigationGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a marker or overwrites the record of an existing one.
    ///
    /// Overwriting keeps the marker's walkways and its place in
    /// insertion order.
    pub fn add_node(&mut self, id: &str, x: f64, y: f64, landmark: &str) {
        let node = MarkerNode::new(id, x, y, landmark);
        match self.index.get(id) {
            Some(&idx) => self.graph[idx] = node,
            None => {
                let idx = self.graph.add_node(node);
                self.index.insert(id.to_string(), idx);
            }
        }
    }

    /// Connects two existing markers with a walkway usable in both directions.
    ///
    /// # Errors
    ///
    /// Returns an error if the distance is negative or not finite, or if
    /// either marker has not been added yet.
    pub fn add_edge(&mut self, from: &str, to: &str, distance: Distance) -> Result<(), Error> {
        if !distance.is_finite() || distance < 0.0 {
            return Err(Error::InvalidDistance {
                from: from.to_string(),
                to: to.to_string(),
                distance,
            });
        }

        let a = self.require(from)?;
        let b = self.require(to)?;
        self.graph.add_edge(a, b, Walkway { distance });
        Ok(())
    }

    /// Walkways leaving `id`, in the order they were added.
    ///
    /// Unknown markers and markers without walkways both yield an empty list.
    pub fn neighbors(&self, id: &str) -> Vec<Neighbor> {
        let Some(idx) = self.node_index(id) else {
            return Vec::new();
        };

        let mut edges: Vec<EdgeReference<'_, Walkway>> = self.edges(idx).collect();
        edges.sort_unstable_by_key(|edge| edge.id());

        edges
            .into_iter()
            .map(|edge| Neighbor {
                to: self.graph[edge.target()].id.clone(),
                distance: edge.weight().distance,
            })
            .collect()
    }

    pub fn node(&self, id: &str) -> Option<&MarkerNode> {
        self.node_index(id).map(|idx| &self.graph[idx])
    }

    pub fn contains(&self, id: &str) -> bool {
        self.index.contains_key(id)
    }

    /// First marker (in insertion order) whose landmark matches `name`,
    /// ignoring case.
    pub fn find_node_by_landmark(&self, name: &str) -> Option<&MarkerNode> {
        self.nodes().find(|node| node.has_landmark(name))
    }

    /// All markers in insertion order
    pub fn nodes(&self) -> impl Iterator<Item = &MarkerNode> {
        self.graph.node_weights()
    }

    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    pub(crate) fn node_index(&self, id: &str) -> Option<NodeIndex> {
        self.index.get(id).copied()
    }

    pub(crate) fn edges(&self, node: NodeIndex) -> impl Iterator<Item = EdgeReference<'_, Walkway>> {
        self.graph.edges(node)
    }

    fn require(&self, id: &str) -> Result<NodeIndex, Error> {
        self.node_index(id)
            .ok_or_else(|| Error::UnknownMarker(id.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn corridor() -> NavigationGraph {
        let mut graph = NavigationGraph::new();
        graph.add_node("a", 0.0, 0.0, "Lobby");
        graph.add_node("b", 10.0, 0.0, "Corridor");
        graph.add_node("c", 20.0, 0.0, "Library");
        graph
    }

    #[test]
    fn test_add_edge_is_undirected() {
        let mut graph = corridor();
        graph.add_edge("a", "b", 10.0).unwrap();

        assert_eq!(
            graph.neighbors("a"),
            vec![Neighbor {
                to: "b".into(),
                distance: 10.0
            }]
        );
        assert_eq!(
            graph.neighbors("b"),
            vec![Neighbor {
                to: "a".into(),
                distance: 10.0
            }]
        );
    }

    #[test]
    fn test_neighbors_of_isolated_or_unknown_marker_are_empty() {
        let graph = corridor();
        assert!(graph.neighbors("c").is_empty());
        assert!(graph.neighbors("nowhere").is_empty());
    }

    #[test]
    fn test_parallel_edges_are_kept_in_insertion_order() {
        let mut graph = corridor();
        graph.add_edge("a", "b", 10.0).unwrap();
        graph.add_edge("a", "c", 4.0).unwrap();
        graph.add_edge("b", "a", 7.0).unwrap();

        let distances: Vec<_> = graph
            .neighbors("a")
            .into_iter()
            .map(|n| (n.to, n.distance))
            .collect();
        assert_eq!(
            distances,
            vec![("b".into(), 10.0), ("c".into(), 4.0), ("b".into(), 7.0)]
        );
        assert_eq!(graph.edge_count(), 3);
    }

    #[test]
    fn test_add_edge_rejects_bad_distance() {
        let mut graph = corridor();
        assert!(matches!(
            graph.add_edge("a", "b", -1.0),
            Err(Error::InvalidDistance { .. })
        ));
        assert!(matches!(
            graph.add_edge("a", "b", f64::NAN),
            Err(Error::InvalidDistance { .. })
        ));
        assert!(graph.add_edge("a", "b", 0.0).is_ok());
    }

    #[test]
    fn test_add_edge_requires_known_markers() {
        let mut graph = corridor();
        match graph.add_edge("a", "ghost", 3.0) {
            Err(Error::UnknownMarker(id)) => assert_eq!(id, "ghost"),
            other => panic!("unexpected result: {other:?}"),
        }
        assert_eq!(graph.edge_count(), 0);
    }

    #[test]
    fn test_add_node_overwrites_in_place() {
        let mut graph = corridor();
        graph.add_edge("a", "b", 10.0).unwrap();
        graph.add_node("a", 1.0, 2.0, "Front Desk");

        let node = graph.node("a").unwrap();
        assert_eq!(node.landmark, "Front Desk");
        assert_eq!((node.x(), node.y()), (1.0, 2.0));
        assert_eq!(graph.node_count(), 3);
        assert_eq!(graph.neighbors("a").len(), 1);
        assert_eq!(graph.nodes().next().map(|n| n.id.as_str()), Some("a"));
    }

    #[test]
    fn test_find_node_by_landmark_ignores_case() {
        let graph = corridor();
        assert_eq!(graph.find_node_by_landmark("library").unwrap().id, "c");
        assert_eq!(graph.find_node_by_landmark("LIBRARY").unwrap().id, "c");
        assert!(graph.find_node_by_landmark("Libr").is_none());
    }

    #[test]
    fn test_find_node_by_landmark_prefers_first_inserted() {
        let mut graph = corridor();
        graph.add_node("d", 30.0, 0.0, "Restroom");
        graph.add_node("e", 40.0, 0.0, "restroom");
        assert_eq!(graph.find_node_by_landmark("Restroom").unwrap().id, "d");
    }
}
