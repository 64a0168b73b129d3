use std::collections::BinaryHeap;

use fixedbitset::FixedBitSet;
use hashbrown::HashMap;
use petgraph::{graph::NodeIndex, visit::EdgeRef};

use super::state::State;
use crate::{Distance, model::NavigationGraph};

/// Nodes finalized by a search, with their distance from the start and the
/// node they were reached from.
#[derive(Debug, Default)]
pub(super) struct SearchTree {
    pub(super) settled: HashMap<NodeIndex, Distance>,
    pub(super) predecessors: HashMap<NodeIndex, NodeIndex>,
}

impl SearchTree {
    /// Follows predecessors back from `target`. The result runs from the
    /// search start to `target` inclusive.
    pub(super) fn trace(&self, target: NodeIndex) -> Vec<NodeIndex> {
        let mut node_path = vec![target];
        let mut current = target;
        while let Some(&prev) = self.predecessors.get(&current) {
            node_path.push(prev);
            current = prev;
        }
        node_path.reverse();
        node_path
    }
}

/// Dijkstra's algorithm over the marker graph.
///
/// Stale queue entries are skipped when popped (lazy deletion) instead of
/// being decreased in place. With a `target` the search stops as soon as the
/// target is finalized.
pub(super) fn search(
    graph: &NavigationGraph,
    start: NodeIndex,
    target: Option<NodeIndex>,
) -> SearchTree {
    let node_count = graph.node_count();
    let mut tree = SearchTree {
        settled: HashMap::with_capacity(node_count),
        predecessors: HashMap::with_capacity(node_count),
    };
    let mut finalized = FixedBitSet::with_capacity(node_count);
    let mut best: HashMap<NodeIndex, Distance> = HashMap::with_capacity(node_count);
    let mut heap = BinaryHeap::with_capacity(node_count);
    let mut seq = 0u64;

    // Start node has distance 0
    heap.push(State {
        cost: 0.0,
        seq,
        node: start,
        parent: None,
    });
    best.insert(start, 0.0);

    while let Some(State {
        cost, node, parent, ..
    }) = heap.pop()
    {
        if finalized.contains(node.index()) {
            continue;
        }
        finalized.insert(node.index());
        tree.settled.insert(node, cost);
        if let Some(parent) = parent {
            tree.predecessors.insert(node, parent);
        }

        if target == Some(node) {
            break;
        }

        for edge in graph.edges(node) {
            let next = edge.target();
            if finalized.contains(next.index()) {
                continue;
            }
            let next_cost = cost + edge.weight().walking_distance();

            // Only queue improvements; parallel walkways lose here
            let improved = match best.entry(next) {
                hashbrown::hash_map::Entry::Vacant(entry) => {
                    entry.insert(next_cost);
                    true
                }
                hashbrown::hash_map::Entry::Occupied(mut entry) => {
                    if next_cost < *entry.get() {
                        *entry.get_mut() = next_cost;
                        true
                    } else {
                        false
                    }
                }
            };

            if improved {
                seq += 1;
                heap.push(State {
                    cost: next_cost,
                    seq,
                    node: next,
                    parent: Some(node),
                });
            }
        }
    }

    tree
}
