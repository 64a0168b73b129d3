use std::cmp::Ordering;

use petgraph::graph::NodeIndex;

use crate::Distance;

/// Frontier entry of the search queue.
///
/// `seq` is the push counter; it breaks distance ties so that the heap has a
/// total order and equal-cost entries pop in the order they were pushed.
#[derive(Copy, Clone, Debug)]
pub(super) struct State {
    pub(super) cost: Distance,
    pub(super) seq: u64,
    pub(super) node: NodeIndex,
    pub(super) parent: Option<NodeIndex>,
}

// Implement Ord for State to use in BinaryHeap
impl Ord for State {
    fn cmp(&self, other: &Self) -> Ordering {
        // Min-heap by cost (reversed from standard Rust BinaryHeap)
        other
            .cost
            .total_cmp(&self.cost)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

impl PartialOrd for State {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for State {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for State {}
