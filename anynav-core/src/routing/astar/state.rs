use std::cmp::Ordering;

use petgraph::graph::NodeIndex;

use crate::Cost;

#[derive(Copy, Clone, Debug)]
pub(super) struct State {
    /// Cost so far plus the heuristic estimate to the goal
    pub(super) estimate: Cost,
    pub(super) cost: Cost,
    pub(super) node: NodeIndex,
}

// Implement Ord for State to use in BinaryHeap
impl Ord for State {
    fn cmp(&self, other: &Self) -> Ordering {
        // Min-heap by estimate (reversed from standard Rust BinaryHeap),
        // ties go to the state that already travelled further
        other
            .estimate
            .total_cmp(&self.estimate)
            .then_with(|| self.cost.total_cmp(&other.cost))
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

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BinaryHeap;

    fn state(estimate: Cost, cost: Cost) -> State {
        State {
            estimate,
            cost,
            node: NodeIndex::new(0),
        }
    }

    #[test]
    fn heap_pops_lowest_estimate_first() {
        let mut heap = BinaryHeap::from([state(3.0, 0.0), state(1.0, 0.0), state(2.0, 0.0)]);
        assert_eq!(heap.pop().map(|s| s.estimate), Some(1.0));
        assert_eq!(heap.pop().map(|s| s.estimate), Some(2.0));
    }

    #[test]
    fn ties_prefer_larger_cost() {
        let mut heap = BinaryHeap::from([state(5.0, 1.0), state(5.0, 4.0)]);
        assert_eq!(heap.pop().map(|s| s.cost), Some(4.0));
    }
}
