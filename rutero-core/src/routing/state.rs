use std::cmp::Ordering;

use crate::NodeId;

/// Frontier entry for the best-first strategies. `priority` orders the heap
/// (g for uniform-cost, g + h for A*); `cost` keeps the accumulated g.
#[derive(Copy, Clone)]
pub(super) struct QueueState {
    pub(super) priority: f64,
    pub(super) cost: f64,
    pub(super) node: NodeId,
}

// Min-heap by priority (reversed from the standard max-heap), with the node
// index as a deterministic tie-break.
impl Ord for QueueState {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .priority
            .total_cmp(&self.priority)
            .then_with(|| other.node.index().cmp(&self.node.index()))
    }
}

impl PartialOrd for QueueState {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for QueueState {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for QueueState {}

#[cfg(test)]
mod tests {
    use std::collections::BinaryHeap;

    use super::*;

    #[test]
    fn pops_cheapest_first() {
        let mut heap = BinaryHeap::new();
        for (priority, index) in [(5.0, 1), (1.5, 2), (3.0, 3)] {
            heap.push(QueueState {
                priority,
                cost: priority,
                node: NodeId::new(index),
            });
        }

        let order: Vec<usize> = std::iter::from_fn(|| heap.pop())
            .map(|state| state.node.index())
            .collect();
        assert_eq!(order, vec![2, 3, 1]);
    }
}
