//! Priority-queue strategies: uniform-cost (Dijkstra) and A*.

use std::collections::BinaryHeap;

use hashbrown::HashMap;

use super::problem::RouteProblem;
use super::state::QueueState;
use super::{CancelFlag, SearchOutcome, is_cancelled, reconstruct_path};
use crate::NodeId;

pub(super) fn uniform_cost(
    problem: &RouteProblem<'_>,
    origin: NodeId,
    cancel: Option<&CancelFlag>,
) -> (SearchOutcome, usize) {
    best_first(problem, origin, false, cancel)
}

pub(super) fn a_star(
    problem: &RouteProblem<'_>,
    origin: NodeId,
    cancel: Option<&CancelFlag>,
) -> (SearchOutcome, usize) {
    best_first(problem, origin, true, cancel)
}

/// Shared best-first core. The heap orders by g (uninformed) or g + h
/// (informed); stale entries are skipped on pop instead of being removed.
fn best_first(
    problem: &RouteProblem<'_>,
    origin: NodeId,
    informed: bool,
    cancel: Option<&CancelFlag>,
) -> (SearchOutcome, usize) {
    let estimated = problem.road().node_count().min(1000);
    let mut costs: HashMap<NodeId, f64> = HashMap::with_capacity(estimated);
    let mut predecessors: HashMap<NodeId, NodeId> = HashMap::with_capacity(estimated);
    let mut heap = BinaryHeap::with_capacity(estimated / 4);
    let mut expanded = 0usize;

    let origin_priority = if informed { problem.heuristic(origin) } else { 0.0 };
    costs.insert(origin, 0.0);
    heap.push(QueueState {
        priority: origin_priority,
        cost: 0.0,
        node: origin,
    });

    while let Some(QueueState { cost, node, .. }) = heap.pop() {
        if is_cancelled(cancel) {
            return (SearchOutcome::Cancelled, expanded);
        }

        // Skip entries superseded by a cheaper path
        if let Some(&best) = costs.get(&node) {
            if cost > best {
                continue;
            }
        }

        // Goal test on pop keeps the result optimal
        if problem.is_goal(node) {
            let path = reconstruct_path(&predecessors, origin, node);
            return (SearchOutcome::Found { path }, expanded);
        }

        expanded += 1;

        for next in problem.successors(node) {
            let next_cost = cost + problem.step_cost(node, next);
            let next_priority = if informed {
                next_cost + problem.heuristic(next)
            } else {
                next_cost
            };

            match costs.entry(next) {
                hashbrown::hash_map::Entry::Vacant(entry) => {
                    entry.insert(next_cost);
                    predecessors.insert(next, node);
                    heap.push(QueueState {
                        priority: next_priority,
                        cost: next_cost,
                        node: next,
                    });
                }
                hashbrown::hash_map::Entry::Occupied(mut entry) => {
                    if next_cost < *entry.get() {
                        *entry.get_mut() = next_cost;
                        predecessors.insert(next, node);
                        heap.push(QueueState {
                            priority: next_priority,
                            cost: next_cost,
                            node: next,
                        });
                    }
                }
            }
        }
    }

    (SearchOutcome::NotFound, expanded)
}
