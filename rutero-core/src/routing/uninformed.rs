//! Uninformed strategies: breadth-first, depth-first and iterative
//! deepening.

use std::collections::VecDeque;

use fixedbitset::FixedBitSet;
use hashbrown::HashMap;

use super::problem::RouteProblem;
use super::{CancelFlag, SearchOutcome, is_cancelled, reconstruct_path};
use crate::NodeId;

pub(super) fn breadth_first(
    problem: &RouteProblem<'_>,
    origin: NodeId,
    cancel: Option<&CancelFlag>,
) -> (SearchOutcome, usize) {
    let mut visited = FixedBitSet::with_capacity(problem.road().node_count());
    let mut predecessors: HashMap<NodeId, NodeId> = HashMap::new();
    let mut frontier = VecDeque::new();
    let mut expanded = 0usize;

    visited.insert(origin.index());
    frontier.push_back(origin);

    while let Some(node) = frontier.pop_front() {
        if is_cancelled(cancel) {
            return (SearchOutcome::Cancelled, expanded);
        }

        if problem.is_goal(node) {
            let path = reconstruct_path(&predecessors, origin, node);
            return (SearchOutcome::Found { path }, expanded);
        }

        expanded += 1;

        for next in problem.successors(node) {
            // `put` reports whether the bit was already set
            if !visited.put(next.index()) {
                predecessors.insert(next, node);
                frontier.push_back(next);
            }
        }
    }

    (SearchOutcome::NotFound, expanded)
}

pub(super) fn depth_first(
    problem: &RouteProblem<'_>,
    origin: NodeId,
    cancel: Option<&CancelFlag>,
) -> (SearchOutcome, usize) {
    let mut visited = FixedBitSet::with_capacity(problem.road().node_count());
    let mut predecessors: HashMap<NodeId, NodeId> = HashMap::new();
    let mut stack: Vec<(NodeId, NodeId)> = vec![(origin, origin)];
    let mut expanded = 0usize;

    while let Some((node, parent)) = stack.pop() {
        if is_cancelled(cancel) {
            return (SearchOutcome::Cancelled, expanded);
        }

        if visited.put(node.index()) {
            continue;
        }
        if node != origin {
            predecessors.insert(node, parent);
        }

        if problem.is_goal(node) {
            let path = reconstruct_path(&predecessors, origin, node);
            return (SearchOutcome::Found { path }, expanded);
        }

        expanded += 1;

        for next in problem.successors(node) {
            if !visited.contains(next.index()) {
                stack.push((next, node));
            }
        }
    }

    (SearchOutcome::NotFound, expanded)
}

enum DepthLimited {
    Found(Vec<NodeId>, usize),
    CutOff(usize),
    Exhausted(usize),
    Cancelled(usize),
}

pub(super) fn iterative_deepening(
    problem: &RouteProblem<'_>,
    origin: NodeId,
    cancel: Option<&CancelFlag>,
) -> (SearchOutcome, usize) {
    let mut expanded_total = 0usize;
    let mut limit = 0usize;

    loop {
        match depth_limited(problem, origin, limit, cancel) {
            DepthLimited::Found(path, expanded) => {
                return (SearchOutcome::Found { path }, expanded_total + expanded);
            }
            DepthLimited::Cancelled(expanded) => {
                return (SearchOutcome::Cancelled, expanded_total + expanded);
            }
            DepthLimited::Exhausted(expanded) => {
                // Every reachable state explored without hitting the limit
                return (SearchOutcome::NotFound, expanded_total + expanded);
            }
            DepthLimited::CutOff(expanded) => {
                expanded_total += expanded;
                limit += 1;
            }
        }
    }
}

/// One depth-bounded restart. Each restart is its own graph search with a
/// fresh visited set.
fn depth_limited(
    problem: &RouteProblem<'_>,
    origin: NodeId,
    limit: usize,
    cancel: Option<&CancelFlag>,
) -> DepthLimited {
    let mut visited = FixedBitSet::with_capacity(problem.road().node_count());
    let mut predecessors: HashMap<NodeId, NodeId> = HashMap::new();
    let mut stack: Vec<(NodeId, NodeId, usize)> = vec![(origin, origin, 0)];
    let mut expanded = 0usize;
    let mut cut_off = false;

    while let Some((node, parent, depth)) = stack.pop() {
        if is_cancelled(cancel) {
            return DepthLimited::Cancelled(expanded);
        }

        if visited.put(node.index()) {
            continue;
        }
        if node != origin {
            predecessors.insert(node, parent);
        }

        if problem.is_goal(node) {
            return DepthLimited::Found(reconstruct_path(&predecessors, origin, node), expanded);
        }

        if depth == limit {
            cut_off = true;
            continue;
        }

        expanded += 1;

        for next in problem.successors(node) {
            if !visited.contains(next.index()) {
                stack.push((next, node, depth + 1));
            }
        }
    }

    if cut_off {
        DepthLimited::CutOff(expanded)
    } else {
        DepthLimited::Exhausted(expanded)
    }
}
