//! Graph search over the road network.
//!
//! One problem abstraction ([`problem::RouteProblem`]: states are node
//! handles, actions are successor nodes, step costs come from the canonical
//! edge) explored under five frontier disciplines selected by [`Strategy`].
//! All strategies run in graph-search mode: a state is expanded at most once
//! per run, so every search terminates on the finite graph.

mod best_first;
mod state;
mod uninformed;

pub mod batch;
pub mod metrics;
pub mod problem;

use std::str::FromStr;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::{Duration, Instant};

use hashbrown::HashMap;

pub use batch::{BatchSummary, PairEvaluation, evaluate_batch};
pub use metrics::{PathMetrics, path_metrics};
pub use problem::{CostMetric, RouteProblem};

use crate::model::RoadGraph;
use crate::{Error, NodeId};

/// Frontier discipline for the search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strategy {
    BreadthFirst,
    DepthFirst,
    UniformCost,
    IterativeDeepening,
    AStar,
}

impl Strategy {
    pub fn as_str(self) -> &'static str {
        match self {
            Strategy::BreadthFirst => "breadth_first",
            Strategy::DepthFirst => "depth_first",
            Strategy::UniformCost => "uniform_cost",
            Strategy::IterativeDeepening => "iterative_deepening",
            Strategy::AStar => "a_star",
        }
    }
}

impl FromStr for Strategy {
    type Err = Error;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw {
            "breadth_first" | "bfs" => Ok(Strategy::BreadthFirst),
            "depth_first" | "dfs" => Ok(Strategy::DepthFirst),
            "uniform_cost" | "ucs" => Ok(Strategy::UniformCost),
            "iterative_deepening" | "iddfs" => Ok(Strategy::IterativeDeepening),
            "a_star" | "astar" => Ok(Strategy::AStar),
            other => Err(Error::UnknownStrategy(other.to_string())),
        }
    }
}

/// One search, fully specified.
#[derive(Debug, Clone, Copy)]
pub struct SearchRequest {
    pub origin: NodeId,
    pub goal: NodeId,
    pub strategy: Strategy,
    pub metric: CostMetric,
}

/// What the search produced. `NotFound` is a legitimate outcome (the goal is
/// unreachable), not a fault; callers branch on it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchOutcome {
    Found { path: Vec<NodeId> },
    NotFound,
    Cancelled,
}

impl SearchOutcome {
    pub fn path(&self) -> Option<&[NodeId]> {
        match self {
            SearchOutcome::Found { path } => Some(path),
            _ => None,
        }
    }

    pub fn is_found(&self) -> bool {
        matches!(self, SearchOutcome::Found { .. })
    }
}

#[derive(Debug, Clone)]
pub struct SearchReport {
    pub outcome: SearchOutcome,
    /// Number of states expanded (popped from the frontier and had their
    /// successors generated).
    pub expanded: usize,
    pub elapsed: Duration,
}

/// Cooperative cancellation handle, checked once per expansion.
#[derive(Debug, Clone, Default)]
pub struct CancelFlag(Arc<AtomicBool>);

impl CancelFlag {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.0.store(true, Ordering::Relaxed);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }
}

/// Runs one search to completion.
///
/// # Errors
///
/// Returns [`Error::InvalidNodeIndex`] when origin or goal is not part of
/// the graph. An unreachable goal is *not* an error; see
/// [`SearchOutcome::NotFound`].
pub fn run_search(road: &RoadGraph, request: &SearchRequest) -> Result<SearchReport, Error> {
    dispatch(road, request, None)
}

/// Like [`run_search`], but aborts with [`SearchOutcome::Cancelled`] soon
/// after the flag is raised. Best effort: the flag is polled once per
/// expansion step.
pub fn run_search_cancellable(
    road: &RoadGraph,
    request: &SearchRequest,
    cancel: &CancelFlag,
) -> Result<SearchReport, Error> {
    dispatch(road, request, Some(cancel))
}

fn dispatch(
    road: &RoadGraph,
    request: &SearchRequest,
    cancel: Option<&CancelFlag>,
) -> Result<SearchReport, Error> {
    if !road.contains(request.origin) {
        return Err(Error::InvalidNodeIndex);
    }

    let started = Instant::now();

    if request.origin == request.goal {
        return Ok(SearchReport {
            outcome: SearchOutcome::Found {
                path: vec![request.origin],
            },
            expanded: 0,
            elapsed: started.elapsed(),
        });
    }

    let problem = RouteProblem::new(road, request.goal, request.metric)?;

    let (outcome, expanded) = match request.strategy {
        Strategy::BreadthFirst => uninformed::breadth_first(&problem, request.origin, cancel),
        Strategy::DepthFirst => uninformed::depth_first(&problem, request.origin, cancel),
        Strategy::IterativeDeepening => {
            uninformed::iterative_deepening(&problem, request.origin, cancel)
        }
        Strategy::UniformCost => best_first::uniform_cost(&problem, request.origin, cancel),
        Strategy::AStar => best_first::a_star(&problem, request.origin, cancel),
    };

    Ok(SearchReport {
        outcome,
        expanded,
        elapsed: started.elapsed(),
    })
}

/// Walks the predecessor map backward from the goal.
fn reconstruct_path(
    predecessors: &HashMap<NodeId, NodeId>,
    origin: NodeId,
    goal: NodeId,
) -> Vec<NodeId> {
    let mut path = vec![goal];
    let mut current = goal;
    while current != origin {
        match predecessors.get(&current) {
            Some(&previous) => {
                path.push(previous);
                current = previous;
            }
            None => break,
        }
    }
    path.reverse();
    path
}

fn is_cancelled(cancel: Option<&CancelFlag>) -> bool {
    cancel.is_some_and(CancelFlag::is_cancelled)
}
