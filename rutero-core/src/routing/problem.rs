//! Search-problem view of the road graph.
//!
//! States are node handles, the actions from a state are exactly its
//! successor nodes, and applying an action moves to that neighbor. Step
//! costs and the heuristic both read the canonical edge, under the metric
//! chosen for the whole search.

use std::str::FromStr;

use geo::Coord;

use crate::model::RoadGraph;
use crate::{Error, FALLBACK_SPEED_MPS, NodeId};

/// What a step between adjacent nodes costs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CostMetric {
    /// Canonical edge length, meters.
    Distance,
    /// Canonical edge travel time in seconds, estimated from the length at
    /// ~50 km/h when the edge carries none.
    Time,
}

impl CostMetric {
    pub fn as_str(self) -> &'static str {
        match self {
            CostMetric::Distance => "distance",
            CostMetric::Time => "time",
        }
    }
}

impl FromStr for CostMetric {
    type Err = Error;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw {
            "distance" => Ok(CostMetric::Distance),
            "time" => Ok(CostMetric::Time),
            other => Err(Error::UnknownCostMetric(other.to_string())),
        }
    }
}

pub struct RouteProblem<'a> {
    road: &'a RoadGraph,
    goal: NodeId,
    metric: CostMetric,
    goal_projected: Coord<f64>,
}

impl<'a> RouteProblem<'a> {
    /// # Errors
    ///
    /// Returns [`Error::InvalidNodeIndex`] when the goal is not part of the
    /// graph.
    pub fn new(road: &'a RoadGraph, goal: NodeId, metric: CostMetric) -> Result<Self, Error> {
        let goal_projected = road
            .node(goal)
            .ok_or(Error::InvalidNodeIndex)?
            .projected;
        Ok(Self {
            road,
            goal,
            metric,
            goal_projected,
        })
    }

    pub fn road(&self) -> &RoadGraph {
        self.road
    }

    pub fn is_goal(&self, state: NodeId) -> bool {
        state == self.goal
    }

    pub fn successors(&self, state: NodeId) -> impl Iterator<Item = NodeId> + '_ {
        self.road.successors(state)
    }

    /// Cost of moving between adjacent states, read from the canonical edge.
    pub fn step_cost(&self, from: NodeId, to: NodeId) -> f64 {
        let Some(edge) = self.road.canonical_edge(from, to) else {
            // Unreachable through `successors`: both read the same adjacency
            return f64::INFINITY;
        };
        match self.metric {
            CostMetric::Distance => edge.length,
            CostMetric::Time => edge.travel_time_or_estimate(),
        }
    }

    /// Straight-line estimate of the remaining cost to the goal, in the
    /// projected plane. Admissible: road distance is never shorter than the
    /// straight line, and the time variant divides by the same speed constant
    /// as the step-cost fallback.
    pub fn heuristic(&self, state: NodeId) -> f64 {
        let Some(node) = self.road.node(state) else {
            return 0.0;
        };
        let dx = node.projected.x - self.goal_projected.x;
        let dy = node.projected.y - self.goal_projected.y;
        let straight_line = dx.hypot(dy);
        match self.metric {
            CostMetric::Distance => straight_line,
            CostMetric::Time => straight_line / FALLBACK_SPEED_MPS,
        }
    }
}
