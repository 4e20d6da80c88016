//! Physical totals along a found path.

use itertools::Itertools;
use log::error;

use crate::model::RoadGraph;
use crate::{Error, NodeId};

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PathMetrics {
    pub distance_m: f64,
    pub travel_time_s: f64,
}

/// Sums canonical-edge length and travel time over consecutive node pairs.
/// Paths with fewer than two nodes total to zero.
///
/// # Errors
///
/// Returns [`Error::InconsistentEdge`] when a consecutive pair has no
/// connecting edge. That means the search successor relation and the edge
/// lookup disagree - a defect in graph construction, never a normal runtime
/// condition - so it is surfaced loudly instead of skipping the segment.
pub fn path_metrics(road: &RoadGraph, path: &[NodeId]) -> Result<PathMetrics, Error> {
    if path.len() < 2 {
        return Ok(PathMetrics::default());
    }

    let mut totals = PathMetrics::default();
    for (&from, &to) in path.iter().tuple_windows() {
        let Some(edge) = road.canonical_edge(from, to) else {
            error!("path references a missing edge {from:?} -> {to:?}");
            return Err(Error::InconsistentEdge { from, to });
        };
        totals.distance_m += edge.length;
        totals.travel_time_s += edge.travel_time_or_estimate();
    }

    Ok(totals)
}
