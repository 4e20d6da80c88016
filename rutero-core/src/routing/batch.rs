//! Parallel evaluation of one strategy over many origin/goal pairs.

use std::time::Duration;

use rayon::prelude::*;

use super::metrics::{PathMetrics, path_metrics};
use super::{SearchReport, SearchRequest, run_search};
use crate::model::RoadGraph;
use crate::{Error, NodeId};

#[derive(Debug)]
pub struct PairEvaluation {
    pub origin: NodeId,
    pub goal: NodeId,
    pub report: SearchReport,
    /// Physical totals of the found path; `None` when the goal was
    /// unreachable.
    pub metrics: Option<PathMetrics>,
}

/// Aggregates over the evaluated pairs. The means cover found pairs only.
#[derive(Debug, Default)]
pub struct BatchSummary {
    pub count: usize,
    pub found: usize,
    pub mean_distance_m: Option<f64>,
    pub mean_travel_time_s: Option<f64>,
    pub mean_elapsed: Option<Duration>,
}

/// Runs every request concurrently (requests are independent; the graph is
/// shared read-only) and summarizes the outcomes.
pub fn evaluate_batch(
    road: &RoadGraph,
    requests: &[SearchRequest],
) -> Result<(Vec<PairEvaluation>, BatchSummary), Error> {
    let evaluations: Vec<PairEvaluation> = requests
        .par_iter()
        .map(|request| {
            let report = run_search(road, request)?;
            let metrics = match report.outcome.path() {
                Some(path) => Some(path_metrics(road, path)?),
                None => None,
            };
            Ok(PairEvaluation {
                origin: request.origin,
                goal: request.goal,
                report,
                metrics,
            })
        })
        .collect::<Result<_, Error>>()?;

    let summary = summarize(&evaluations);
    Ok((evaluations, summary))
}

fn summarize(evaluations: &[PairEvaluation]) -> BatchSummary {
    let found: Vec<&PairEvaluation> = evaluations
        .iter()
        .filter(|evaluation| evaluation.metrics.is_some())
        .collect();

    if found.is_empty() {
        return BatchSummary {
            count: evaluations.len(),
            ..BatchSummary::default()
        };
    }

    let n = found.len() as f64;
    let (mut distance, mut travel_time, mut elapsed) = (0.0, 0.0, Duration::ZERO);
    for evaluation in &found {
        if let Some(metrics) = evaluation.metrics {
            distance += metrics.distance_m;
            travel_time += metrics.travel_time_s;
        }
        elapsed += evaluation.report.elapsed;
    }

    BatchSummary {
        count: evaluations.len(),
        found: found.len(),
        mean_distance_m: Some(distance / n),
        mean_travel_time_s: Some(travel_time / n),
        mean_elapsed: Some(elapsed / found.len() as u32),
    }
}
