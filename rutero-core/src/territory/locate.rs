//! Point-in-polygon lookup and the two-tier site resolution.

use geo::Point;
use rayon::prelude::*;

use crate::model::{RoadModel, ServiceFilter};
use crate::routing::{
    CostMetric, PathMetrics, SearchReport, SearchRequest, Strategy, path_metrics, run_search,
};
use crate::{Error, SiteId};

/// Ray-casting crossing-number test. Degenerate polygons (fewer than three
/// vertices) never match. The polygon is treated as implicitly closed.
pub(super) fn point_in_polygon(lat: f64, lon: f64, polygon: &[Point<f64>]) -> bool {
    let (x, y) = (lon, lat);
    let n = polygon.len();
    if n < 3 {
        return false;
    }

    let mut inside = false;
    for i in 0..n {
        let j = (i + n - 1) % n;
        let (xi, yi) = polygon[i].x_y();
        let (xj, yj) = polygon[j].x_y();

        let denominator = if yj == yi { 1e-9 } else { yj - yi };
        if (yi > y) != (yj > y) && x < (xj - xi) * (y - yi) / denominator + xi {
            inside = !inside;
        }
    }
    inside
}

/// Which tier produced a site assignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssignmentTier {
    /// The point landed in the site's territory cell.
    Polygon,
    /// No cell matched; shortest-travel-time routing decided.
    Route,
}

#[derive(Debug)]
pub struct SiteAssignment {
    pub site: SiteId,
    pub tier: AssignmentTier,
    pub report: SearchReport,
    pub metrics: PathMetrics,
}

/// Resolves the service site responsible for a geographic point.
///
/// Polygon tier first: the territory cells are a fast approximate
/// pre-filter. When no cell contains the point - or the cell's site turns
/// out to be unreachable by road - every candidate site is routed
/// (A*, time metric) and the minimum travel time wins, ties to the
/// lower-indexed site. `Ok(None)` means no candidate site was reachable.
pub fn assign_site(
    model: &RoadModel,
    lat: f64,
    lon: f64,
    filter: ServiceFilter,
) -> Result<Option<SiteAssignment>, Error> {
    if let Some(site) = model.territory().locate(model.sites(), lat, lon, filter) {
        if let Some((report, metrics)) = route_to_site(model, lat, lon, site)? {
            return Ok(Some(SiteAssignment {
                site,
                tier: AssignmentTier::Polygon,
                report,
                metrics,
            }));
        }
    }

    route_fallback(model, lat, lon, filter)
}

fn route_to_site(
    model: &RoadModel,
    lat: f64,
    lon: f64,
    site: SiteId,
) -> Result<Option<(SearchReport, PathMetrics)>, Error> {
    let (origin, _) = model.nearest_node(lat, lon)?;
    let target = &model.sites()[site];
    let (goal, _) = model.nearest_node(target.geometry.y(), target.geometry.x())?;

    let report = run_search(
        model.road(),
        &SearchRequest {
            origin,
            goal,
            strategy: Strategy::AStar,
            metric: CostMetric::Time,
        },
    )?;

    match report.outcome.path() {
        Some(path) => {
            let metrics = path_metrics(model.road(), path)?;
            Ok(Some((report, metrics)))
        }
        None => Ok(None),
    }
}

fn route_fallback(
    model: &RoadModel,
    lat: f64,
    lon: f64,
    filter: ServiceFilter,
) -> Result<Option<SiteAssignment>, Error> {
    let candidates: Vec<SiteId> = model
        .sites()
        .iter()
        .enumerate()
        .filter(|&(_, site)| filter.matches(site))
        .map(|(site_id, _)| site_id)
        .collect();

    let routed: Vec<Option<(SiteId, SearchReport, PathMetrics)>> = candidates
        .par_iter()
        .map(|&site| {
            Ok(route_to_site(model, lat, lon, site)?
                .map(|(report, metrics)| (site, report, metrics)))
        })
        .collect::<Result<_, Error>>()?;

    let mut best: Option<(SiteId, SearchReport, PathMetrics)> = None;
    for candidate in routed.into_iter().flatten() {
        let better = best
            .as_ref()
            .is_none_or(|current| candidate.2.travel_time_s < current.2.travel_time_s);
        if better {
            best = Some(candidate);
        }
    }

    Ok(best.map(|(site, report, metrics)| SiteAssignment {
        site,
        tier: AssignmentTier::Route,
        report,
        metrics,
    }))
}

#[derive(Debug)]
pub struct RankedSite {
    pub site: SiteId,
    pub metrics: PathMetrics,
}

/// Candidate sites ordered by route distance from the query point,
/// unreachable sites skipped, truncated to `limit`.
pub fn rank_sites_by_route(
    model: &RoadModel,
    lat: f64,
    lon: f64,
    filter: ServiceFilter,
    limit: usize,
) -> Result<Vec<RankedSite>, Error> {
    let candidates: Vec<SiteId> = model
        .sites()
        .iter()
        .enumerate()
        .filter(|&(_, site)| filter.matches(site))
        .map(|(site_id, _)| site_id)
        .collect();

    let mut ranked: Vec<RankedSite> = candidates
        .par_iter()
        .map(|&site| {
            Ok(route_to_site(model, lat, lon, site)?
                .map(|(_, metrics)| RankedSite { site, metrics }))
        })
        .collect::<Result<Vec<Option<RankedSite>>, Error>>()?
        .into_iter()
        .flatten()
        .collect();

    ranked.sort_by(|a, b| a.metrics.distance_m.total_cmp(&b.metrics.distance_m));
    ranked.truncate(limit);
    Ok(ranked)
}
