//! Finite Voronoi cells in the projected plane.
//!
//! Each site's cell is the intersection of the perpendicular-bisector
//! half-planes against every other site, clipped to a bounding square so
//! unbounded cells come out closed. The square is centered on the site
//! cloud's centroid and reaches twice the cloud's span, the same closing
//! radius rule the polygon store has always used.

use geo::Coord;

use super::TerritoryCell;
use crate::model::{Projection, ServiceSite};

/// Lower bound on the closing radius, keeps single-site clouds (span zero)
/// from collapsing the square to a point.
const MIN_CLOSING_RADIUS_M: f64 = 10_000.0;

pub(super) fn build_cells(projection: &Projection, sites: &[ServiceSite]) -> Vec<TerritoryCell> {
    if sites.is_empty() {
        return Vec::new();
    }

    let points: Vec<Coord<f64>> = sites.iter().map(|site| site.projected).collect();

    let n = points.len() as f64;
    let centroid = Coord {
        x: points.iter().map(|point| point.x).sum::<f64>() / n,
        y: points.iter().map(|point| point.y).sum::<f64>() / n,
    };
    let span = points
        .iter()
        .map(|point| (point.x - centroid.x).hypot(point.y - centroid.y))
        .fold(0.0f64, f64::max);
    let radius = (2.0 * span).max(MIN_CLOSING_RADIUS_M);

    let square = vec![
        Coord { x: centroid.x - radius, y: centroid.y - radius },
        Coord { x: centroid.x + radius, y: centroid.y - radius },
        Coord { x: centroid.x + radius, y: centroid.y + radius },
        Coord { x: centroid.x - radius, y: centroid.y + radius },
    ];

    let mut cells = Vec::with_capacity(points.len());
    for (site_id, &site_point) in points.iter().enumerate() {
        let mut cell = square.clone();
        for (other_id, &other_point) in points.iter().enumerate() {
            if other_id == site_id || other_point == site_point {
                continue;
            }
            cell = clip_closer_half(&cell, site_point, other_point);
            if cell.len() < 3 {
                break;
            }
        }
        if cell.len() >= 3 {
            cells.push(TerritoryCell {
                site: site_id,
                polygon: cell.iter().map(|&vertex| projection.unproject(vertex)).collect(),
            });
        }
    }

    cells
}

/// Keeps the part of `cell` at least as close to `a` as to `b`
/// (Sutherland-Hodgman against the perpendicular bisector of a-b).
fn clip_closer_half(cell: &[Coord<f64>], a: Coord<f64>, b: Coord<f64>) -> Vec<Coord<f64>> {
    let normal = Coord { x: b.x - a.x, y: b.y - a.y };
    let midpoint = Coord {
        x: (a.x + b.x) / 2.0,
        y: (a.y + b.y) / 2.0,
    };
    let offset = normal.x * midpoint.x + normal.y * midpoint.y;
    let signed = |point: Coord<f64>| normal.x * point.x + normal.y * point.y - offset;

    let mut clipped = Vec::with_capacity(cell.len() + 1);
    for (i, &current) in cell.iter().enumerate() {
        let previous = cell[(i + cell.len() - 1) % cell.len()];
        let current_side = signed(current);
        let previous_side = signed(previous);

        if current_side <= 0.0 {
            if previous_side > 0.0 {
                clipped.push(crossing(previous, current, previous_side, current_side));
            }
            clipped.push(current);
        } else if previous_side <= 0.0 {
            clipped.push(crossing(previous, current, previous_side, current_side));
        }
    }
    clipped
}

/// Point where the segment p-q crosses the bisector. The sides have
/// opposite signs, so the denominator is nonzero.
fn crossing(p: Coord<f64>, q: Coord<f64>, p_side: f64, q_side: f64) -> Coord<f64> {
    let t = p_side / (p_side - q_side);
    Coord {
        x: p.x + t * (q.x - p.x),
        y: p.y + t * (q.y - p.y),
    }
}
