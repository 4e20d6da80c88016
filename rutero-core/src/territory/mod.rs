//! Service territory partition.
//!
//! Two complementary constructions over the same site set: a discrete
//! nearest-site assignment for every graph node, and finite Voronoi cells
//! for point-in-polygon lookups. The cells are a fast approximate
//! pre-filter; route-based selection ([`assign_site`]) is the authoritative
//! fallback when a point lands in no cell. The two tiers can disagree near
//! cell boundaries and are kept independent.

mod assignment;
mod cells;
mod locate;
mod to_geojson;

use std::time::Instant;

use geo::Point;
use log::info;

pub use locate::{
    AssignmentTier, RankedSite, SiteAssignment, assign_site, rank_sites_by_route,
};

use crate::model::{RoadGraph, ServiceFilter, ServiceSite};
use crate::{NodeId, SiteId};

/// Closed polygon of the plane region nearer to one site than to any other,
/// clipped to a finite bound. Vertices are geographic (x = lon, y = lat) and
/// implicitly closed.
#[derive(Debug, Clone)]
pub struct TerritoryCell {
    pub site: SiteId,
    pub polygon: Vec<Point<f64>>,
}

/// Built once per distinct site set and cached by
/// [`crate::RoadModel::territory`]. Rebuilding from a different site set
/// invalidates everything here.
pub struct Territory {
    /// Owner per node, indexed by the node handle's position.
    owners: Vec<Option<SiteId>>,
    /// Non-degenerate cells, in site order.
    cells: Vec<TerritoryCell>,
}

impl Territory {
    pub fn build(road: &RoadGraph, sites: &[ServiceSite]) -> Self {
        let started = Instant::now();

        let owners = assignment::assign_nodes(road, sites);
        let cells = cells::build_cells(road.projection(), sites);

        info!(
            "Territory partition over {} sites and {} nodes built in {:?}",
            sites.len(),
            road.node_count(),
            started.elapsed()
        );

        Self { owners, cells }
    }

    /// The site owning a graph node under the discrete nearest-site rule.
    /// `None` when the model has no sites.
    pub fn owner_of(&self, node: NodeId) -> Option<SiteId> {
        self.owners.get(node.index()).copied().flatten()
    }

    /// The finite cell polygon of a site, absent when degenerate.
    pub fn polygon_of(&self, site: SiteId) -> Option<&[Point<f64>]> {
        self.cells
            .iter()
            .find(|cell| cell.site == site)
            .map(|cell| cell.polygon.as_slice())
    }

    pub fn cells(&self) -> &[TerritoryCell] {
        &self.cells
    }

    /// Polygon-tier lookup: the first cell (in site order) containing the
    /// point, restricted to sites matching the filter. `None` is an
    /// expected outcome near numerical boundaries and outside the closing
    /// bound; callers fall back to route-based selection.
    pub fn locate(
        &self,
        sites: &[ServiceSite],
        lat: f64,
        lon: f64,
        filter: ServiceFilter,
    ) -> Option<SiteId> {
        self.cells
            .iter()
            .filter(|cell| sites.get(cell.site).is_some_and(|site| filter.matches(site)))
            .find(|cell| locate::point_in_polygon(lat, lon, &cell.polygon))
            .map(|cell| cell.site)
    }
}
