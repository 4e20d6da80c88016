//! Long-lived application context.
//!
//! Owns the graph, the service sites and the lazily built query structures.
//! Everything is immutable after construction, so concurrent queries share
//! the context by reference without locking; the lazy builds go through
//! [`OnceLock`] to keep the single-build guarantee off the hot path.

use std::sync::OnceLock;
use std::time::Duration;

use log::info;

use crate::model::{RoadGraph, ServiceSite};
use crate::spatial::{self, NearestMethod, SpatialIndex};
use crate::territory::Territory;
use crate::{Error, NodeId};

pub struct RoadModel {
    road: RoadGraph,
    sites: Vec<ServiceSite>,
    index: OnceLock<SpatialIndex>,
    territory: OnceLock<Territory>,
}

impl RoadModel {
    /// Assembles the context from the materialized graph and site list.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyIndex`] for a graph with no nodes; every
    /// nearest-node query would fail, so the model is rejected up front.
    pub fn new(road: RoadGraph, mut sites: Vec<ServiceSite>) -> Result<Self, Error> {
        if road.node_count() == 0 {
            return Err(Error::EmptyIndex);
        }

        for site in &mut sites {
            site.projected = road.projection().project(site.geometry);
        }

        info!(
            "Road model ready: {} nodes, {} edges, {} service sites",
            road.node_count(),
            road.edge_count(),
            sites.len()
        );

        Ok(Self {
            road,
            sites,
            index: OnceLock::new(),
            territory: OnceLock::new(),
        })
    }

    pub fn road(&self) -> &RoadGraph {
        &self.road
    }

    pub fn sites(&self) -> &[ServiceSite] {
        &self.sites
    }

    /// The k-d tree index, built on first use. Later calls are no-ops and
    /// observe the same build duration.
    pub fn spatial_index(&self) -> &SpatialIndex {
        self.index.get_or_init(|| SpatialIndex::build(&self.road))
    }

    /// The territory partition for the attached site set, built on first use.
    pub fn territory(&self) -> &Territory {
        self.territory
            .get_or_init(|| Territory::build(&self.road, &self.sites))
    }

    /// Nearest graph node via the k-d tree. The distance is in the planar
    /// frame's units, not geodesic meters.
    pub fn nearest_node(&self, lat: f64, lon: f64) -> Result<(NodeId, f64), Error> {
        self.spatial_index().nearest(&self.road, lat, lon)
    }

    /// Nearest graph node with an explicit method selector.
    pub fn nearest_node_with(
        &self,
        method: NearestMethod,
        lat: f64,
        lon: f64,
    ) -> Result<(NodeId, f64), Error> {
        match method {
            NearestMethod::Index => self.nearest_node(lat, lon),
            NearestMethod::Bruteforce => spatial::nearest_bruteforce(&self.road, lat, lon),
        }
    }

    /// How long the index build took, building it first if needed.
    pub fn index_build_time(&self) -> Duration {
        self.spatial_index().build_time()
    }
}
