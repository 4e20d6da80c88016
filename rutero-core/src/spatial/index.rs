//! Balanced point index over projected node coordinates.

use std::time::{Duration, Instant};

use geo::Point;
use kiddo::{KdTree, SquaredEuclidean};
use log::debug;

use crate::model::RoadGraph;
use crate::{Error, NodeId};

/// k-d tree over the projected (x, y) of every graph node.
///
/// Built once per graph; [`crate::RoadModel::spatial_index`] guards the lazy
/// build so racing queries construct it exactly once.
pub struct SpatialIndex {
    tree: KdTree<f64, 2>,
    nodes: Vec<NodeId>,
    build_time: Duration,
}

impl SpatialIndex {
    pub fn build(road: &RoadGraph) -> Self {
        let started = Instant::now();

        let mut tree: KdTree<f64, 2> = KdTree::with_capacity(road.node_count());
        let mut nodes = Vec::with_capacity(road.node_count());
        for (node_id, node) in road.nodes() {
            tree.add(&[node.projected.x, node.projected.y], nodes.len() as u64);
            nodes.push(node_id);
        }

        let build_time = started.elapsed();
        debug!("Spatial index built over {} nodes in {build_time:?}", nodes.len());

        Self {
            tree,
            nodes,
            build_time,
        }
    }

    /// Nearest node to a geographic query point.
    ///
    /// The query is projected into the index's planar frame first, and the
    /// returned distance is Euclidean in that frame's units. It is not a
    /// geodesic distance; use [`super::nearest_bruteforce`] for meters.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyIndex`] when the graph has no nodes.
    pub fn nearest(&self, road: &RoadGraph, lat: f64, lon: f64) -> Result<(NodeId, f64), Error> {
        if self.nodes.is_empty() {
            return Err(Error::EmptyIndex);
        }

        let query = road.projection().project(Point::new(lon, lat));
        let hit = self.tree.nearest_one::<SquaredEuclidean>(&[query.x, query.y]);

        Ok((self.nodes[hit.item as usize], hit.distance.sqrt()))
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Wall-clock duration of the build, recorded once at build time.
    pub fn build_time(&self) -> Duration {
        self.build_time
    }
}
