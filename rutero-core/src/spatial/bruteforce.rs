//! Exhaustive nearest-node scan, the reference oracle for the index.

use geo::{Distance, Haversine, Point};

use crate::model::RoadGraph;
use crate::{Error, NodeId};

/// O(n) scan over every node's geographic coordinate, returning the true
/// geodesic (haversine) distance in meters. The first node encountered wins
/// exact ties.
///
/// # Errors
///
/// Returns [`Error::EmptyIndex`] when the graph has no nodes.
pub fn nearest_bruteforce(road: &RoadGraph, lat: f64, lon: f64) -> Result<(NodeId, f64), Error> {
    let query = Point::new(lon, lat);

    let mut best: Option<(NodeId, f64)> = None;
    for (node_id, node) in road.nodes() {
        let distance = Haversine.distance(query, node.geometry);
        if best.is_none_or(|(_, best_distance)| distance < best_distance) {
            best = Some((node_id, distance));
        }
    }

    best.ok_or(Error::EmptyIndex)
}
