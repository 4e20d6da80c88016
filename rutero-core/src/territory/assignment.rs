//! Discrete nearest-site assignment.

use rayon::prelude::*;

use crate::model::{RoadGraph, ServiceSite};
use crate::{NodeId, SiteId};

/// Planar nearest site for every graph node. O(nodes x sites), run once per
/// site set. Strict comparison keeps the lowest-indexed site on exact ties.
pub(super) fn assign_nodes(road: &RoadGraph, sites: &[ServiceSite]) -> Vec<Option<SiteId>> {
    if sites.is_empty() {
        return vec![None; road.node_count()];
    }

    (0..road.node_count())
        .into_par_iter()
        .map(|index| {
            let node = road.node(NodeId::new(index))?;
            let mut best: Option<(SiteId, f64)> = None;
            for (site_id, site) in sites.iter().enumerate() {
                let dx = node.projected.x - site.projected.x;
                let dy = node.projected.y - site.projected.y;
                let squared = dx * dx + dy * dy;
                if best.is_none_or(|(_, best_squared)| squared < best_squared) {
                    best = Some((site_id, squared));
                }
            }
            best.map(|(site_id, _)| site_id)
        })
        .collect()
}
