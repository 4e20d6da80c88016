//! Road network components - nodes and edges

use geo::{Coord, Point};

use crate::{FALLBACK_SPEED_MPS, SourceId};

/// Road graph node
#[derive(Debug, Clone)]
pub struct RoadNode {
    /// Id assigned by the map data source
    pub id: SourceId,
    /// Geographic coordinates (x = lon, y = lat)
    pub geometry: Point<f64>,
    /// Position in the graph's planar reference frame, meters
    pub projected: Coord<f64>,
}

/// Road graph edge (directed road segment)
#[derive(Debug, Clone)]
pub struct RoadEdge {
    /// Segment length in meters
    pub length: f64,
    /// Driving time in seconds, when the data source provides one
    pub travel_time: Option<f64>,
}

impl RoadEdge {
    /// Travel time in seconds, estimated from the length at ~50 km/h when
    /// the edge carries none.
    pub fn travel_time_or_estimate(&self) -> f64 {
        self.travel_time
            .unwrap_or(self.length / FALLBACK_SPEED_MPS)
    }
}
