use thiserror::Error;

use crate::NodeId;

#[derive(Error, Debug)]
pub enum Error {
    #[error("no nodes available for nearest-node lookup")]
    EmptyIndex,
    #[error("node handle is not part of the road graph")]
    InvalidNodeIndex,
    #[error("no edge between consecutive path nodes {from:?} and {to:?}")]
    InconsistentEdge { from: NodeId, to: NodeId },
    #[error("unknown search strategy: {0}")]
    UnknownStrategy(String),
    #[error("unknown cost metric: {0}")]
    UnknownCostMetric(String),
    #[error("unknown service kind: {0}")]
    UnknownServiceKind(String),
    #[error("invalid data: {0}")]
    InvalidData(String),
    #[error("GeoJSON error: {0}")]
    GeoJson(String),
}
