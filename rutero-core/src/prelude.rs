// Re-export of the public surface

pub use crate::error::Error;
pub use crate::loading::{RoadGraphBuilder, sites_from_json};
pub use crate::model::{
    Projection, RoadEdge, RoadGraph, RoadModel, RoadNode, ServiceFilter, ServiceKind, ServiceSite,
};
pub use crate::routing::{
    BatchSummary, CancelFlag, CostMetric, PairEvaluation, PathMetrics, SearchOutcome,
    SearchReport, SearchRequest, Strategy, evaluate_batch, path_metrics, run_search,
    run_search_cancellable,
};
pub use crate::spatial::{NearestMethod, SpatialIndex, nearest_bruteforce};
pub use crate::territory::{
    AssignmentTier, RankedSite, SiteAssignment, Territory, TerritoryCell, assign_site,
    rank_sites_by_route,
};

// Core scalar types
pub use crate::{FALLBACK_SPEED_MPS, NodeId, SiteId, SourceId};
