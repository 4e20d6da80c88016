//! Core engine for road-assistance routing
//!
//! Answers two questions over a fixed, preloaded road network: how to get
//! from A to B (five search strategies over two cost metrics), and which
//! service point should handle a given position (spatial nearest-node
//! lookup plus a two-tier service territory partition).
//!
//! The graph, the spatial index and the territory partition are built once
//! and shared read-only between concurrent queries; see [`model::RoadModel`].

pub mod error;
pub mod loading;
pub mod model;
pub mod prelude;
pub mod routing;
pub mod spatial;
pub mod territory;

pub use error::Error;
pub use model::RoadModel;

/// Node handle inside the road graph, stable for the process lifetime.
pub type NodeId = petgraph::graph::NodeIndex;

/// Node identity assigned by the external map data source.
pub type SourceId = i64;

/// Position of a service site in the model's site list. The list order is
/// the fixed site ordering used for every deterministic tie-break.
pub type SiteId = usize;

/// Assumed speed in m/s (~50 km/h) when an edge carries no travel time.
/// The time step cost and the A* heuristic use the same constant, which
/// keeps the heuristic admissible.
pub const FALLBACK_SPEED_MPS: f64 = 13.9;
