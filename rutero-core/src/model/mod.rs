//! Data model for road-assistance routing
//!
//! Contains the road network, the service sites and the long-lived
//! [`RoadModel`] context that owns them together with the lazily built
//! query structures.

pub mod context;
pub mod projection;
pub mod road;
pub mod services;

pub use context::RoadModel;
pub use projection::Projection;
pub use road::{RoadEdge, RoadGraph, RoadNode};
pub use services::{ServiceFilter, ServiceKind, ServiceSite};
