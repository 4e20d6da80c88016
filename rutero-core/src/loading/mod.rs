//! Interfaces for the external data-loading collaborators.
//!
//! The road graph and the service-site list arrive fully materialized; this
//! module only validates and assembles them into the model types.

mod builder;
mod sites;

pub use builder::RoadGraphBuilder;
pub use sites::sites_from_json;
