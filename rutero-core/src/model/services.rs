//! Service sites - the fixed set of assistance locations.

use std::str::FromStr;

use geo::{Coord, Point};
use serde::{Deserialize, Serialize};

use crate::Error;

/// Category of a service site.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ServiceKind {
    GasStation,
    TireShop,
    Workshop,
}

impl ServiceKind {
    pub fn label(self) -> &'static str {
        match self {
            ServiceKind::GasStation => "Gas station",
            ServiceKind::TireShop => "Tire shop",
            ServiceKind::Workshop => "Workshop",
        }
    }
}

impl FromStr for ServiceKind {
    type Err = Error;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw {
            "gas_station" => Ok(ServiceKind::GasStation),
            "tire_shop" => Ok(ServiceKind::TireShop),
            "workshop" => Ok(ServiceKind::Workshop),
            other => Err(Error::UnknownServiceKind(other.to_string())),
        }
    }
}

/// A service location, loaded once from an external source.
#[derive(Debug, Clone)]
pub struct ServiceSite {
    pub id: String,
    pub kind: ServiceKind,
    pub name: String,
    /// Geographic coordinates (x = lon, y = lat)
    pub geometry: Point<f64>,
    /// Position in the graph's planar frame; filled in when the site list
    /// is attached to a [`crate::RoadModel`].
    pub projected: Coord<f64>,
    pub open_24h: bool,
    pub has_towing: bool,
}

impl ServiceSite {
    pub fn new(id: impl Into<String>, kind: ServiceKind, name: impl Into<String>, lat: f64, lon: f64) -> Self {
        Self {
            id: id.into(),
            kind,
            name: name.into(),
            geometry: Point::new(lon, lat),
            projected: Coord::zero(),
            open_24h: false,
            has_towing: false,
        }
    }
}

/// Candidate filter for service queries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ServiceFilter {
    #[default]
    Any,
    Kind(ServiceKind),
}

impl ServiceFilter {
    pub fn matches(self, site: &ServiceSite) -> bool {
        match self {
            ServiceFilter::Any => true,
            ServiceFilter::Kind(kind) => site.kind == kind,
        }
    }
}
