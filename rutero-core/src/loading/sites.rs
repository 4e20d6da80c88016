//! Service-site list adapter for the service-loading collaborator.

use geo::{Coord, Point};
use serde::Deserialize;

use crate::Error;
use crate::model::ServiceSite;

/// Raw record as the external source serializes it.
#[derive(Debug, Deserialize)]
struct SiteRecord {
    id: String,
    #[serde(rename = "type")]
    kind: String,
    name: String,
    lat: f64,
    lon: f64,
    #[serde(default, rename = "is24h")]
    open_24h: bool,
    #[serde(default, rename = "hasTowing")]
    has_towing: bool,
}

/// Parses a JSON array of service sites.
///
/// # Errors
///
/// Returns [`Error::InvalidData`] for malformed JSON and
/// [`Error::UnknownServiceKind`] for an unrecognized type tag.
pub fn sites_from_json(raw: &str) -> Result<Vec<ServiceSite>, Error> {
    let records: Vec<SiteRecord> = serde_json::from_str(raw)
        .map_err(|e| Error::InvalidData(format!("service list: {e}")))?;

    records
        .into_iter()
        .map(|record| {
            Ok(ServiceSite {
                id: record.id,
                kind: record.kind.parse()?,
                name: record.name,
                geometry: Point::new(record.lon, record.lat),
                projected: Coord::zero(),
                open_24h: record.open_24h,
                has_towing: record.has_towing,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ServiceKind;

    #[test]
    fn parses_records_with_optional_flags() {
        let raw = r#"[
            {"id": "s1", "type": "gas_station", "name": "Pemex Norte", "lat": 25.68, "lon": -100.31, "is24h": true},
            {"id": "s2", "type": "workshop", "name": "Taller Juarez", "lat": 25.66, "lon": -100.29}
        ]"#;

        let sites = sites_from_json(raw).unwrap();
        assert_eq!(sites.len(), 2);
        assert_eq!(sites[0].kind, ServiceKind::GasStation);
        assert!(sites[0].open_24h);
        assert!(!sites[1].has_towing);
        assert_eq!(sites[1].geometry.y(), 25.66);
    }

    #[test]
    fn rejects_unknown_kind() {
        let raw = r#"[{"id": "x", "type": "car_wash", "name": "n", "lat": 0.0, "lon": 0.0}]"#;
        assert!(matches!(
            sites_from_json(raw),
            Err(Error::UnknownServiceKind(kind)) if kind == "car_wash"
        ));
    }
}
