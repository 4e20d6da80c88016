//! GeoJSON view of the territory cells.

use geojson::{FeatureCollection, Geometry, GeometryValue as GeoJsonValue, Position};
use serde_json::json;

use super::Territory;
use crate::Error;
use crate::model::{ServiceFilter, ServiceSite};

impl Territory {
    /// Cells as a `FeatureCollection`, one polygon feature per
    /// non-degenerate cell whose site matches the filter.
    pub fn to_geojson(
        &self,
        sites: &[ServiceSite],
        filter: ServiceFilter,
    ) -> Result<FeatureCollection, Error> {
        let mut features = Vec::new();

        for cell in self.cells() {
            let Some(site) = sites.get(cell.site) else {
                continue;
            };
            if !filter.matches(site) {
                continue;
            }

            // GeoJSON wants an explicitly closed ring
            let mut ring: Vec<Position> = cell
                .polygon
                .iter()
                .map(|vertex| Position::from(vec![vertex.x(), vertex.y()]))
                .collect();
            if let Some(first) = ring.first().cloned() {
                ring.push(first);
            }
            let geometry = Geometry::new(GeoJsonValue::Polygon {
                coordinates: vec![ring],
            });

            let value = json!({
                "type": "Feature",
                "geometry": geometry,
                "properties": {
                    "site_id": site.id,
                    "kind": site.kind,
                    "name": site.name,
                    "lat": site.geometry.y(),
                    "lon": site.geometry.x(),
                    "open_24h": site.open_24h,
                    "has_towing": site.has_towing,
                }
            });
            features.push(
                serde_json::from_value(value).map_err(|e| Error::GeoJson(e.to_string()))?,
            );
        }

        Ok(FeatureCollection {
            features,
            bbox: None,
            foreign_members: None,
        })
    }

    pub fn to_geojson_string(
        &self,
        sites: &[ServiceSite],
        filter: ServiceFilter,
    ) -> Result<String, Error> {
        serde_json::to_string(&self.to_geojson(sites, filter)?)
            .map_err(|e| Error::GeoJson(e.to_string()))
    }
}
