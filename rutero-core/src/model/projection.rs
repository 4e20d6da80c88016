//! Fixed planar reference frame for the road graph.
//!
//! A local equirectangular plane centered on the node cloud, with meters on
//! both axes. Chosen once at graph-build time; every projected coordinate in
//! the model and every projected query point live in this frame.

use geo::{Coord, Point};

/// Meters per degree of latitude on the WGS84 ellipsoid's equatorial circle.
const METERS_PER_DEGREE: f64 = 111_319.490_793;

#[derive(Debug, Clone, Copy)]
pub struct Projection {
    origin: Coord<f64>,
    meters_per_lon_degree: f64,
}

impl Projection {
    /// Frame centered on the given geographic point (x = lon, y = lat).
    pub fn centered_on(origin: Point<f64>) -> Self {
        Self {
            origin: origin.0,
            meters_per_lon_degree: METERS_PER_DEGREE * origin.y().to_radians().cos(),
        }
    }

    /// Frame centered on the mean of a point cloud. Falls back to the
    /// null island origin for an empty cloud.
    pub(crate) fn fit(points: &[Point<f64>]) -> Self {
        if points.is_empty() {
            return Self::centered_on(Point::new(0.0, 0.0));
        }
        let n = points.len() as f64;
        let mean_lon = points.iter().map(|p| p.x()).sum::<f64>() / n;
        let mean_lat = points.iter().map(|p| p.y()).sum::<f64>() / n;
        Self::centered_on(Point::new(mean_lon, mean_lat))
    }

    pub fn project(&self, point: Point<f64>) -> Coord<f64> {
        Coord {
            x: (point.x() - self.origin.x) * self.meters_per_lon_degree,
            y: (point.y() - self.origin.y) * METERS_PER_DEGREE,
        }
    }

    pub fn unproject(&self, coord: Coord<f64>) -> Point<f64> {
        Point::new(
            coord.x / self.meters_per_lon_degree + self.origin.x,
            coord.y / METERS_PER_DEGREE + self.origin.y,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trips_near_the_origin() {
        let projection = Projection::centered_on(Point::new(-100.29, 25.65));
        let point = Point::new(-100.301, 25.662);

        let projected = projection.project(point);
        let restored = projection.unproject(projected);

        assert!((restored.x() - point.x()).abs() < 1e-9);
        assert!((restored.y() - point.y()).abs() < 1e-9);
    }

    #[test]
    fn one_degree_of_latitude_is_about_111_km() {
        let projection = Projection::centered_on(Point::new(0.0, 0.0));
        let projected = projection.project(Point::new(0.0, 1.0));

        assert!((projected.y - METERS_PER_DEGREE).abs() < 1e-6);
        assert!(projected.x.abs() < 1e-9);
    }
}
