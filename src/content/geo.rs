//! Distance helpers for the resource map.

use serde::{Deserialize, Serialize};

use super::error::{ContentError, ContentResult};

/// Smallest accepted search radius
pub const RADIUS_MIN_KM: u32 = 5;
/// Largest accepted search radius
pub const RADIUS_MAX_KM: u32 = 100;
/// Radius granularity
pub const RADIUS_STEP_KM: u32 = 5;

const EARTH_RADIUS_KM: f64 = 6371.0;

/// A WGS84 coordinate
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    pub lat: f64,
    pub lng: f64,
}

impl GeoPoint {
    pub fn new(lat: f64, lng: f64) -> ContentResult<Self> {
        let point = Self { lat, lng };
        if point.is_valid() {
            Ok(point)
        } else {
            Err(ContentError::InvalidCoordinates { lat, lng })
        }
    }

    pub fn is_valid(&self) -> bool {
        self.lat.is_finite()
            && self.lng.is_finite()
            && (-90.0..=90.0).contains(&self.lat)
            && (-180.0..=180.0).contains(&self.lng)
    }
}

/// Great-circle distance between two points in kilometres
pub fn haversine_km(a: GeoPoint, b: GeoPoint) -> f64 {
    let d_lat = (b.lat - a.lat).to_radians();
    let d_lng = (b.lng - a.lng).to_radians();
    let h = (d_lat / 2.0).sin().powi(2)
        + a.lat.to_radians().cos() * b.lat.to_radians().cos() * (d_lng / 2.0).sin().powi(2);
    2.0 * EARTH_RADIUS_KM * h.sqrt().asin()
}

/// Accept a radius only if the distance stepper could produce it.
pub fn validate_radius_km(radius: u32) -> ContentResult<u32> {
    if (RADIUS_MIN_KM..=RADIUS_MAX_KM).contains(&radius) && radius % RADIUS_STEP_KM == 0 {
        Ok(radius)
    } else {
        Err(ContentError::InvalidRadius(radius))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const LONDON: GeoPoint = GeoPoint { lat: 51.5072, lng: -0.1276 };
    const BRIGHTON: GeoPoint = GeoPoint { lat: 50.8279, lng: -0.1411 };

    #[test]
    fn test_distance_to_self_is_zero() {
        assert!(haversine_km(LONDON, LONDON).abs() < 1e-9);
    }

    #[test]
    fn test_distance_is_symmetric() {
        let there = haversine_km(LONDON, BRIGHTON);
        let back = haversine_km(BRIGHTON, LONDON);
        assert!((there - back).abs() < 1e-9);
        // London to Brighton is roughly 75 km as the crow flies
        assert!(there > 70.0 && there < 80.0, "got {}", there);
    }

    #[test]
    fn test_validate_radius() {
        assert_eq!(validate_radius_km(5).unwrap(), 5);
        assert_eq!(validate_radius_km(100).unwrap(), 100);
        assert!(validate_radius_km(0).is_err());
        assert!(validate_radius_km(7).is_err());
        assert!(validate_radius_km(105).is_err());
    }

    #[test]
    fn test_geo_point_rejects_out_of_range() {
        assert!(GeoPoint::new(91.0, 0.0).is_err());
        assert!(GeoPoint::new(0.0, -181.0).is_err());
        assert!(GeoPoint::new(f64::NAN, 0.0).is_err());
        assert!(GeoPoint::new(51.5, -0.12).is_ok());
    }
}
