//! Resource directory shown on the map

use serde::Deserialize;
use std::sync::OnceLock;

const RESOURCES_JSON: &str = include_str!("../../../content/resources.json");

const EARTH_RADIUS_KM: f64 = 6371.0;

/// A support resource with a location
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Resource {
    pub id: u32,
    pub name: String,
    pub category: String,
    pub address: String,
    pub lat: f64,
    pub lng: f64,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
}

/// A resource and its distance from the search center
#[derive(Clone, Debug, PartialEq)]
pub struct NearbyResource {
    pub resource: Resource,
    pub distance_km: f64,
}

pub fn all_resources() -> &'static [Resource] {
    static RESOURCES: OnceLock<Vec<Resource>> = OnceLock::new();
    RESOURCES.get_or_init(|| serde_json::from_str(RESOURCES_JSON).unwrap_or_default())
}

/// Great-circle distance in km between `(lat, lng)` pairs
pub fn haversine_km(a: (f64, f64), b: (f64, f64)) -> f64 {
    let d_lat = (b.0 - a.0).to_radians();
    let d_lng = (b.1 - a.1).to_radians();
    let h = (d_lat / 2.0).sin().powi(2)
        + a.0.to_radians().cos() * b.0.to_radians().cos() * (d_lng / 2.0).sin().powi(2);
    2.0 * EARTH_RADIUS_KM * h.sqrt().asin()
}

/// Resources within `radius_km` of `center` (`(lat, lng)`), nearest first
pub fn resources_within(resources: &[Resource], center: (f64, f64), radius_km: u32) -> Vec<NearbyResource> {
    let mut nearby: Vec<NearbyResource> = resources
        .iter()
        .map(|r| NearbyResource {
            distance_km: haversine_km(center, (r.lat, r.lng)),
            resource: r.clone(),
        })
        .filter(|n| n.distance_km <= f64::from(radius_km))
        .collect();
    nearby.sort_by(|a, b| a.distance_km.total_cmp(&b.distance_km));
    nearby
}
