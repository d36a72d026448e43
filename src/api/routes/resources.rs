//! Resource Routes
//!
//! - GET /api/v1/resources - Resource directory, optionally limited to a
//!   radius around a point (`?radius_km=25&lat=..&lng=..`)

use axum::{
    extract::{rejection::QueryRejection, Query, State},
    Json,
};
use std::sync::Arc;

use crate::api::dto::{ResourceEntry, ResourceListResponse, ResourceQuery};
use crate::api::error::{ApiError, ApiResult};
use crate::api::state::AppState;
use crate::content::GeoPoint;

/// GET /api/v1/resources
pub async fn list_resources(
    State(state): State<Arc<AppState>>,
    query: Result<Query<ResourceQuery>, QueryRejection>,
) -> ApiResult<Json<ResourceListResponse>> {
    let Query(query) = query?;

    let Some(radius_km) = query.radius_km else {
        let resources: Vec<ResourceEntry> = state
            .content
            .resources()
            .iter()
            .cloned()
            .map(|resource| ResourceEntry {
                resource,
                distance_km: None,
            })
            .collect();

        return Ok(Json(ResourceListResponse {
            total: resources.len(),
            resources,
            radius_km: None,
        }));
    };

    let center = match (query.lat, query.lng) {
        (Some(lat), Some(lng)) => GeoPoint::new(lat, lng)?,
        (None, None) => state.map_center(),
        _ => {
            return Err(ApiError::Validation(
                "lat and lng must be given together".to_string(),
            ))
        }
    };

    let resources: Vec<ResourceEntry> = state
        .content
        .resources_within(center, radius_km)?
        .into_iter()
        .map(|(resource, distance)| ResourceEntry {
            resource: resource.clone(),
            distance_km: Some((distance * 10.0).round() / 10.0),
        })
        .collect();

    tracing::debug!(radius_km, found = resources.len(), "Resource radius search");

    Ok(Json(ResourceListResponse {
        total: resources.len(),
        resources,
        radius_km: Some(radius_km),
    }))
}
