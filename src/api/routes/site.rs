//! Site Routes
//!
//! - GET /api/v1/site - Navigation items and public map settings

use axum::{extract::State, Json};
use std::sync::Arc;

use crate::api::dto::{NavigationItem, SiteResponse};
use crate::api::state::AppState;

/// Site name shown in headers and the footer
pub const SITE_NAME: &str = "Moodbase";

/// Primary navigation, in display order
pub fn navigation_items() -> Vec<NavigationItem> {
    vec![
        NavigationItem::new("/", "Home"),
        NavigationItem::new("/map", "Find Support"),
        NavigationItem::new("/blog", "Blog"),
        NavigationItem::new("/about", "About"),
    ]
}

/// GET /api/v1/site
pub async fn site_settings(State(state): State<Arc<AppState>>) -> Json<SiteResponse> {
    Json(SiteResponse {
        name: SITE_NAME.to_string(),
        navigation: navigation_items(),
        map: state.map.as_ref().clone(),
    })
}
