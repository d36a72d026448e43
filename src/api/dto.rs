//! Data Transfer Objects
//!
//! Request and response types for the API endpoints.
//! These types are serialized/deserialized to/from JSON.

use serde::{Deserialize, Serialize};

use crate::config::MapConfig;
use crate::content::{Article, Resource, TagCount};

// ============================================
// ARTICLE DTOs
// ============================================

/// Query parameters for the article list
#[derive(Debug, Default, Deserialize)]
pub struct ArticleListQuery {
    /// Only articles carrying this tag (case-insensitive)
    #[serde(default)]
    pub tag: Option<String>,
}

/// Article list response
#[derive(Debug, Serialize, Deserialize)]
pub struct ArticleListResponse {
    pub articles: Vec<Article>,
    pub total: usize,
}

/// Tag list response
#[derive(Debug, Serialize)]
pub struct TagListResponse {
    pub tags: Vec<TagCount>,
}

// ============================================
// RESOURCE DTOs
// ============================================

/// Query parameters for the resource directory
#[derive(Debug, Default, Deserialize)]
pub struct ResourceQuery {
    /// Search radius in km (5..=100, step 5); all resources when absent
    #[serde(default)]
    pub radius_km: Option<u32>,
    /// Search center latitude, defaults to the map center
    #[serde(default)]
    pub lat: Option<f64>,
    /// Search center longitude, defaults to the map center
    #[serde(default)]
    pub lng: Option<f64>,
}

/// A resource with its distance from the search center
#[derive(Debug, Serialize, Deserialize)]
pub struct ResourceEntry {
    #[serde(flatten)]
    pub resource: Resource,
    /// Kilometres from the search center, rounded to 0.1
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub distance_km: Option<f64>,
}

/// Resource list response
#[derive(Debug, Serialize, Deserialize)]
pub struct ResourceListResponse {
    pub resources: Vec<ResourceEntry>,
    pub total: usize,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub radius_km: Option<u32>,
}

// ============================================
// SITE DTOs
// ============================================

/// A navigation link
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NavigationItem {
    pub href: String,
    pub text: String,
}

impl NavigationItem {
    pub fn new(href: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            href: href.into(),
            text: text.into(),
        }
    }
}

/// Site-wide settings for clients
#[derive(Debug, Serialize)]
pub struct SiteResponse {
    pub name: String,
    pub navigation: Vec<NavigationItem>,
    pub map: MapConfig,
}

// ============================================
// HEALTH DTOs
// ============================================

/// Health check response
#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Overall status: healthy, degraded
    pub status: String,
    /// Number of articles loaded
    pub articles: usize,
    /// Number of resources loaded
    pub resources: usize,
    /// Whether the front-end bundle directory exists
    pub static_bundle: bool,
    /// Server uptime in seconds
    pub uptime_seconds: u64,
    /// Application version
    pub version: String,
}
