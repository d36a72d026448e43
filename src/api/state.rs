//! Application State
//!
//! Shared state accessible by all API handlers.
//! Wrapped in Arc for thread-safe sharing across async tasks.

use crate::config::{MapConfig, ServerConfig};
use crate::content::{ContentStore, GeoPoint};
use std::sync::Arc;
use std::time::Instant;

/// Shared application state for all handlers
#[derive(Clone)]
pub struct AppState {
    /// Read-only site content, loaded once at startup
    pub content: Arc<ContentStore>,
    /// Server configuration
    pub server: Arc<ServerConfig>,
    /// Public map settings
    pub map: Arc<MapConfig>,
    /// Server start time for uptime tracking
    pub start_time: Instant,
}

impl AppState {
    pub fn new(content: ContentStore, server: ServerConfig, map: MapConfig) -> Self {
        Self {
            content: Arc::new(content),
            server: Arc::new(server),
            map: Arc::new(map),
            start_time: Instant::now(),
        }
    }

    /// Get server uptime in seconds
    pub fn uptime_seconds(&self) -> u64 {
        self.start_time.elapsed().as_secs()
    }

    /// Configured map center as a coordinate
    pub fn map_center(&self) -> GeoPoint {
        GeoPoint {
            lng: self.map.center[0],
            lat: self.map.center[1],
        }
    }
}
