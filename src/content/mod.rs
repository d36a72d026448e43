//! Static Content
//!
//! The site's content lives in two read-only JSON files: the blog article
//! list and the resource directory plotted on the map. Both are loaded once
//! at startup into a [`ContentStore`] and never mutated afterwards.

pub mod error;
pub mod geo;
pub mod store;
pub mod types;

pub use error::{ContentError, ContentResult};
pub use geo::{haversine_km, validate_radius_km, GeoPoint, RADIUS_MAX_KM, RADIUS_MIN_KM, RADIUS_STEP_KM};
pub use store::{ContentIssue, ContentStore, TagCount, ARTICLES_FILE, RESOURCES_FILE};
pub use types::{tag_key, Article, Resource};
