//! Static Content
//!
//! Content files are embedded into the bundle at compile time and parsed on
//! first use, so every lookup is synchronous.

pub mod articles;
pub mod resources;
pub mod site;

pub use articles::{all_articles, excerpt, paragraphs, resolve_article, same_tag, Article};
pub use resources::{all_resources, resources_within, NearbyResource};
pub use site::{MapSettings, NavigationItem, MAP_SETTINGS, NAV_ITEMS, SITE_NAME, VALUE_PROPOSITIONS};
