//! # Moodbase
//!
//! Server side of the Moodbase mental-health resource directory: loads the
//! static site content, exposes it as a read-only JSON API and serves the
//! Leptos front-end bundle from `moodbase-ui`.
//!
//! ## Modules
//!
//! - [`content`]: Article list and resource directory, lookups and validation
//! - [`api`]: HTTP server with Axum
//! - [`config`]: TOML configuration with environment overrides
//! - [`logging`]: Tracing subscriber setup
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use moodbase::{AppState, Config, ContentStore};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::load_default();
//!     let content = ContentStore::load(&config.content.dir)?;
//!
//!     if let Some(article) = content.find_article(1) {
//!         println!("{} by {}", article.title, article.author);
//!     }
//!
//!     moodbase::serve(AppState::new(content, config.server, config.map)).await?;
//!     Ok(())
//! }
//! ```

pub mod api;
pub mod config;
pub mod content;
pub mod logging;

pub use api::{build_router, serve, ApiError, ApiResult, AppState};

pub use content::{
    haversine_km, validate_radius_km, Article, ContentError, ContentIssue, ContentResult,
    ContentStore, GeoPoint, Resource, TagCount,
};

pub use config::{
    generate_default_config, Config, ConfigError, ContentConfig, LoggingConfig, MapConfig,
    ServerConfig,
};
