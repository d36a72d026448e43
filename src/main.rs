//! Moodbase Server
//!
//! Run with: cargo run --bin moodbase
//!
//! Configuration is read from `config.toml` (see `moodbase-cli config`) and
//! the `MOODBASE_*` environment variables; `RUST_LOG` overrides the log level.

use moodbase::{serve, AppState, Config, ContentStore};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load_default();
    moodbase::logging::init(&config.logging);

    tracing::info!("Starting Moodbase v{}", env!("CARGO_PKG_VERSION"));
    tracing::info!("Content directory: {:?}", config.content.dir);
    tracing::info!("Static bundle: {:?}", config.server.static_dir);

    let content = ContentStore::load(&config.content.dir)?;

    let state = AppState::new(content, config.server, config.map);
    serve(state).await?;

    tracing::info!("Moodbase server stopped");
    Ok(())
}
