//! Moodbase CLI
//!
//! Command-line interface for Moodbase operations:
//! - Browse articles and resources on a running server
//! - Check server status
//! - Validate content files offline
//! - Generate a default config

use anyhow::Context;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use moodbase::api::dto::{ArticleListResponse, HealthResponse, ResourceListResponse};
use moodbase::{validate_radius_km, Article, ContentStore, LoggingConfig};

#[derive(Parser)]
#[command(name = "moodbase")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Moodbase content and server tooling")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Server URL
    #[arg(long, default_value = "http://localhost:8080", global = true)]
    pub api_url: String,

    /// Output format (table, json)
    #[arg(short, long, default_value = "table", global = true)]
    pub format: String,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List articles, newest first
    Articles {
        /// Only articles with this tag
        #[arg(short, long)]
        tag: Option<String>,
    },

    /// Show a single article
    Article {
        /// Article id
        id: u32,
    },

    /// List directory resources
    Resources {
        /// Only resources within this many km of the map center (5-100, step 5)
        #[arg(short, long)]
        radius_km: Option<u32>,
    },

    /// Show server status
    Status,

    /// Check content files for duplicate ids, bad dates and bad coordinates
    Validate {
        /// Directory holding articles.json and resources.json
        #[arg(short, long, default_value = "content")]
        content_dir: PathBuf,
    },

    /// Generate default config file
    Config {
        /// Output path (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    moodbase::logging::init(&LoggingConfig {
        level: "warn".to_string(),
        ..Default::default()
    });
    tracing::debug!("Using server at {}", cli.api_url);

    let client = reqwest::Client::new();

    match cli.command {
        Commands::Articles { tag } => {
            let mut request = client.get(format!("{}/api/v1/articles", cli.api_url));
            if let Some(tag) = &tag {
                request = request.query(&[("tag", tag)]);
            }

            let response = request.send().await?;
            if !response.status().is_success() {
                eprintln!("Failed to fetch articles: {}", response.status());
                std::process::exit(1);
            }

            let list: ArticleListResponse = response.json().await?;

            if cli.format == "json" {
                println!("{}", serde_json::to_string_pretty(&list)?);
            } else if list.articles.is_empty() {
                println!("No articles found.");
            } else {
                println!("{:<4} {:<12} {:<20} {}", "ID", "Date", "Author", "Title");
                println!("{}", "-".repeat(80));
                for article in &list.articles {
                    println!(
                        "{:<4} {:<12} {:<20} {}",
                        article.id, article.date, article.author, article.title
                    );
                }
            }
        }

        Commands::Article { id } => {
            let response = client
                .get(format!("{}/api/v1/articles/{}", cli.api_url, id))
                .send()
                .await?;

            if response.status() == reqwest::StatusCode::NOT_FOUND {
                eprintln!("Article {} not found", id);
                std::process::exit(1);
            }
            if !response.status().is_success() {
                eprintln!("Failed to fetch article: {}", response.status());
                std::process::exit(1);
            }

            let article: Article = response.json().await?;

            if cli.format == "json" {
                println!("{}", serde_json::to_string_pretty(&article)?);
            } else {
                println!("{}", article.title);
                println!("{} · {}", article.author, article.date);
                if !article.tags.is_empty() {
                    println!("Tags: {}", article.tags.join(", "));
                }
                println!();
                println!("{}", article.content);
            }
        }

        Commands::Resources { radius_km } => {
            if let Some(radius) = radius_km {
                validate_radius_km(radius)?;
            }

            let mut request = client.get(format!("{}/api/v1/resources", cli.api_url));
            if let Some(radius) = radius_km {
                request = request.query(&[("radius_km", radius)]);
            }

            let response = request.send().await?;
            if !response.status().is_success() {
                let status = response.status();
                let text = response.text().await.unwrap_or_default();
                eprintln!("Failed ({}): {}", status, text);
                std::process::exit(1);
            }

            let list: ResourceListResponse = response.json().await?;

            if cli.format == "json" {
                println!("{}", serde_json::to_string_pretty(&list)?);
            } else if list.resources.is_empty() {
                println!("No resources found.");
            } else {
                println!("{:<4} {:<32} {:<15} {:>8}", "ID", "Name", "Category", "km");
                println!("{}", "-".repeat(62));
                for entry in &list.resources {
                    let distance = entry
                        .distance_km
                        .map(|d| format!("{:.1}", d))
                        .unwrap_or_else(|| "-".to_string());
                    println!(
                        "{:<4} {:<32} {:<15} {:>8}",
                        entry.resource.id, entry.resource.name, entry.resource.category, distance
                    );
                }
            }
        }

        Commands::Status => {
            let response = client.get(format!("{}/health", cli.api_url)).send().await;

            match response {
                Ok(resp) if resp.status().is_success() => {
                    let health: HealthResponse = resp.json().await?;

                    println!("Moodbase v{}", health.version);
                    println!();
                    println!("Status: {}", health.status);
                    println!("Articles: {}", health.articles);
                    println!("Resources: {}", health.resources);
                    println!(
                        "Front-end bundle: {}",
                        if health.static_bundle { "present" } else { "missing" }
                    );
                    println!();
                    println!("Uptime: {}", format_duration(health.uptime_seconds));
                }
                Ok(resp) => {
                    eprintln!("Server returned error: {}", resp.status());
                    std::process::exit(1);
                }
                Err(e) => {
                    eprintln!("Cannot connect to Moodbase at {}", cli.api_url);
                    eprintln!("Error: {}", e);
                    eprintln!();
                    eprintln!("Make sure the server is running:");
                    eprintln!("  cargo run --bin moodbase");
                    std::process::exit(1);
                }
            }
        }

        Commands::Validate { content_dir } => {
            let store = ContentStore::load(&content_dir)
                .with_context(|| format!("loading content from {:?}", content_dir))?;
            let issues = store.validate();
            tracing::debug!(issues = issues.len(), "Content validation finished");

            println!(
                "Checked {} articles and {} resources in {:?}",
                store.articles().len(),
                store.resources().len(),
                content_dir
            );

            if issues.is_empty() {
                println!("No issues found.");
            } else {
                println!();
                for issue in &issues {
                    println!("  - {}", issue);
                }
                std::process::exit(1);
            }
        }

        Commands::Config { output } => {
            let config = moodbase::config::generate_default_config();

            match output {
                Some(path) => {
                    if let Some(parent) = path.parent() {
                        std::fs::create_dir_all(parent)?;
                    }
                    std::fs::write(&path, &config)
                        .with_context(|| format!("writing config to {:?}", path))?;
                    println!("Config written to {:?}", path);
                }
                None => {
                    print!("{}", config);
                }
            }
        }
    }

    Ok(())
}

fn format_duration(seconds: u64) -> String {
    if seconds < 60 {
        format!("{}s", seconds)
    } else if seconds < 3600 {
        format!("{}m {}s", seconds / 60, seconds % 60)
    } else if seconds < 86400 {
        format!("{}h {}m", seconds / 3600, (seconds % 3600) / 60)
    } else {
        format!("{}d {}h", seconds / 86400, (seconds % 86400) / 3600)
    }
}
