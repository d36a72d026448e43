//! Blog articles

use serde::Deserialize;
use std::sync::OnceLock;

const ARTICLES_JSON: &str = include_str!("../../../content/articles.json");

/// Maximum excerpt length on cards, in characters
pub const EXCERPT_CHARS: usize = 140;

/// A blog article
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Article {
    pub id: u32,
    pub title: String,
    pub author: String,
    pub date: String,
    #[serde(default)]
    pub tags: Vec<String>,
    pub content: String,
    pub image_url: String,
}

impl Article {
    /// Case-insensitive tag match
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| same_tag(t, tag))
    }
}

/// Tags compare by their trimmed, lowercased form
pub fn same_tag(a: &str, b: &str) -> bool {
    a.trim().to_lowercase() == b.trim().to_lowercase()
}

/// The full article list in source order
pub fn all_articles() -> &'static [Article] {
    static ARTICLES: OnceLock<Vec<Article>> = OnceLock::new();
    ARTICLES.get_or_init(|| parse_articles(ARTICLES_JSON))
}

fn parse_articles(raw: &str) -> Vec<Article> {
    match serde_json::from_str(raw) {
        Ok(articles) => articles,
        Err(e) => {
            log_error(&format!("Failed to parse articles: {}", e));
            Vec::new()
        }
    }
}

/// Linear search by id
pub fn find_article(id: u32) -> Option<&'static Article> {
    all_articles().iter().find(|a| a.id == id)
}

/// Resolve the `:id` route parameter; anything non-numeric is not found.
pub fn resolve_article(param: Option<&str>) -> Option<&'static Article> {
    param?.trim().parse::<u32>().ok().and_then(find_article)
}

/// Card excerpt: first [`EXCERPT_CHARS`] characters, ellipsis when cut
pub fn excerpt(content: &str) -> String {
    let flat = content.split_whitespace().collect::<Vec<_>>().join(" ");
    if flat.chars().count() <= EXCERPT_CHARS {
        return flat;
    }
    let cut: String = flat.chars().take(EXCERPT_CHARS).collect();
    format!("{}…", cut.trim_end())
}

/// Body paragraphs, split on blank lines
pub fn paragraphs(content: &str) -> Vec<&str> {
    content
        .split("\n\n")
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .collect()
}

#[cfg(target_arch = "wasm32")]
fn log_error(message: &str) {
    web_sys::console::error_1(&message.into());
}

#[cfg(not(target_arch = "wasm32"))]
fn log_error(message: &str) {
    eprintln!("{}", message);
}
