//! Content Store
//!
//! In-memory, read-only view over the article list and resource directory.
//! Lookups are linear scans: the data set is a handful of records and the
//! order of the source file is significant (first match wins).

use serde::Serialize;
use std::collections::{BTreeMap, HashSet};
use std::path::{Path, PathBuf};

use super::error::{ContentError, ContentResult};
use super::geo::{haversine_km, validate_radius_km, GeoPoint};
use super::types::{tag_key, Article, Resource};

/// Article list file name inside the content directory
pub const ARTICLES_FILE: &str = "articles.json";
/// Resource directory file name inside the content directory
pub const RESOURCES_FILE: &str = "resources.json";

/// Loaded site content
#[derive(Debug, Clone, Default)]
pub struct ContentStore {
    articles: Vec<Article>,
    resources: Vec<Resource>,
}

/// Number of articles carrying a tag
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TagCount {
    pub tag: String,
    pub count: usize,
}

/// A problem found by [`ContentStore::validate`]
#[derive(Debug, Clone, PartialEq)]
pub enum ContentIssue {
    DuplicateArticleId(u32),
    DuplicateResourceId(u32),
    InvalidArticleDate { id: u32, date: String },
    EmptyArticleTitle(u32),
    InvalidResourceLocation { id: u32, lat: f64, lng: f64 },
}

impl std::fmt::Display for ContentIssue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ContentIssue::DuplicateArticleId(id) => write!(f, "duplicate article id {}", id),
            ContentIssue::DuplicateResourceId(id) => write!(f, "duplicate resource id {}", id),
            ContentIssue::InvalidArticleDate { id, date } => {
                write!(f, "article {} has invalid date '{}'", id, date)
            }
            ContentIssue::EmptyArticleTitle(id) => write!(f, "article {} has an empty title", id),
            ContentIssue::InvalidResourceLocation { id, lat, lng } => {
                write!(f, "resource {} has invalid location ({}, {})", id, lat, lng)
            }
        }
    }
}

impl ContentStore {
    /// Build a store from already-parsed records
    pub fn new(articles: Vec<Article>, resources: Vec<Resource>) -> Self {
        Self { articles, resources }
    }

    /// Load `articles.json` and `resources.json` from a content directory.
    ///
    /// A missing resources file is tolerated (the map simply shows nothing);
    /// a missing article list is an error.
    pub fn load(dir: impl AsRef<Path>) -> ContentResult<Self> {
        let dir = dir.as_ref();
        let articles: Vec<Article> = read_json(&dir.join(ARTICLES_FILE))?;

        let resources_path = dir.join(RESOURCES_FILE);
        let resources: Vec<Resource> = if resources_path.exists() {
            read_json(&resources_path)?
        } else {
            tracing::warn!(path = ?resources_path, "Resource directory not found, map will be empty");
            Vec::new()
        };

        let store = Self::new(articles, resources);
        for issue in store.validate() {
            tracing::warn!(dir = ?dir, "Content issue: {}", issue);
        }

        tracing::info!(
            articles = store.articles.len(),
            resources = store.resources.len(),
            "Loaded content from {:?}",
            dir
        );
        Ok(store)
    }

    /// All articles in source order
    pub fn articles(&self) -> &[Article] {
        &self.articles
    }

    /// All resources in source order
    pub fn resources(&self) -> &[Resource] {
        &self.resources
    }

    /// Linear search by id; the first record with the id wins.
    pub fn find_article(&self, id: u32) -> Option<&Article> {
        self.articles.iter().find(|a| a.id == id)
    }

    /// Articles newest first, optionally restricted to a tag.
    ///
    /// Articles with unparseable dates sort last; ties keep source order.
    pub fn articles_newest_first(&self, tag: Option<&str>) -> Vec<&Article> {
        let mut list: Vec<&Article> = self
            .articles
            .iter()
            .filter(|a| tag.map_or(true, |t| a.has_tag(t)))
            .collect();
        list.sort_by(|a, b| b.published_on().ok().cmp(&a.published_on().ok()));
        list
    }

    /// Distinct tags (lowercased) with article counts, sorted by tag
    pub fn tags(&self) -> Vec<TagCount> {
        let mut counts: BTreeMap<String, usize> = BTreeMap::new();
        for article in &self.articles {
            let unique: HashSet<String> = article.tags.iter().map(|t| tag_key(t)).collect();
            for tag in unique {
                *counts.entry(tag).or_insert(0) += 1;
            }
        }
        counts
            .into_iter()
            .map(|(tag, count)| TagCount { tag, count })
            .collect()
    }

    /// Resources within `radius_km` of `center`, nearest first, with distances.
    pub fn resources_within(
        &self,
        center: GeoPoint,
        radius_km: u32,
    ) -> ContentResult<Vec<(&Resource, f64)>> {
        let radius_km = validate_radius_km(radius_km)?;
        if !center.is_valid() {
            return Err(ContentError::InvalidCoordinates {
                lat: center.lat,
                lng: center.lng,
            });
        }

        let mut nearby: Vec<(&Resource, f64)> = self
            .resources
            .iter()
            .map(|r| (r, haversine_km(center, r.location())))
            .filter(|(_, d)| *d <= f64::from(radius_km))
            .collect();
        nearby.sort_by(|a, b| a.1.total_cmp(&b.1));
        Ok(nearby)
    }

    /// Check the invariants the site relies on but does not enforce at render time.
    pub fn validate(&self) -> Vec<ContentIssue> {
        let mut issues = Vec::new();

        let mut seen = HashSet::new();
        for article in &self.articles {
            if !seen.insert(article.id) {
                issues.push(ContentIssue::DuplicateArticleId(article.id));
            }
            if article.title.trim().is_empty() {
                issues.push(ContentIssue::EmptyArticleTitle(article.id));
            }
            if article.published_on().is_err() {
                issues.push(ContentIssue::InvalidArticleDate {
                    id: article.id,
                    date: article.date.clone(),
                });
            }
        }

        let mut seen = HashSet::new();
        for resource in &self.resources {
            if !seen.insert(resource.id) {
                issues.push(ContentIssue::DuplicateResourceId(resource.id));
            }
            if !resource.location().is_valid() {
                issues.push(ContentIssue::InvalidResourceLocation {
                    id: resource.id,
                    lat: resource.lat,
                    lng: resource.lng,
                });
            }
        }

        issues
    }
}

fn read_json<T: serde::de::DeserializeOwned>(path: &Path) -> ContentResult<T> {
    let raw = std::fs::read_to_string(path).map_err(|source| ContentError::Io {
        path: PathBuf::from(path),
        source,
    })?;
    serde_json::from_str(&raw).map_err(|source| ContentError::Parse {
        path: PathBuf::from(path),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    const CENTER: GeoPoint = GeoPoint { lat: 51.5072, lng: -0.1276 };

    fn article(id: u32, date: &str, tags: &[&str]) -> Article {
        Article {
            id,
            title: format!("Article {}", id),
            author: "Author".to_string(),
            date: date.to_string(),
            tags: tags.iter().map(|t| t.to_string()).collect(),
            content: "Body".to_string(),
            image_url: format!("/images/{}.jpg", id),
        }
    }

    fn resource(id: u32, lat: f64, lng: f64) -> Resource {
        Resource {
            id,
            name: format!("Resource {}", id),
            category: "counselling".to_string(),
            address: "Somewhere".to_string(),
            lat,
            lng,
            phone: None,
            url: None,
        }
    }

    fn sample_store() -> ContentStore {
        ContentStore::new(
            vec![
                article(1, "2024-01-10", &["anxiety", "self-care"]),
                article(2, "2024-03-01", &["Sleep", "self-care"]),
                article(3, "2023-12-24", &["community"]),
            ],
            vec![
                resource(1, 51.5055, -0.0865), // ~3 km
                resource(2, 51.4826, -0.0077), // ~9 km
                resource(3, 50.8279, -0.1411), // ~76 km
            ],
        )
    }

    #[test]
    fn test_find_article() {
        let store = sample_store();
        assert_eq!(store.find_article(2).unwrap().title, "Article 2");
        assert!(store.find_article(42).is_none());
    }

    #[test]
    fn test_find_article_first_duplicate_wins() {
        let mut first = article(7, "2024-01-01", &[]);
        first.title = "First".to_string();
        let mut second = article(7, "2024-01-02", &[]);
        second.title = "Second".to_string();
        let store = ContentStore::new(vec![first, second], vec![]);

        assert_eq!(store.find_article(7).unwrap().title, "First");
        assert_eq!(store.validate(), vec![ContentIssue::DuplicateArticleId(7)]);
    }

    #[test]
    fn test_articles_newest_first() {
        let store = sample_store();
        let ids: Vec<u32> = store.articles_newest_first(None).iter().map(|a| a.id).collect();
        assert_eq!(ids, vec![2, 1, 3]);

        let ids: Vec<u32> = store
            .articles_newest_first(Some("SELF-CARE"))
            .iter()
            .map(|a| a.id)
            .collect();
        assert_eq!(ids, vec![2, 1]);
    }

    #[test]
    fn test_listed_tags_filter_their_own_articles() {
        let store = ContentStore::new(
            vec![
                article(1, "2024-01-10", &["Émotions"]),
                article(2, "2024-02-10", &["émotions", "Ängste"]),
            ],
            vec![],
        );

        let tags = store.tags();
        assert_eq!(tags.len(), 2);
        for listed in &tags {
            assert_eq!(
                store.articles_newest_first(Some(&listed.tag)).len(),
                listed.count,
                "{}",
                listed.tag
            );
        }
    }

    #[test]
    fn test_tags_counted_case_insensitively() {
        let store = sample_store();
        let tags = store.tags();
        assert_eq!(
            tags,
            vec![
                TagCount { tag: "anxiety".into(), count: 1 },
                TagCount { tag: "community".into(), count: 1 },
                TagCount { tag: "self-care".into(), count: 2 },
                TagCount { tag: "sleep".into(), count: 1 },
            ]
        );
    }

    #[test]
    fn test_resources_within_radius() {
        let store = sample_store();

        let ids: Vec<u32> = store
            .resources_within(CENTER, 5)
            .unwrap()
            .iter()
            .map(|(r, _)| r.id)
            .collect();
        assert_eq!(ids, vec![1]);

        let nearby = store.resources_within(CENTER, 100).unwrap();
        assert_eq!(nearby.len(), 3);
        assert!(nearby.windows(2).all(|w| w[0].1 <= w[1].1));
    }

    #[test]
    fn test_resources_within_rejects_bad_radius() {
        let store = sample_store();
        assert!(matches!(
            store.resources_within(CENTER, 12),
            Err(ContentError::InvalidRadius(12))
        ));
        assert!(store.resources_within(CENTER, 0).is_err());
    }

    #[test]
    fn test_validate_flags_bad_records() {
        let store = ContentStore::new(
            vec![article(1, "yesterday", &[])],
            vec![resource(1, 0.0, 0.0), resource(1, 95.0, 0.0)],
        );
        let issues = store.validate();
        assert!(issues.contains(&ContentIssue::InvalidArticleDate {
            id: 1,
            date: "yesterday".to_string()
        }));
        assert!(issues.contains(&ContentIssue::DuplicateResourceId(1)));
        assert!(issues
            .iter()
            .any(|i| matches!(i, ContentIssue::InvalidResourceLocation { id: 1, .. })));
    }

    #[test]
    fn test_load_from_directory() {
        let dir = tempdir().unwrap();
        std::fs::write(
            dir.path().join(ARTICLES_FILE),
            r#"[{"id":1,"title":"Hello","author":"Sam","date":"2024-02-02","tags":["a"],"content":"Hi","imageUrl":"/h.jpg"}]"#,
        )
        .unwrap();

        let store = ContentStore::load(dir.path()).unwrap();
        assert_eq!(store.articles().len(), 1);
        assert!(store.resources().is_empty());
    }

    #[test]
    fn test_load_missing_articles_is_error() {
        let dir = tempdir().unwrap();
        assert!(matches!(
            ContentStore::load(dir.path()),
            Err(ContentError::Io { .. })
        ));
    }

    #[test]
    fn test_load_invalid_json_is_error() {
        let dir = tempdir().unwrap();
        std::fs::write(dir.path().join(ARTICLES_FILE), "not json").unwrap();
        assert!(matches!(
            ContentStore::load(dir.path()),
            Err(ContentError::Parse { .. })
        ));
    }

    #[test]
    fn test_bundled_content_is_valid() {
        let dir = Path::new(env!("CARGO_MANIFEST_DIR")).join("content");
        let store = ContentStore::load(dir).unwrap();
        assert!(!store.articles().is_empty());
        assert!(store.validate().is_empty(), "{:?}", store.validate());
    }
}
