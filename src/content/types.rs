//! Content record types
//!
//! Field names follow the camelCase keys used in the JSON content files.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::error::{ContentError, ContentResult};
use super::geo::GeoPoint;

/// A blog article
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Article {
    pub id: u32,
    pub title: String,
    pub author: String,
    /// ISO `YYYY-MM-DD`, kept verbatim for display
    pub date: String,
    #[serde(default)]
    pub tags: Vec<String>,
    pub content: String,
    pub image_url: String,
}

impl Article {
    /// Parse the publication date
    pub fn published_on(&self) -> ContentResult<NaiveDate> {
        NaiveDate::parse_from_str(&self.date, "%Y-%m-%d").map_err(|_| ContentError::InvalidDate {
            id: self.id,
            date: self.date.clone(),
        })
    }

    /// Case-insensitive tag match
    pub fn has_tag(&self, tag: &str) -> bool {
        let wanted = tag_key(tag);
        self.tags.iter().any(|t| tag_key(t) == wanted)
    }
}

/// Folded form of a tag, used for both grouping and filtering
pub fn tag_key(tag: &str) -> String {
    tag.trim().to_lowercase()
}

/// A directory entry shown on the map
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Resource {
    pub id: u32,
    pub name: String,
    pub category: String,
    pub address: String,
    pub lat: f64,
    pub lng: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

impl Resource {
    pub fn location(&self) -> GeoPoint {
        GeoPoint { lat: self.lat, lng: self.lng }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn article(date: &str) -> Article {
        Article {
            id: 9,
            title: "T".to_string(),
            author: "A".to_string(),
            date: date.to_string(),
            tags: vec!["Self-Care".to_string()],
            content: String::new(),
            image_url: "/x.jpg".to_string(),
        }
    }

    #[test]
    fn test_article_json_uses_camel_case() {
        let json = r#"{"id":1,"title":"t","author":"a","date":"2024-01-01","tags":[],"content":"c","imageUrl":"/i.jpg"}"#;
        let parsed: Article = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.image_url, "/i.jpg");

        let back = serde_json::to_value(&parsed).unwrap();
        assert_eq!(back["imageUrl"], "/i.jpg");
    }

    #[test]
    fn test_published_on() {
        assert_eq!(
            article("2024-03-12").published_on().unwrap(),
            NaiveDate::from_ymd_opt(2024, 3, 12).unwrap()
        );
        assert!(matches!(
            article("12/03/2024").published_on(),
            Err(ContentError::InvalidDate { id: 9, .. })
        ));
    }

    #[test]
    fn test_has_tag_ignores_case() {
        assert!(article("2024-01-01").has_tag("self-care"));
        assert!(!article("2024-01-01").has_tag("sleep"));
    }

    #[test]
    fn test_has_tag_folds_non_ascii() {
        let mut a = article("2024-01-01");
        a.tags = vec!["Émotions".to_string()];
        assert!(a.has_tag("émotions"));
        assert!(a.has_tag(&tag_key("ÉMOTIONS")));
    }
}
