//! Blog article record.
//!
//! # Invariants
//! - `category` is always present.
//! - `tags` keep document order for display; matching treats them as a set.

use super::de;
use super::id::ItemId;
use super::item::CatalogItem;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One entry from the article document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Article {
    pub id: ItemId,
    pub title: String,
    #[serde(default)]
    pub summary: String,
    /// Rich text body as HTML.
    #[serde(default)]
    pub content: String,
    pub category: String,
    #[serde(default, deserialize_with = "de::tags")]
    pub tags: Vec<String>,
    #[serde(default)]
    pub author: String,
    #[serde(default)]
    pub author_avatar: String,
    #[serde(default)]
    pub author_bio: String,
    #[serde(deserialize_with = "de::date")]
    pub date: NaiveDate,
    #[serde(rename = "imageURL", default)]
    pub image_url: String,
}

impl CatalogItem for Article {
    const COLLECTION: &'static str = "articles";

    fn id(&self) -> &ItemId {
        &self.id
    }

    fn title(&self) -> &str {
        &self.title
    }

    fn date(&self) -> Option<NaiveDate> {
        Some(self.date)
    }

    fn search_fields(&self) -> Vec<&str> {
        vec![
            self.title.as_str(),
            self.summary.as_str(),
            self.author.as_str(),
        ]
    }

    fn tags(&self) -> &[String] {
        &self.tags
    }

    fn category(&self) -> Option<&str> {
        Some(&self.category)
    }
}

#[cfg(test)]
mod tests {
    use super::Article;

    #[test]
    fn null_tags_become_empty_and_image_url_keeps_document_name() {
        let article: Article = serde_json::from_str(
            r#"{
                "id": "12", "title": "Graphs", "category": "Algorithms",
                "tags": null, "date": "2024-05-01", "imageURL": "img/graphs.png"
            }"#,
        )
        .unwrap();

        assert!(article.tags.is_empty());
        assert_eq!(article.image_url, "img/graphs.png");
        assert_eq!(article.id.as_str(), "12");
    }

    #[test]
    fn invalid_date_is_rejected() {
        let result = serde_json::from_str::<Article>(
            r#"{"id": 1, "title": "x", "category": "c", "date": "yesterday"}"#,
        );
        assert!(result.is_err());
    }
}
