//! Academic resource record.
//!
//! # Invariants
//! - `date`, when present, is a valid calendar date.
//! - Empty link strings are treated as absent links.

use super::de;
use super::id::ItemId;
use super::item::CatalogItem;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One lecture-day entry from the resource document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Resource {
    pub id: ItemId,
    /// Display label for the teaching day, for example `Day 3`.
    #[serde(default, deserialize_with = "de::scalar_string")]
    pub day: String,
    #[serde(deserialize_with = "de::scalar_string")]
    pub year: String,
    #[serde(deserialize_with = "de::scalar_string")]
    pub semester: String,
    pub subject_code: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub full_description: String,
    #[serde(default)]
    pub lecture_notes_link: Option<String>,
    #[serde(default)]
    pub simple_note_link: Option<String>,
    #[serde(default)]
    pub quiz_link: Option<String>,
    #[serde(default)]
    pub question_link: Option<String>,
    #[serde(default)]
    pub activity_link: Option<String>,
    #[serde(default, deserialize_with = "de::optional_date")]
    pub date: Option<NaiveDate>,
}

/// Kind of study material a resource links to.
///
/// Declaration order is the display order of action buttons.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResourceKind {
    Lecture,
    Simple,
    Quiz,
    Question,
    Activity,
}

impl ResourceKind {
    pub const ALL: [ResourceKind; 5] = [
        ResourceKind::Lecture,
        ResourceKind::Simple,
        ResourceKind::Quiz,
        ResourceKind::Question,
        ResourceKind::Activity,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Lecture => "lecture",
            Self::Simple => "simple",
            Self::Quiz => "quiz",
            Self::Question => "question",
            Self::Activity => "activity",
        }
    }

    /// Button label shown on the detail page.
    pub fn label(self) -> &'static str {
        match self {
            Self::Lecture => "Lecture Notes",
            Self::Simple => "Simple Notes",
            Self::Quiz => "Take Quiz",
            Self::Question => "Practice Questions",
            Self::Activity => "Activities",
        }
    }
}

/// One available action link of a resource.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ActionLink<'a> {
    pub kind: ResourceKind,
    pub url: &'a str,
}

impl Resource {
    fn link(&self, kind: ResourceKind) -> Option<&str> {
        let value = match kind {
            ResourceKind::Lecture => self.lecture_notes_link.as_deref(),
            ResourceKind::Simple => self.simple_note_link.as_deref(),
            ResourceKind::Quiz => self.quiz_link.as_deref(),
            ResourceKind::Question => self.question_link.as_deref(),
            ResourceKind::Activity => self.activity_link.as_deref(),
        };
        value.map(str::trim).filter(|url| !url.is_empty())
    }

    /// Returns present action links in display order.
    pub fn action_links(&self) -> Vec<ActionLink<'_>> {
        ResourceKind::ALL
            .into_iter()
            .filter_map(|kind| self.link(kind).map(|url| ActionLink { kind, url }))
            .collect()
    }

    /// Returns kinds of material this resource offers.
    pub fn kinds(&self) -> Vec<ResourceKind> {
        ResourceKind::ALL
            .into_iter()
            .filter(|kind| self.link(*kind).is_some())
            .collect()
    }
}

impl CatalogItem for Resource {
    const COLLECTION: &'static str = "resources";

    fn id(&self) -> &ItemId {
        &self.id
    }

    fn title(&self) -> &str {
        &self.title
    }

    fn date(&self) -> Option<NaiveDate> {
        self.date
    }

    fn search_fields(&self) -> Vec<&str> {
        vec![self.title.as_str(), self.description.as_str()]
    }

    fn subject_code(&self) -> Option<&str> {
        Some(&self.subject_code)
    }

    fn semester(&self) -> Option<&str> {
        Some(&self.semester)
    }

    fn year(&self) -> Option<&str> {
        Some(&self.year)
    }
}

#[cfg(test)]
mod tests {
    use super::{Resource, ResourceKind};

    #[test]
    fn action_links_skip_missing_and_blank_urls() {
        let resource: Resource = serde_json::from_str(
            r#"{
                "id": 3, "year": 2024, "semester": "1", "subjectCode": "CS101",
                "title": "Intro", "quizLink": "https://q", "lectureNotesLink": "  ",
                "activityLink": "https://a"
            }"#,
        )
        .unwrap();

        let kinds: Vec<ResourceKind> = resource.action_links().iter().map(|l| l.kind).collect();
        assert_eq!(kinds, vec![ResourceKind::Quiz, ResourceKind::Activity]);
        assert_eq!(resource.kinds(), kinds);
        assert_eq!(resource.year, "2024");
        assert!(resource.date.is_none());
    }
}
