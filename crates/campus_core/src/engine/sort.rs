//! Sort policy for list views.
//!
//! # Invariants
//! - Sorting is stable: equal keys keep their relative input order.
//! - Undated items go after dated ones for both date orders.
//! - Titles use Unicode collation (CLDR root), so accents and case sort
//!   next to their base letters.
//! - Unknown sort names fall back to `Newest`.

use crate::model::item::CatalogItem;
use chrono::NaiveDate;
use feruca::Collator;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortKey {
    #[default]
    Newest,
    Oldest,
    Title,
}

impl SortKey {
    /// Parses a sort selector value. Never fails.
    pub fn parse(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "oldest" => Self::Oldest,
            "title" => Self::Title,
            _ => Self::Newest,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Newest => "newest",
            Self::Oldest => "oldest",
            Self::Title => "title",
        }
    }
}

impl From<&str> for SortKey {
    fn from(value: &str) -> Self {
        Self::parse(value)
    }
}

/// Orders a view by `key` and returns it.
pub fn sort<'a, T: CatalogItem>(mut view: Vec<&'a T>, key: SortKey) -> Vec<&'a T> {
    match key {
        SortKey::Newest => view.sort_by(|a, b| compare_dates(a.date(), b.date(), true)),
        SortKey::Oldest => view.sort_by(|a, b| compare_dates(a.date(), b.date(), false)),
        SortKey::Title => {
            let mut collator = Collator::default();
            view.sort_by(|a, b| collator.collate(a.title(), b.title()));
        }
    }
    view
}

fn compare_dates(a: Option<NaiveDate>, b: Option<NaiveDate>, descending: bool) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) if descending => b.cmp(&a),
        (Some(a), Some(b)) => a.cmp(&b),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}
