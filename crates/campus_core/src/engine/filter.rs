//! Criteria evaluation over catalog items.

use super::criteria::Criteria;
use crate::model::item::CatalogItem;

/// Compiled form of [`Criteria`] with case folding done once.
struct Matcher {
    category: Option<String>,
    subject_code: Option<String>,
    semester: Option<String>,
    year: Option<String>,
    tag: Option<String>,
    search_text: Option<String>,
}

impl Matcher {
    fn new(criteria: &Criteria) -> Self {
        let normalized = criteria.normalized();
        Self {
            category: normalized.category,
            subject_code: normalized.subject_code,
            semester: normalized.semester,
            year: normalized.year,
            tag: normalized.tag.map(|value| value.to_lowercase()),
            search_text: normalized.search_text.map(|value| value.to_lowercase()),
        }
    }

    fn matches<T: CatalogItem>(&self, item: &T) -> bool {
        field_matches(self.category.as_deref(), item.category())
            && field_matches(self.subject_code.as_deref(), item.subject_code())
            && field_matches(self.semester.as_deref(), item.semester())
            && field_matches(self.year.as_deref(), item.year())
            && self.tag_matches(item)
            && self.search_matches(item)
    }

    fn tag_matches<T: CatalogItem>(&self, item: &T) -> bool {
        let Some(tag) = self.tag.as_deref() else {
            return true;
        };
        item.tags().iter().any(|value| value.to_lowercase() == tag)
    }

    fn search_matches<T: CatalogItem>(&self, item: &T) -> bool {
        let Some(term) = self.search_text.as_deref() else {
            return true;
        };
        item.search_fields()
            .into_iter()
            .chain(item.tags().iter().map(String::as_str))
            .any(|text| text.to_lowercase().contains(term))
    }
}

fn field_matches(wanted: Option<&str>, actual: Option<&str>) -> bool {
    match wanted {
        None => true,
        Some(value) => actual == Some(value),
    }
}

/// Whether one item satisfies every present criterion.
pub fn matches<T: CatalogItem>(item: &T, criteria: &Criteria) -> bool {
    Matcher::new(criteria).matches(item)
}

/// Returns the items satisfying `criteria`, in input order.
///
/// Accepts a catalog (`&Catalog<T>`) or an earlier view, so filtering an
/// already filtered view with the same criteria returns it unchanged.
pub fn filter<'a, T, I>(items: I, criteria: &Criteria) -> Vec<&'a T>
where
    T: CatalogItem + 'a,
    I: IntoIterator<Item = &'a T>,
{
    let matcher = Matcher::new(criteria);
    items
        .into_iter()
        .filter(|item| matcher.matches(*item))
        .collect()
}
