//! Filter criteria and their normalization.
//!
//! # Invariants
//! - Blank values mean "no constraint".
//! - The `all` sentinel (any case) means "no constraint" only for dropdown
//!   fields; tag and search text take it literally.
//! - Normalized values are trimmed; case folding happens at match time.

use serde::{Deserialize, Serialize};

/// Select value the site uses for "no constraint".
pub const ALL_SENTINEL: &str = "all";

/// Named field of [`Criteria`], used by view commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FilterField {
    Category,
    SubjectCode,
    Semester,
    Year,
    Tag,
    SearchText,
}

impl FilterField {
    /// Whether the field is fed by a dropdown that offers `all`.
    pub fn is_select(self) -> bool {
        matches!(
            self,
            Self::Category | Self::SubjectCode | Self::Semester | Self::Year
        )
    }
}

/// Conjunctive filter constraints. `None` imposes no constraint.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Criteria {
    pub category: Option<String>,
    pub subject_code: Option<String>,
    pub semester: Option<String>,
    pub year: Option<String>,
    /// Exact tag membership, case-insensitive.
    pub tag: Option<String>,
    /// Case-insensitive substring over title, summary, author and tags.
    pub search_text: Option<String>,
}

impl Criteria {
    /// Returns a copy with every field normalized.
    pub fn normalized(&self) -> Self {
        Self {
            category: normalize_criterion(self.category.as_deref()),
            subject_code: normalize_criterion(self.subject_code.as_deref()),
            semester: normalize_criterion(self.semester.as_deref()),
            year: normalize_criterion(self.year.as_deref()),
            tag: normalize_text(self.tag.as_deref()),
            search_text: normalize_text(self.search_text.as_deref()),
        }
    }

    /// Returns a copy with `field` replaced by the normalized `value`.
    pub fn with(mut self, field: FilterField, value: Option<&str>) -> Self {
        *self.slot_mut(field) = if field.is_select() {
            normalize_criterion(value)
        } else {
            normalize_text(value)
        };
        self
    }

    pub fn get(&self, field: FilterField) -> Option<&str> {
        match field {
            FilterField::Category => self.category.as_deref(),
            FilterField::SubjectCode => self.subject_code.as_deref(),
            FilterField::Semester => self.semester.as_deref(),
            FilterField::Year => self.year.as_deref(),
            FilterField::Tag => self.tag.as_deref(),
            FilterField::SearchText => self.search_text.as_deref(),
        }
    }

    /// Whether no field constrains the view after normalization.
    pub fn is_unconstrained(&self) -> bool {
        self.normalized() == Self::default()
    }

    fn slot_mut(&mut self, field: FilterField) -> &mut Option<String> {
        match field {
            FilterField::Category => &mut self.category,
            FilterField::SubjectCode => &mut self.subject_code,
            FilterField::Semester => &mut self.semester,
            FilterField::Year => &mut self.year,
            FilterField::Tag => &mut self.tag,
            FilterField::SearchText => &mut self.search_text,
        }
    }
}

/// Normalizes one dropdown value; blank and `all` clear it.
pub fn normalize_criterion(value: Option<&str>) -> Option<String> {
    normalize_text(value).filter(|text| !text.eq_ignore_ascii_case(ALL_SENTINEL))
}

/// Normalizes free text or a tag; only blank clears it.
pub fn normalize_text(value: Option<&str>) -> Option<String> {
    let trimmed = value?.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::{normalize_criterion, normalize_text, Criteria, FilterField};

    #[test]
    fn blank_and_all_mean_unconstrained() {
        assert_eq!(normalize_criterion(Some("  ")), None);
        assert_eq!(normalize_criterion(Some("ALL")), None);
        assert_eq!(normalize_criterion(None), None);
        assert_eq!(normalize_criterion(Some(" CS101 ")), Some("CS101".to_string()));
    }

    #[test]
    fn tag_and_search_take_all_literally() {
        assert_eq!(normalize_text(Some(" All ")), Some("All".to_string()));
        let criteria = Criteria::default()
            .with(FilterField::Tag, Some("All"))
            .with(FilterField::SearchText, Some("all"))
            .with(FilterField::Category, Some("ALL"));
        assert_eq!(criteria.get(FilterField::Tag), Some("All"));
        assert_eq!(criteria.get(FilterField::SearchText), Some("all"));
        assert_eq!(criteria.get(FilterField::Category), None);
        assert_eq!(criteria.normalized(), criteria);
    }

    #[test]
    fn with_replaces_one_field() {
        let criteria = Criteria::default()
            .with(FilterField::Year, Some("2024"))
            .with(FilterField::Semester, Some("all"));
        assert_eq!(criteria.get(FilterField::Year), Some("2024"));
        assert_eq!(criteria.get(FilterField::Semester), None);
        assert!(!criteria.is_unconstrained());
    }
}
