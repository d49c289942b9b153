//! Shared accessor contract used by the list engine.
//!
//! # Responsibility
//! - Let one filter/sort/group implementation serve both record shapes.
//!
//! # Invariants
//! - Accessors are cheap borrows; no accessor allocates item content.
//! - A field the shape does not carry reports `None`, so a criterion on that
//!   field never matches.

use super::id::ItemId;
use chrono::NaiveDate;

/// Read-only view of one catalog record.
pub trait CatalogItem {
    /// Top-level array key in the source document.
    const COLLECTION: &'static str;

    fn id(&self) -> &ItemId;
    fn title(&self) -> &str;
    /// Calendar date used for sorting and calendar grouping.
    fn date(&self) -> Option<NaiveDate>;
    /// Free-text fields matched by search, tags excluded.
    fn search_fields(&self) -> Vec<&str>;

    fn tags(&self) -> &[String] {
        &[]
    }

    fn category(&self) -> Option<&str> {
        None
    }

    fn subject_code(&self) -> Option<&str> {
        None
    }

    fn semester(&self) -> Option<&str> {
        None
    }

    fn year(&self) -> Option<&str> {
        None
    }
}
