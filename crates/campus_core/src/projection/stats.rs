use crate::catalog::Catalog;
use crate::index::date_index;
use crate::model::item::CatalogItem;
use serde::Serialize;
use std::collections::BTreeSet;

/// Header counters of the list pages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CatalogStats {
    pub total_items: usize,
    pub distinct_subjects: usize,
    pub distinct_categories: usize,
    /// Calendar days with at least one dated item.
    pub days_with_items: usize,
}

/// Distinct values offered by filter dropdowns, sorted ascending.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FilterOptions {
    pub years: Vec<String>,
    pub semesters: Vec<String>,
    pub subject_codes: Vec<String>,
    pub categories: Vec<String>,
}

pub fn catalog_stats<T: CatalogItem>(catalog: &Catalog<T>) -> CatalogStats {
    let options = filter_options(catalog);
    CatalogStats {
        total_items: catalog.len(),
        distinct_subjects: options.subject_codes.len(),
        distinct_categories: options.categories.len(),
        days_with_items: date_index(catalog).len(),
    }
}

pub fn filter_options<T: CatalogItem>(catalog: &Catalog<T>) -> FilterOptions {
    let mut years = BTreeSet::new();
    let mut semesters = BTreeSet::new();
    let mut subject_codes = BTreeSet::new();
    let mut categories = BTreeSet::new();

    for item in catalog {
        years.extend(item.year());
        semesters.extend(item.semester());
        subject_codes.extend(item.subject_code());
        categories.extend(item.category());
    }

    FilterOptions {
        years: owned(years),
        semesters: owned(semesters),
        subject_codes: owned(subject_codes),
        categories: owned(categories),
    }
}

fn owned(values: BTreeSet<&str>) -> Vec<String> {
    values
        .into_iter()
        .filter(|value| !value.trim().is_empty())
        .map(str::to_string)
        .collect()
}
