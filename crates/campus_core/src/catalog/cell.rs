//! Load-once holder for long-lived callers.
//!
//! # Invariants
//! - At most one load runs at a time per cell; concurrent callers wait for it.
//! - A successful load is kept and shared; later triggers do not refetch.
//! - A failed load stores nothing, so a later trigger may run again.

use super::{load, Catalog, CatalogSource, LoadResult};
use crate::model::item::CatalogItem;
use once_cell::sync::OnceCell;
use serde::de::DeserializeOwned;

pub struct CatalogCell<T> {
    cell: OnceCell<Catalog<T>>,
}

impl<T> CatalogCell<T> {
    pub fn new() -> Self {
        Self {
            cell: OnceCell::new(),
        }
    }

    /// Returns the loaded catalog, if any load has succeeded.
    pub fn get(&self) -> Option<&Catalog<T>> {
        self.cell.get()
    }

    pub fn is_loaded(&self) -> bool {
        self.cell.get().is_some()
    }
}

impl<T: CatalogItem + DeserializeOwned> CatalogCell<T> {
    /// Loads through `source` unless a catalog is already held.
    pub fn get_or_load<S>(&self, source: &S) -> LoadResult<&Catalog<T>>
    where
        S: CatalogSource + ?Sized,
    {
        self.cell.get_or_try_init(|| load(source))
    }
}

impl<T> Default for CatalogCell<T> {
    fn default() -> Self {
        Self::new()
    }
}
