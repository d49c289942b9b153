//! Catalog loading and the immutable in-memory collection.
//!
//! # Responsibility
//! - Fetch one document through a `CatalogSource` and parse it wholesale.
//! - Own the canonical item collection for the lifetime of one page view.
//!
//! # Invariants
//! - Loading is all-or-nothing: any parse or validation failure yields
//!   `LoadError` and no catalog.
//! - Item ids are unique after normalization.
//! - The catalog is never mutated after construction.

mod cell;
mod source;

pub use cell::CatalogCell;
pub use source::{CatalogSource, FileSource, StaticSource};

use crate::model::article::Article;
use crate::model::id::ItemId;
use crate::model::item::CatalogItem;
use crate::model::resource::Resource;
use log::{error, info};
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};
use std::collections::HashMap;
use std::path::PathBuf;

pub type LoadResult<T> = Result<T, LoadError>;

/// Failure to produce a catalog. Distinct from an empty catalog.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("failed to read catalog `{path}`: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid catalog document: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("catalog document has no `{0}` array")]
    MissingCollection(&'static str),
    #[error("duplicate item id `{0}` in catalog")]
    DuplicateId(ItemId),
}

/// Immutable, ordered collection of resources or articles.
#[derive(Debug, Clone, PartialEq)]
pub struct Catalog<T> {
    items: Vec<T>,
    positions: HashMap<ItemId, usize>,
}

impl<T: CatalogItem> Catalog<T> {
    /// Builds a catalog from already-parsed items, keeping their order.
    ///
    /// # Errors
    /// - Returns `LoadError::DuplicateId` when two items share an id.
    pub fn from_items(items: Vec<T>) -> LoadResult<Self> {
        let mut positions = HashMap::with_capacity(items.len());
        for (index, item) in items.iter().enumerate() {
            if positions.insert(item.id().clone(), index).is_some() {
                return Err(LoadError::DuplicateId(item.id().clone()));
            }
        }
        Ok(Self { items, positions })
    }

    /// Looks up one item by canonical id.
    pub fn get(&self, id: &ItemId) -> Option<&T> {
        self.positions.get(id).map(|&index| &self.items[index])
    }
}

impl<T: CatalogItem + DeserializeOwned> Catalog<T> {
    /// Parses a document such as `{ "articles": [...] }`.
    ///
    /// Pure: performs no I/O, so engines can be tested on fixed text.
    pub fn parse(text: &str) -> LoadResult<Self> {
        let mut root: Map<String, Value> = serde_json::from_str(text)?;
        let collection = root
            .remove(T::COLLECTION)
            .ok_or(LoadError::MissingCollection(T::COLLECTION))?;
        let items: Vec<T> = serde_json::from_value(collection)?;
        Self::from_items(items)
    }
}

impl<T> Catalog<T> {
    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl<'a, T> IntoIterator for &'a Catalog<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

/// Parses a `{ "resources": [...] }` document.
pub fn parse_resources(text: &str) -> LoadResult<Catalog<Resource>> {
    Catalog::parse(text)
}

/// Parses a `{ "articles": [...] }` document.
pub fn parse_articles(text: &str) -> LoadResult<Catalog<Article>> {
    Catalog::parse(text)
}

/// Fetches and parses one catalog. Never retries.
///
/// Emits one `event=catalog_load` line with status and item count.
pub fn load<T, S>(source: &S) -> LoadResult<Catalog<T>>
where
    T: CatalogItem + DeserializeOwned,
    S: CatalogSource + ?Sized,
{
    let result = source.fetch().and_then(|text| Catalog::<T>::parse(&text));
    match &result {
        Ok(catalog) => info!(
            "event=catalog_load module=catalog status=ok collection={} source={} items={}",
            T::COLLECTION,
            source.describe(),
            catalog.len()
        ),
        Err(err) => error!(
            "event=catalog_load module=catalog status=error collection={} source={} error={}",
            T::COLLECTION,
            source.describe(),
            err
        ),
    }
    result
}
