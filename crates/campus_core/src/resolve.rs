//! Detail lookups for article/resource pages and calendar days.
//!
//! # Invariants
//! - Not-found is an explicit outcome, never a panic.
//! - Numeric and string forms of an id resolve to the same item.

use crate::catalog::Catalog;
use crate::index::GroupIndex;
use crate::model::id::ItemId;
use crate::model::item::CatalogItem;
use log::debug;

pub type ResolveResult<T> = Result<T, ResolveError>;

/// Why a detail lookup produced no item.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ResolveError {
    /// Request carried no usable id.
    #[error("no item id provided")]
    MissingId,
    /// Request was valid but nothing matches.
    #[error("item not found: {0}")]
    NotFound(ItemId),
}

/// Resolves one item by id.
pub fn resolve_by_id<T: CatalogItem>(
    catalog: &Catalog<T>,
    id: impl Into<ItemId>,
) -> ResolveResult<&T> {
    let id = id.into();
    if id.is_blank() {
        return Err(ResolveError::MissingId);
    }
    catalog.get(&id).ok_or_else(|| {
        debug!(
            "event=resolve_by_id module=resolve status=not_found collection={} id={}",
            T::COLLECTION,
            id
        );
        ResolveError::NotFound(id)
    })
}

/// Resolves the decoded `id` query parameter of a detail page.
pub fn resolve_query_param<'c, T: CatalogItem>(
    catalog: &'c Catalog<T>,
    param: Option<&str>,
) -> ResolveResult<&'c T> {
    match param {
        Some(raw) => resolve_by_id(catalog, raw),
        None => Err(ResolveError::MissingId),
    }
}

/// Items scheduled on the calendar day `key`; empty when none.
pub fn resolve_by_date_key<'i, 'a, T>(
    index: &'i GroupIndex<'a, String, T>,
    key: &str,
) -> &'i [&'a T] {
    index.get(key)
}
