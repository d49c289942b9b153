//! Core listing logic for the Campus Helper site.
//! This crate is the single source of truth for catalog and list-view
//! invariants; renderers only consume its output.

pub mod catalog;
pub mod engine;
pub mod index;
pub mod logging;
pub mod model;
pub mod projection;
pub mod resolve;
pub mod view;

pub use catalog::{
    load, parse_articles, parse_resources, Catalog, CatalogCell, CatalogSource, FileSource,
    LoadError, LoadResult, StaticSource,
};
pub use engine::criteria::{Criteria, FilterField};
pub use engine::filter::{filter, matches};
pub use engine::pager::{normalize_page_size, paginate, Page, PageLink, PageMeta};
pub use engine::sort::{sort, SortKey};
pub use index::{
    count_by, date_index, date_key, group_by, group_by_many, tag_cloud, tag_counts, tag_index,
    Counts, GroupIndex, TagCloudEntry,
};
pub use logging::{default_log_level, init_logging, logging_status, LogTarget, LoggingError};
pub use model::article::Article;
pub use model::id::ItemId;
pub use model::item::CatalogItem;
pub use model::resource::{ActionLink, Resource, ResourceKind};
pub use resolve::{
    resolve_by_date_key, resolve_by_id, resolve_query_param, ResolveError, ResolveResult,
};
pub use view::{Command, ListEngine, ListKind, ListResult, ListStatus, PageState, ViewState};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::core_version;

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
