use super::state::ViewState;
use crate::catalog::Catalog;
use crate::engine::filter::filter;
use crate::engine::pager::{normalize_page_size, paginate, PageMeta};
use crate::engine::sort::sort;
use crate::model::item::CatalogItem;
use serde::Serialize;

/// The site's list pages and their fixed page sizes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ListKind {
    Resources,
    Blog,
    Tags,
}

impl ListKind {
    pub fn page_size(self) -> u32 {
        match self {
            Self::Resources | Self::Blog => 12,
            Self::Tags => 9,
        }
    }
}

/// Whether a list view has anything to show.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ListStatus {
    Results,
    /// Valid criteria matched nothing.
    NoResults,
}

/// Everything a renderer needs for one list page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ListResult<'c, T> {
    pub items: Vec<&'c T>,
    pub meta: PageMeta,
    pub total_in_catalog: usize,
    pub total_matches: usize,
    pub status: ListStatus,
}

/// Runs filter, sort and pager over one catalog.
pub struct ListEngine<'c, T> {
    catalog: &'c Catalog<T>,
    page_size: u32,
}

impl<'c, T: CatalogItem> ListEngine<'c, T> {
    pub fn new(catalog: &'c Catalog<T>, page_size: Option<u32>) -> Self {
        Self {
            catalog,
            page_size: normalize_page_size(page_size),
        }
    }

    pub fn for_kind(catalog: &'c Catalog<T>, kind: ListKind) -> Self {
        Self::new(catalog, Some(kind.page_size()))
    }

    pub fn page_size(&self) -> u32 {
        self.page_size
    }

    /// Filtered and, when requested, sorted view of the whole catalog.
    pub fn view(&self, state: &ViewState) -> Vec<&'c T> {
        let filtered = filter(self.catalog, &state.criteria);
        match state.sort {
            Some(key) => sort(filtered, key),
            None => filtered,
        }
    }

    /// Computes the page `state` points at.
    pub fn render(&self, state: &ViewState) -> ListResult<'c, T> {
        let view = self.view(state);
        let page = paginate(&view, self.page_size, state.page);
        let status = if view.is_empty() {
            ListStatus::NoResults
        } else {
            ListStatus::Results
        };

        ListResult {
            items: page.items.to_vec(),
            meta: page.meta,
            total_in_catalog: self.catalog.len(),
            total_matches: view.len(),
            status,
        }
    }
}
