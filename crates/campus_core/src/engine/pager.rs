//! Fixed-size pagination with page-button metadata.
//!
//! # Responsibility
//! - Slice a view into 1-based pages.
//! - Describe the numbered window, ellipses and prev/next state for controls.
//!
//! # Invariants
//! - Out-of-range page numbers yield an empty slice, never a failure.
//! - Page slices over `1..=total_pages` partition the view exactly.
//! - The numbered window holds `min(MAX_VISIBLE_PAGES, total_pages)` entries.

use serde::Serialize;

pub const DEFAULT_PAGE_SIZE: u32 = 12;
pub const MAX_VISIBLE_PAGES: u32 = 5;

/// One entry in the pagination control row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PageLink {
    Page { number: u32, current: bool },
    Ellipsis,
}

/// Pagination metadata for one requested page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PageMeta {
    /// Requested page, as given (may be out of range).
    pub current_page: u32,
    /// Effective normalized page size.
    pub page_size: u32,
    pub total_items: usize,
    /// `ceil(total_items / page_size)`, 0 for an empty view.
    pub total_pages: u32,
    pub window: Vec<PageLink>,
    pub has_prev: bool,
    pub has_next: bool,
}

/// Items of one page plus its metadata.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Page<'v, T> {
    pub items: &'v [T],
    pub meta: PageMeta,
}

/// Normalizes a requested page size.
///
/// `None` and 0 use the default; any other size is taken as given.
pub fn normalize_page_size(page_size: Option<u32>) -> u32 {
    match page_size {
        None | Some(0) => DEFAULT_PAGE_SIZE,
        Some(value) => value,
    }
}

/// Number of pages needed for `total_items`.
pub fn total_pages(total_items: usize, page_size: u32) -> u32 {
    let size = normalize_page_size(Some(page_size)) as usize;
    let pages = total_items.div_ceil(size);
    u32::try_from(pages).unwrap_or(u32::MAX)
}

/// Returns page `page` (1-based) of `view` with control metadata.
pub fn paginate<T>(view: &[T], page_size: u32, page: u32) -> Page<'_, T> {
    let size = normalize_page_size(Some(page_size));
    let pages = total_pages(view.len(), size);

    let items = if page == 0 || page > pages {
        &view[..0]
    } else {
        let start = (page as usize - 1) * size as usize;
        let end = (start + size as usize).min(view.len());
        &view[start..end]
    };

    Page {
        items,
        meta: PageMeta {
            current_page: page,
            page_size: size,
            total_items: view.len(),
            total_pages: pages,
            window: page_window(page, pages),
            has_prev: page > 1,
            has_next: page < pages,
        },
    }
}

/// Builds the numbered control row around `current`.
///
/// The window is centered on `current` clamped into `[1, total_pages]`, then
/// shifted to stay full. Page 1 and the last page are always reachable, with
/// an ellipsis when the window leaves a gap.
pub fn page_window(current: u32, total_pages: u32) -> Vec<PageLink> {
    if total_pages == 0 {
        return Vec::new();
    }

    let anchor = current.clamp(1, total_pages);
    let span = MAX_VISIBLE_PAGES.min(total_pages);
    let mut start = anchor.saturating_sub(MAX_VISIBLE_PAGES / 2).max(1);
    if start + span - 1 > total_pages {
        start = total_pages - span + 1;
    }
    let end = start + span - 1;

    let link = |number: u32| PageLink::Page {
        number,
        current: number == current,
    };

    let mut links = Vec::with_capacity(span as usize + 4);
    if start > 1 {
        links.push(link(1));
        if start > 2 {
            links.push(PageLink::Ellipsis);
        }
    }
    links.extend((start..=end).map(link));
    if end < total_pages {
        if end < total_pages - 1 {
            links.push(PageLink::Ellipsis);
        }
        links.push(link(total_pages));
    }
    links
}

#[cfg(test)]
mod tests {
    use super::{normalize_page_size, page_window, paginate, PageLink};

    fn numbers(links: &[PageLink]) -> Vec<Option<u32>> {
        links
            .iter()
            .map(|link| match link {
                PageLink::Page { number, .. } => Some(*number),
                PageLink::Ellipsis => None,
            })
            .collect()
    }

    #[test]
    fn page_size_defaults_only_when_missing_or_zero() {
        assert_eq!(normalize_page_size(None), 12);
        assert_eq!(normalize_page_size(Some(0)), 12);
        assert_eq!(normalize_page_size(Some(9)), 9);
        assert_eq!(normalize_page_size(Some(5000)), 5000);
    }

    #[test]
    fn large_page_size_keeps_the_whole_view_on_one_page() {
        let view: Vec<u32> = (0..150).collect();
        let page = paginate(&view, 150, 1);
        assert_eq!(page.items.len(), 150);
        assert_eq!(page.meta.page_size, 150);
        assert_eq!(page.meta.total_pages, 1);
        assert!(!page.meta.has_next);
    }

    #[test]
    fn window_in_the_middle_shows_both_ellipses() {
        let links = page_window(5, 10);
        assert_eq!(
            numbers(&links),
            vec![Some(1), None, Some(3), Some(4), Some(5), Some(6), Some(7), None, Some(10)]
        );
        assert!(links.contains(&PageLink::Page {
            number: 5,
            current: true
        }));
    }

    #[test]
    fn window_at_the_edges_stays_full() {
        assert_eq!(
            numbers(&page_window(1, 10)),
            vec![Some(1), Some(2), Some(3), Some(4), Some(5), None, Some(10)]
        );
        assert_eq!(
            numbers(&page_window(10, 10)),
            vec![Some(1), None, Some(6), Some(7), Some(8), Some(9), Some(10)]
        );
    }

    #[test]
    fn adjacent_boundary_page_gets_no_ellipsis() {
        assert_eq!(
            numbers(&page_window(4, 7)),
            vec![Some(1), Some(2), Some(3), Some(4), Some(5), Some(6), Some(7)]
        );
    }

    #[test]
    fn few_pages_fit_without_extras() {
        assert_eq!(numbers(&page_window(3, 3)), vec![Some(1), Some(2), Some(3)]);
        assert!(page_window(1, 0).is_empty());
    }

    #[test]
    fn out_of_range_current_marks_nothing() {
        let links = page_window(9, 3);
        assert_eq!(numbers(&links), vec![Some(1), Some(2), Some(3)]);
        assert!(links
            .iter()
            .all(|link| !matches!(link, PageLink::Page { current: true, .. })));
    }
}
