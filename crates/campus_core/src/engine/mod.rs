//! List engine: filter, sort and paginate catalog views.
//!
//! # Responsibility
//! - Turn a catalog plus criteria into an ordered view of item references.
//! - Slice views into pages with button metadata for pagination controls.
//!
//! # Invariants
//! - Every operation here is total: none returns an error.
//! - Views borrow catalog items; the catalog is never mutated or reordered.
//! - Sorting is stable so pagination is deterministic.

pub mod criteria;
pub mod filter;
pub mod pager;
pub mod sort;
