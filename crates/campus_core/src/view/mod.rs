//! List-page state: immutable view state, commands and page lifecycle.
//!
//! # Responsibility
//! - Model what a list page shows as data (`ViewState`), changed only by
//!   discrete `Command`s through one reducer.
//! - Run filter, sort and pager for a view state (`ListEngine`).
//! - Track the load lifecycle of a page (`PageState`).
//!
//! # Invariants
//! - Any criteria or sort change resets the page to 1.
//! - A page change keeps criteria and sort untouched.
//! - Transitions return new values; nothing is mutated in place.

mod list;
mod page;
mod state;

pub use list::{ListEngine, ListKind, ListResult, ListStatus};
pub use page::PageState;
pub use state::{Command, ViewState};
