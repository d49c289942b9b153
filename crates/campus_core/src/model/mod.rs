//! Catalog domain model for resources and articles.
//!
//! # Responsibility
//! - Define the two read-only record shapes loaded from site documents.
//! - Normalize loosely typed JSON (numeric/string ids, date strings) into one
//!   canonical representation at load time.
//!
//! # Invariants
//! - Every record is identified by a canonical `ItemId`.
//! - Records are immutable after load; views only borrow them.
//! - Dates are stored as `NaiveDate`, never as raw strings.

mod de;
pub mod article;
pub mod id;
pub mod item;
pub mod resource;

pub use de::parse_calendar_date;
