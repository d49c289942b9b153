//! Read-only projections shown alongside list and detail pages.
//!
//! # Responsibility
//! - Derive summary numbers, dropdown options, featured/related picks,
//!   reading time, heading outlines and calendar grids from a catalog.
//!
//! # Invariants
//! - Projections are pure functions of their inputs.

pub mod article;
pub mod calendar;
pub mod stats;
