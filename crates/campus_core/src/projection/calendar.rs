//! Calendar grids over the date index.
//!
//! # Invariants
//! - Month grids list every day of the month exactly once, in order.
//! - Weeks start on Sunday.

use crate::index::{date_key, GroupIndex};
use crate::model::resource::{Resource, ResourceKind};
use chrono::{Datelike, Days, NaiveDate};
use serde::Serialize;

/// One cell of the month grid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CalendarDay {
    pub date: NaiveDate,
    pub key: String,
    /// Number of items scheduled on this day.
    pub count: usize,
}

/// Every day of `month` (1-12) in `year` with its item count.
///
/// Returns `None` for an invalid month.
pub fn month_days<T>(
    year: i32,
    month: u32,
    index: &GroupIndex<'_, String, T>,
) -> Option<Vec<CalendarDay>> {
    let first = NaiveDate::from_ymd_opt(year, month, 1)?;
    let days = first
        .iter_days()
        .take_while(|date| date.month() == month)
        .map(|date| {
            let key = date_key(date);
            CalendarDay {
                date,
                count: index.get(key.as_str()).len(),
                key,
            }
        })
        .collect();
    Some(days)
}

/// The Sunday-start week containing `date`.
pub fn week_of(date: NaiveDate) -> Vec<NaiveDate> {
    let offset = u64::from(date.weekday().num_days_from_sunday());
    let start = date.checked_sub_days(Days::new(offset)).unwrap_or(date);
    start.iter_days().take(7).collect()
}

/// Kinds of material offered on the day `key`, without repeats.
pub fn kinds_for_date(index: &GroupIndex<'_, String, Resource>, key: &str) -> Vec<ResourceKind> {
    let mut kinds: Vec<ResourceKind> = Vec::new();
    for resource in index.get(key) {
        for kind in resource.kinds() {
            if !kinds.contains(&kind) {
                kinds.push(kind);
            }
        }
    }
    kinds
}

#[cfg(test)]
mod tests {
    use super::week_of;
    use chrono::{Datelike, NaiveDate, Weekday};

    #[test]
    fn week_starts_on_sunday() {
        // 2024-03-13 is a Wednesday.
        let week = week_of(NaiveDate::from_ymd_opt(2024, 3, 13).unwrap());
        assert_eq!(week.len(), 7);
        assert_eq!(week[0], NaiveDate::from_ymd_opt(2024, 3, 10).unwrap());
        assert_eq!(week[0].weekday(), Weekday::Sun);
        assert_eq!(week[6], NaiveDate::from_ymd_opt(2024, 3, 16).unwrap());
    }
}
