//! Calendar arithmetic helpers.
//!
//! All breeding-cycle math works on calendar dates. Day differences are
//! whole-day differences between `NaiveDate`s, never elapsed-seconds
//! division, so a record written at 23:59 and read at 00:01 still counts
//! as one day apart.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Whole days from `from` to `to`. Negative when `to` is before `from`.
pub fn days_between(from: NaiveDate, to: NaiveDate) -> i64 {
    to.signed_duration_since(from).num_days()
}

/// Rounds to one decimal place, matching the precision the dashboard shows.
pub fn round_one_decimal(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Inclusive calendar date window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateWindow {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateWindow {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Self {
        Self { start, end }
    }

    /// Returns true if `date` falls inside the window, bounds included.
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn days_between_is_signed() {
        assert_eq!(days_between(date(2026, 1, 1), date(2026, 1, 11)), 10);
        assert_eq!(days_between(date(2026, 1, 11), date(2026, 1, 1)), -10);
        assert_eq!(days_between(date(2026, 1, 1), date(2026, 1, 1)), 0);
    }

    #[test]
    fn days_between_crosses_month_and_year_boundaries() {
        assert_eq!(days_between(date(2025, 12, 30), date(2026, 1, 2)), 3);
    }

    #[test]
    fn round_one_decimal_rounds_half_up() {
        assert_eq!(round_one_decimal(91.8727), 91.9);
        assert_eq!(round_one_decimal(0.05), 0.1);
        assert_eq!(round_one_decimal(100.0), 100.0);
    }

    #[test]
    fn window_bounds_are_inclusive() {
        let window = DateWindow::new(date(2026, 3, 1), date(2026, 3, 31));
        assert!(window.contains(date(2026, 3, 1)));
        assert!(window.contains(date(2026, 3, 31)));
        assert!(!window.contains(date(2026, 4, 1)));
    }
}
