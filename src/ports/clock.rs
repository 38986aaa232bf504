//! Clock port.

use chrono::NaiveDate;

/// Supplies "now" as a calendar date.
///
/// All breeding-cycle arithmetic goes through this port so tests can pin
/// the date. Time of day never participates in the calculations.
pub trait Clock: Send + Sync {
    fn today(&self) -> NaiveDate;
}
