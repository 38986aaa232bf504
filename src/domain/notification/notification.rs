//! Notification value types and ordering.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Day count used for ordering when a notification carries no relevant
/// day field, pushing it to the end of its priority band.
const MISSING_DAYS_RANK: i64 = 999;

/// Notification family. Together with the tag number this forms the
/// deduplication key in the notification store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NotificationKind {
    CalvingDueSoon,
    InseminationDue,
}

impl NotificationKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            NotificationKind::CalvingDueSoon => "calving_due_soon",
            NotificationKind::InseminationDue => "insemination_due",
        }
    }
}

impl fmt::Display for NotificationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Notification priority. Sorted ascending by rank, high first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    High,
    Medium,
    Low,
}

impl Priority {
    pub fn rank(&self) -> u8 {
        match self {
            Priority::High => 1,
            Priority::Medium => 2,
            Priority::Low => 3,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Priority::High => "high",
            Priority::Medium => "medium",
            Priority::Low => "low",
        }
    }
}

/// Numeric payload, per notification family.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "detail", rename_all = "snake_case")]
pub enum NotificationDetail {
    CalvingDue {
        days_remaining: i64,
        expected_calving_date: Option<NaiveDate>,
    },
    InseminationWindow {
        days_since_calving: i64,
        /// Clamped at 0 for display.
        days_until_ideal: i64,
        is_overdue: bool,
        is_in_window: bool,
        is_approaching: bool,
        last_calving_date: NaiveDate,
    },
    InseminationRetry {
        days_since_calving: i64,
        days_since_failed_insemination: i64,
        failed_insemination_date: NaiveDate,
    },
}

/// One derived notification.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    pub kind: NotificationKind,
    pub priority: Priority,
    pub message: String,
    pub tag_number: String,
    pub name: Option<String>,
    pub detail: NotificationDetail,
}

impl Notification {
    /// Deduplication key used by the notification store.
    pub fn dedup_key(&self) -> String {
        format!("{}-{}", self.kind, self.tag_number)
    }

    /// Day count relevant for intra-priority ordering.
    pub fn sort_days(&self) -> i64 {
        match &self.detail {
            NotificationDetail::CalvingDue { days_remaining, .. } => *days_remaining,
            NotificationDetail::InseminationWindow { days_until_ideal, .. } => *days_until_ideal,
            NotificationDetail::InseminationRetry { .. } => MISSING_DAYS_RANK,
        }
    }
}
