//! Notification generation rules.
//!
//! Two families, farm-scoped: calving-due (from the upcoming-calvings
//! selection) and insemination-due (over every calved-and-not-pregnant
//! cow, unfiltered by the readiness alert band).

use chrono::NaiveDate;

use super::notification::{Notification, NotificationDetail, NotificationKind, Priority};
use crate::domain::cattle::{
    failed_retry_due, Animal, Cow, Insemination, UpcomingCalving, IDEAL_WINDOW_END,
    IDEAL_WINDOW_START,
};
use crate::domain::foundation::days_between;

/// Calving-due notifications: entries due within 15 days, high priority
/// inside 5 days.
pub fn calving_due_notifications(upcoming: &[UpcomingCalving]) -> Vec<Notification> {
    upcoming
        .iter()
        .filter(|entry| entry.days_remaining > 0 && entry.days_remaining <= 15)
        .map(|entry| Notification {
            kind: NotificationKind::CalvingDueSoon,
            priority: if entry.days_remaining <= 5 {
                Priority::High
            } else {
                Priority::Medium
            },
            message: format!(
                "{} is due to calve in {} days",
                entry.tag_number, entry.days_remaining
            ),
            tag_number: entry.tag_number.clone(),
            name: entry.name.clone(),
            detail: NotificationDetail::CalvingDue {
                days_remaining: entry.days_remaining,
                expected_calving_date: entry.expected_calving_date,
            },
        })
        .collect()
}

/// Insemination-due notification for one calved-and-not-pregnant cow, or
/// `None` when the cow sits outside every notification band.
///
/// The failed-retry condition is checked first and suppresses the normal
/// window check for that cow.
pub fn insemination_due_notification(
    cow: &Cow,
    animal: Option<&Animal>,
    latest_insemination: Option<&Insemination>,
    today: NaiveDate,
) -> Option<Notification> {
    let animal = animal?;
    let last_calving_date = cow.last_calving_date?;
    let days_since_calving = days_between(last_calving_date, today);

    if failed_retry_due(latest_insemination, today) {
        let failed = latest_insemination?;
        let days_since_failed = days_between(failed.insemination_date, today);
        return Some(Notification {
            kind: NotificationKind::InseminationDue,
            priority: Priority::High,
            message: format!(
                "{} is ready for insemination retry (21 days since failed insemination)",
                animal.tag_number()
            ),
            tag_number: animal.tag_number().to_string(),
            name: animal.name().map(String::from),
            detail: NotificationDetail::InseminationRetry {
                days_since_calving,
                days_since_failed_insemination: days_since_failed,
                failed_insemination_date: failed.insemination_date,
            },
        });
    }

    let is_overdue = days_since_calving > IDEAL_WINDOW_END;
    let is_in_window =
        days_since_calving >= IDEAL_WINDOW_START && days_since_calving <= IDEAL_WINDOW_END;
    let is_approaching =
        days_since_calving >= IDEAL_WINDOW_START - 5 && days_since_calving < IDEAL_WINDOW_START;

    if !is_overdue && !is_in_window && !is_approaching {
        return None;
    }

    let priority = if is_overdue || is_in_window {
        Priority::High
    } else {
        Priority::Medium
    };
    let message = if is_overdue {
        format!(
            "{} is {} days overdue for insemination",
            animal.tag_number(),
            days_since_calving - IDEAL_WINDOW_END
        )
    } else if is_in_window {
        format!(
            "{} is in ideal insemination window ({} days into window)",
            animal.tag_number(),
            days_since_calving - IDEAL_WINDOW_START
        )
    } else {
        format!(
            "{} is approaching insemination window ({} days until ideal start)",
            animal.tag_number(),
            IDEAL_WINDOW_START - days_since_calving
        )
    };

    Some(Notification {
        kind: NotificationKind::InseminationDue,
        priority,
        message,
        tag_number: animal.tag_number().to_string(),
        name: animal.name().map(String::from),
        detail: NotificationDetail::InseminationWindow {
            days_since_calving,
            days_until_ideal: (IDEAL_WINDOW_START - days_since_calving).max(0),
            is_overdue,
            is_in_window,
            is_approaching,
            last_calving_date,
        },
    })
}

/// Sorts notifications by priority rank ascending (high first), then by
/// the relevant day count.
pub fn sort_notifications(notifications: &mut [Notification]) {
    notifications.sort_by_key(|n| (n.priority.rank(), n.sort_days()));
}
