//! Breeding notifications.
//!
//! Notifications are ephemeral derived values: the generator recomputes the
//! full list on every run, and the notification store deduplicates against
//! previously delivered ones by `(kind, tag_number)`.

mod generator;
mod notification;

pub use generator::{calving_due_notifications, insemination_due_notification, sort_notifications};
pub use notification::{Notification, NotificationDetail, NotificationKind, Priority};
