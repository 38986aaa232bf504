//! Insemination attempt records and their lifecycle.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::foundation::{AnimalId, BullId, CowId, InseminationId};

/// Lifecycle state of a single insemination attempt.
///
/// Attempts start `Pending`. Only one pending attempt may be live per cow;
/// recording a new attempt demotes the previous pending one to
/// `NeedsRepeat`. Only a `Confirmed` attempt updates the cow's pregnancy
/// fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InseminationStatus {
    Pending,
    Confirmed,
    Failed,
    NeedsRepeat,
}

impl InseminationStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            InseminationStatus::Pending => "pending",
            InseminationStatus::Confirmed => "confirmed",
            InseminationStatus::Failed => "failed",
            InseminationStatus::NeedsRepeat => "needs_repeat",
        }
    }
}

impl fmt::Display for InseminationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A recorded insemination attempt.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Insemination {
    pub id: InseminationId,
    pub cow_id: CowId,
    pub animal_id: AnimalId,
    pub insemination_date: NaiveDate,
    pub status: InseminationStatus,
    /// Sire used for this attempt, where known.
    pub bull_id: Option<BullId>,
    pub notes: Option<String>,
    /// Performer, as an opaque identifier supplied by the caller.
    pub performed_by: Option<String>,
    /// Creation timestamp, used for most-recent tie-breaks.
    pub created_at: DateTime<Utc>,
}

impl Insemination {
    /// The note text a demoted pending attempt receives: appended to the
    /// existing notes, or used verbatim when there are none.
    pub fn replaced_note(existing: Option<&str>) -> String {
        match existing {
            Some(notes) if !notes.is_empty() => format!("{} (Replaced by new insemination)", notes),
            _ => "Replaced by new insemination".to_string(),
        }
    }
}
