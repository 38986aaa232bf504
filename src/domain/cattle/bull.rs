//! Bull breeding record.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::BullId;

/// Breeding record owned by a bull animal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bull {
    pub id: BullId,
    pub semen_quality: Option<String>,
    pub aggression_level: Option<String>,
}

impl Bull {
    pub fn new(id: BullId) -> Self {
        Self {
            id,
            semen_quality: None,
            aggression_level: None,
        }
    }
}
