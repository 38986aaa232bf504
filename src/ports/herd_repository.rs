//! Herd repository port (write side).
//!
//! Each method commits one recording plan atomically. Implementations
//! must apply every write in the plan inside a single transaction, so a
//! partially applied operation is never observable.

use async_trait::async_trait;

use crate::domain::cattle::{CalvingPlan, InseminationPlan, StatusUpdatePlan};
use crate::domain::foundation::DomainError;

/// Write port over the herd.
#[async_trait]
pub trait HerdRepository: Send + Sync {
    /// Persist a new insemination attempt, demoting the superseded
    /// pending attempt when the plan carries one.
    async fn commit_insemination(&self, plan: &InseminationPlan) -> Result<(), DomainError>;

    /// Apply an insemination status update, propagating pregnancy fields
    /// to the cow when the plan carries a confirmation.
    async fn commit_status_update(&self, plan: &StatusUpdatePlan) -> Result<(), DomainError>;

    /// Close a pregnancy cycle: update the cow's calving fields, write
    /// the calving log, create calves, and apply the heifer promotion.
    async fn commit_calving(&self, plan: &CalvingPlan) -> Result<(), DomainError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn herd_repository_is_object_safe() {
        fn _accepts_dyn(_repository: &dyn HerdRepository) {}
    }
}
