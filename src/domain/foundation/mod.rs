//! Foundation module - Shared domain primitives.
//!
//! Contains identifiers, calendar helpers, and error types that form
//! the vocabulary of the Herdbook domain.

mod calendar;
mod errors;
mod ids;

pub use calendar::{days_between, round_one_decimal, DateWindow};
pub use errors::{DomainError, ErrorCode, ValidationError};
pub use ids::{AnimalId, BullId, CalvingId, CowId, FarmId, InseminationId};
