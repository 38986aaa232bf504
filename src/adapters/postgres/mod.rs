//! PostgreSQL adapters - Database implementations of the persistence ports.
//!
//! - `PostgresHerdReader` - read-side queries over the herd
//! - `PostgresHerdRepository` - transactional commits of recording plans
//! - `PostgresVitalsRepository` - cattle vitals persistence
//! - `PostgresNotificationStore` - durable, deduplicated notifications

mod herd_reader;
mod herd_repository;
mod notification_store;
mod rows;
mod vitals_repository;

pub use herd_reader::PostgresHerdReader;
pub use herd_repository::PostgresHerdRepository;
pub use notification_store::PostgresNotificationStore;
pub use vitals_repository::PostgresVitalsRepository;

use crate::domain::foundation::{DomainError, ErrorCode};

pub(crate) fn db_error(context: &str, e: impl std::fmt::Display) -> DomainError {
    DomainError::new(ErrorCode::DatabaseError, format!("{}: {}", context, e))
}
