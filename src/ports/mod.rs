//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! - `HerdReader` - read side: cows, animals, inseminations, relationships
//! - `HerdRepository` - write side: atomic commits of recording plans
//! - `VitalsRepository` - cattle vitals persistence
//! - `NotificationStore` - durable, deduplicated notification delivery
//! - `Clock` - injectable "today" for all date arithmetic

mod clock;
mod herd_reader;
mod herd_repository;
mod notification_store;
mod vitals_repository;

pub use clock::Clock;
pub use herd_reader::{CowRecord, HerdReader};
pub use herd_repository::HerdRepository;
pub use notification_store::{NotificationStore, StoredNotification};
pub use vitals_repository::VitalsRepository;
