//! Adapters - Concrete implementations of the ports.

pub mod clock;
pub mod postgres;

pub use clock::SystemClock;
