//! Domain layer - pure breeding-cycle model and calculations.

pub mod cattle;
pub mod foundation;
pub mod notification;
