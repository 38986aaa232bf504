//! Herdbook - Livestock Farm Management Engine
//!
//! This crate implements the cattle breeding cycle: insemination records,
//! pregnancy tracking, calving, and the derived breeding notifications
//! a farm dashboard consumes.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
