//! Command and query handlers, one per operation.
//!
//! Handlers wire the pure domain calculations to the ports: they load
//! records through `HerdReader`, run the domain function, and commit the
//! resulting plan through `HerdRepository`.

pub mod breeding;
pub mod cattle;

#[cfg(test)]
pub(crate) mod support;
