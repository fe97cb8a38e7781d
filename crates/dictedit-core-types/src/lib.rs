//! Core types shared across the dictedit crates
//!
//! - **Correlation types**: CycleId, identifying one editing cycle in logs
//! - **Schema constants**: Canonical field keys and event names

pub mod correlation;
pub mod schema;

pub use correlation::CycleId;
