//! Backend test support utilities
//!
//! Shared by unit and integration tests of the room server: one-time tracing
//! setup and the proptest configuration every property suite uses.

pub mod logging;
pub mod prop_config;
