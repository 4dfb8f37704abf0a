//! Step definitions for urgency update scenarios.

pub mod then;
pub mod when;
pub mod world;
