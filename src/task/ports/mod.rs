//! Port contracts for tracker access.
//!
//! Ports define infrastructure-agnostic interfaces used by task services.

pub mod tracker;

pub use tracker::{TaskTracker, TrackerError, TrackerResult};
