//! In-memory adapters for tests and local experiments.

mod tracker;

pub use tracker::{InMemoryTaskTracker, RecordedWrite};
