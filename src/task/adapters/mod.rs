//! Adapter implementations of the tracker port.

pub mod asana;
pub mod memory;
