//! Urgency scoring and section ordering for tracker tasks.
//!
//! The module follows hexagonal architecture:
//!
//! - Domain types, field extraction and the scoring and ordering rules in
//!   [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Planning and pipeline services in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
