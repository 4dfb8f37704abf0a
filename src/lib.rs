//! Todo updater: urgency scoring and ordering for Asana tasks.
//!
//! This crate reads tasks from Asana, computes an urgency score from each
//! task's impact, due date and open date, and writes the score back to a
//! custom field. It also renumbers the order field of the tasks in a section.
//!
//! # Architecture
//!
//! The crate follows hexagonal architecture principles:
//!
//! - **Domain**: Pure scoring, ordering and field extraction rules
//! - **Ports**: Abstract trait interfaces for tracker access
//! - **Adapters**: Concrete implementations of ports (Asana REST, in-memory)
//!
//! # Modules
//!
//! - [`config`]: Field identifiers and Asana connection settings
//! - [`task`]: Task domain, ports, adapters and update pipelines

pub mod config;
pub mod task;
