//! Asana REST adapter.
//!
//! Collections are fetched page by page (100 tasks per page) until Asana
//! stops returning a `next_page` offset. Writes update one custom field per
//! request.

mod client;
mod models;

pub use client::{AsanaTaskTracker, OPT_FIELDS};
