//! Shared world state for urgency update BDD scenarios.

use std::sync::Arc;

use mockable::DefaultClock;
use rstest::fixture;
use todo_updater::{
    config::FieldConfig,
    task::{
        adapters::memory::InMemoryTaskTracker,
        services::{ApplyReport, TaskUpdateError, TaskUpdateService},
    },
};

/// Project every scenario task belongs to.
pub const PROJECT: &str = "project";
/// Section every ordered scenario task belongs to.
pub const SECTION: &str = "section";

/// Service type used by the BDD world.
pub type TestUpdateService = TaskUpdateService<InMemoryTaskTracker, DefaultClock>;

/// Scenario world for update behaviour tests.
pub struct UpdateWorld {
    pub tracker: InMemoryTaskTracker,
    pub service: TestUpdateService,
    pub last_result: Option<Result<ApplyReport, TaskUpdateError>>,
}

impl UpdateWorld {
    /// Creates a world with an empty tracker.
    #[must_use]
    pub fn new() -> Self {
        let tracker = InMemoryTaskTracker::new();
        let fields = FieldConfig::from_raw("opened", "impact", "size", "urgency", "order")
            .unwrap_or_else(|err| panic!("invalid scenario field configuration: {err}"));
        let service =
            TaskUpdateService::new(Arc::new(tracker.clone()), Arc::new(DefaultClock), fields);
        Self {
            tracker,
            service,
            last_result: None,
        }
    }
}

impl Default for UpdateWorld {
    fn default() -> Self {
        Self::new()
    }
}

/// Fixture that creates a new scenario world.
#[fixture]
pub fn world() -> UpdateWorld {
    UpdateWorld::default()
}

/// Runs an async operation within sync step definitions.
pub fn run_async<T>(future: impl std::future::Future<Output = T>) -> T {
    tokio::task::block_in_place(|| tokio::runtime::Handle::current().block_on(future))
}
