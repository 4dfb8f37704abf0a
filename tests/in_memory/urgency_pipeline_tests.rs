//! In-memory integration tests for the urgency pipelines.

use super::helpers::{enum_field, fields, service, task};
use rstest::rstest;
use todo_updater::{
    config::FieldConfig,
    task::{
        adapters::memory::InMemoryTaskTracker,
        domain::{FieldValue, TaskGid},
        services::TaskUpdateError,
    },
};

fn gid(raw: &str) -> TaskGid {
    TaskGid::new(raw).expect("valid task gid")
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn project_update_writes_scores_for_open_tasks(fields: FieldConfig) {
    let tracker = InMemoryTaskTracker::new();
    tracker
        .add_project_task(
            "p",
            task("1", "Ship release", false, vec![enum_field("impact", Some("Very High"))]),
        )
        .expect("seed task");
    tracker
        .add_project_task(
            "p",
            task("2", "Already done", true, vec![enum_field("impact", Some("High"))]),
        )
        .expect("seed task");
    tracker
        .add_project_task(
            "p",
            task(
                "3",
                "Umbrella",
                false,
                vec![
                    enum_field("impact", Some("High")),
                    enum_field("size", Some("Holder")),
                ],
            ),
        )
        .expect("seed task");
    tracker
        .add_project_task("p", task("4", "Unrated", false, vec![enum_field("impact", None)]))
        .expect("seed task");

    let report = service(&tracker, fields.clone())
        .update_project_urgency("p")
        .await
        .expect("fetch should succeed");

    let writes = tracker.writes().expect("read writes");
    let written: Vec<_> = writes
        .iter()
        .map(|write| (write.task.as_str(), write.value))
        .collect();
    assert_eq!(
        written,
        vec![("1", FieldValue::Number(20.0)), ("4", FieldValue::Number(0.0))]
    );
    assert!(writes.iter().all(|write| write.field == fields.urgency));
    assert!(report.is_clean());
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn failed_write_is_reported_and_later_tasks_still_update(fields: FieldConfig) {
    let tracker = InMemoryTaskTracker::new();
    for (id, name) in [("1", "First"), ("2", "Second"), ("3", "Third")] {
        tracker
            .add_project_task("p", task(id, name, false, vec![enum_field("impact", Some("Low"))]))
            .expect("seed task");
    }
    tracker.fail_writes_for("2").expect("inject failure");

    let report = service(&tracker, fields)
        .update_project_urgency("p")
        .await
        .expect("fetch should succeed");

    let written: Vec<_> = tracker
        .writes()
        .expect("read writes")
        .into_iter()
        .map(|write| write.task)
        .collect();
    assert_eq!(written, vec![gid("1"), gid("3")]);
    assert_eq!(report.written(), 2);
    let failure = report.failures().first().expect("one failure");
    assert_eq!(failure.task_name, "Second");
    assert!(!report.aborted());
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn explicit_tasks_are_updated_in_the_given_order(fields: FieldConfig) {
    let tracker = InMemoryTaskTracker::new();
    tracker
        .add_project_task("p", task("1", "One", false, vec![enum_field("impact", Some("Medium"))]))
        .expect("seed task");
    tracker
        .add_project_task("p", task("2", "Two", false, vec![enum_field("impact", Some("High"))]))
        .expect("seed task");

    service(&tracker, fields)
        .update_task_urgency(&[gid("2"), gid("1")])
        .await
        .expect("fetch should succeed");

    let written: Vec<_> = tracker
        .writes()
        .expect("read writes")
        .into_iter()
        .map(|write| (write.task, write.value))
        .collect();
    assert_eq!(
        written,
        vec![
            (gid("2"), FieldValue::Number(10.0)),
            (gid("1"), FieldValue::Number(2.0))
        ]
    );
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn unknown_task_aborts_explicit_update(fields: FieldConfig) {
    let tracker = InMemoryTaskTracker::new();
    tracker
        .add_project_task("p", task("1", "One", false, vec![enum_field("impact", Some("High"))]))
        .expect("seed task");

    let result = service(&tracker, fields)
        .update_task_urgency(&[gid("1"), gid("missing")])
        .await;

    assert!(matches!(result, Err(TaskUpdateError::Fetch(_))));
    assert!(tracker.writes().expect("read writes").is_empty());
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn fetch_failure_is_returned(fields: FieldConfig) {
    let tracker = InMemoryTaskTracker::new();
    tracker.fail_fetches().expect("inject failure");

    let result = service(&tracker, fields).update_project_urgency("p").await;

    assert!(matches!(result, Err(TaskUpdateError::Fetch(_))));
}
