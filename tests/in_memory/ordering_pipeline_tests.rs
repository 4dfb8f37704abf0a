//! In-memory integration tests for section ordering.

use super::helpers::{fields, number_field, service, task};
use rstest::rstest;
use todo_updater::{
    config::FieldConfig,
    task::{adapters::memory::InMemoryTaskTracker, domain::FieldValue},
};

fn seeded_section(tracker: &InMemoryTaskTracker) {
    let tasks = [
        ("A", None),
        ("B", Some(5.0)),
        ("C", None),
        ("D", Some(1.0)),
        ("E", Some(12.5)),
    ];
    for (gid, order) in tasks {
        tracker
            .add_section_task("s", task(gid, gid, false, vec![number_field("order", order)]))
            .expect("seed task");
    }
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn section_is_renumbered_in_steps_of_ten(fields: FieldConfig) {
    let tracker = InMemoryTaskTracker::new();
    seeded_section(&tracker);

    let report = service(&tracker, fields.clone())
        .reorder_section("s")
        .await
        .expect("fetch should succeed");

    let writes = tracker.writes().expect("read writes");
    let written: Vec<_> = writes
        .iter()
        .map(|write| (write.task.as_str(), write.value))
        .collect();
    assert_eq!(
        written,
        vec![
            ("D", FieldValue::Integer(10)),
            ("B", FieldValue::Integer(20)),
            ("E", FieldValue::Integer(30))
        ]
    );
    assert!(writes.iter().all(|write| write.field == fields.order));
    assert!(report.is_clean());
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn failed_order_write_stops_the_run(fields: FieldConfig) {
    let tracker = InMemoryTaskTracker::new();
    seeded_section(&tracker);
    tracker.fail_writes_for("B").expect("inject failure");

    let report = service(&tracker, fields)
        .reorder_section("s")
        .await
        .expect("fetch should succeed");

    let written: Vec<_> = tracker
        .writes()
        .expect("read writes")
        .into_iter()
        .map(|write| write.task.as_str().to_owned())
        .collect();
    assert_eq!(written, vec!["D".to_owned()]);
    assert!(report.aborted());
    assert_eq!(report.failures().len(), 1);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn unknown_section_writes_nothing(fields: FieldConfig) {
    let tracker = InMemoryTaskTracker::new();

    let report = service(&tracker, fields)
        .reorder_section("nowhere")
        .await
        .expect("fetch should succeed");

    assert_eq!(report.written(), 0);
    assert!(tracker.writes().expect("read writes").is_empty());
}
