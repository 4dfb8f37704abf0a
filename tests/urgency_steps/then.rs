//! Then steps for urgency update BDD scenarios.

use super::world::UpdateWorld;
use rstest_bdd_macros::then;
use todo_updater::task::{
    adapters::memory::RecordedWrite,
    domain::FieldValue,
    services::ApplyReport,
};

fn report(world: &UpdateWorld) -> Result<&ApplyReport, eyre::Report> {
    world
        .last_result
        .as_ref()
        .ok_or_else(|| eyre::eyre!("missing run result in scenario world"))?
        .as_ref()
        .map_err(|err| eyre::eyre!("unexpected fetch failure: {err}"))
}

fn writes_for(world: &UpdateWorld, gid: &str) -> Result<Vec<RecordedWrite>, eyre::Report> {
    let writes = world
        .tracker
        .writes()
        .map_err(|err| eyre::eyre!("cannot read recorded writes: {err}"))?;
    Ok(writes
        .into_iter()
        .filter(|write| write.task.as_str() == gid)
        .collect())
}

#[then(r#"task "{gid}" has an urgency written"#)]
fn urgency_written(world: &UpdateWorld, gid: String) -> Result<(), eyre::Report> {
    let writes = writes_for(world, &gid)?;
    eyre::ensure!(
        writes
            .iter()
            .any(|write| write.field.as_str() == "urgency"
                && matches!(write.value, FieldValue::Number(_))),
        "expected an urgency write for task {gid}, found {writes:?}"
    );
    Ok(())
}

#[then("{count:u64} write failure is reported")]
fn write_failures_reported(world: &UpdateWorld, count: u64) -> Result<(), eyre::Report> {
    let failures = report(world)?.failures().len();
    eyre::ensure!(
        u64::try_from(failures).ok() == Some(count),
        "expected {count} write failures, found {failures}"
    );
    Ok(())
}

#[then("no writes are recorded")]
fn no_writes(world: &UpdateWorld) -> Result<(), eyre::Report> {
    let writes = world
        .tracker
        .writes()
        .map_err(|err| eyre::eyre!("cannot read recorded writes: {err}"))?;
    eyre::ensure!(writes.is_empty(), "expected no writes, found {writes:?}");
    Ok(())
}

#[then("the run is reported as aborted")]
fn run_aborted(world: &UpdateWorld) -> Result<(), eyre::Report> {
    eyre::ensure!(report(world)?.aborted(), "expected the run to abort");
    Ok(())
}

#[then(r#"task "{gid}" receives order {order:u64}"#)]
fn receives_order(world: &UpdateWorld, gid: String, order: u64) -> Result<(), eyre::Report> {
    let writes = writes_for(world, &gid)?;
    eyre::ensure!(
        writes.len() == 1
            && writes
                .first()
                .is_some_and(|write| write.value == FieldValue::Integer(order)),
        "expected task {gid} to receive order {order}, found {writes:?}"
    );
    Ok(())
}

#[then(r#"task "{gid}" receives no order"#)]
fn receives_no_order(world: &UpdateWorld, gid: String) -> Result<(), eyre::Report> {
    let writes = writes_for(world, &gid)?;
    eyre::ensure!(
        writes.is_empty(),
        "expected no order for task {gid}, found {writes:?}"
    );
    Ok(())
}
