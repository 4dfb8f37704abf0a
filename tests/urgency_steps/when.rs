//! When steps for urgency update BDD scenarios.

use super::world::{PROJECT, SECTION, UpdateWorld, run_async};
use rstest_bdd_macros::when;

#[when("the project urgency is updated")]
fn update_project_urgency(world: &mut UpdateWorld) {
    world.last_result = Some(run_async(world.service.update_project_urgency(PROJECT)));
}

#[when("the section is reordered")]
fn reorder_section(world: &mut UpdateWorld) {
    world.last_result = Some(run_async(world.service.reorder_section(SECTION)));
}
