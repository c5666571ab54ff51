//! Given steps for task editing BDD scenarios.

use super::world::TaskEditingWorld;
use rstest_bdd_macros::given;

#[given(r#"a list with a task titled "{title}""#)]
fn list_with_task(world: &mut TaskEditingWorld, title: String) {
    world.controller.add_task(title);
}

#[given("an empty list")]
fn empty_list(world: &mut TaskEditingWorld) {
    let _ = world;
}
