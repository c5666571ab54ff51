//! Add, toggle, and delete flows against a live controller.

use super::helpers::{TestController, controller, id_of, seeded};
use checklist::task::domain::{Task, TaskId};
use checklist::task::view::{RowMode, project};
use rstest::rstest;

#[rstest]
fn adding_tasks_builds_an_ordered_list(mut controller: TestController) {
    controller.add_task("Buy milk");
    controller.add_task("Clean house");
    controller.add_task("Water plants");

    let titles: Vec<_> = controller.tasks().iter().map(|task| task.title()).collect();
    assert_eq!(titles, ["Buy milk", "Clean house", "Water plants"]);
}

#[rstest]
fn blank_submissions_leave_the_list_untouched(mut controller: TestController) {
    controller.add_task("Buy milk");
    controller.add_task("");
    controller.add_task("   ");

    assert_eq!(controller.tasks().len(), 1);
}

#[rstest]
fn identical_titles_coexist_as_separate_tasks() -> Result<(), eyre::Report> {
    let list = seeded(&["Clean house", "Clean house"]);

    eyre::ensure!(list.tasks().len() == 2, "expected two tasks");
    let first = list.tasks().first().map(Task::id);
    let second = list.tasks().last().map(Task::id);
    eyre::ensure!(first != second, "ids must be distinct");
    Ok(())
}

#[rstest]
fn toggling_and_deleting_through_the_projection() -> Result<(), eyre::Report> {
    let mut list = seeded(&["Buy milk", "Clean house"]);
    let milk = id_of(&list, "Buy milk")?;

    list.toggle_done(milk);
    let rows = project(&list);
    let done: Vec<_> = rows.iter().filter(|row| row.done).collect();
    eyre::ensure!(done.len() == 1, "exactly one completed row");

    list.delete_task(milk);
    let remaining = project(&list);
    eyre::ensure!(remaining.len() == 1, "one row remains");
    eyre::ensure!(
        remaining
            .iter()
            .all(|row| row.title == "Clean house" && row.mode == RowMode::Display),
        "remaining row is displayed normally"
    );
    Ok(())
}

#[rstest]
fn stale_ids_from_a_lagging_view_are_tolerated() -> Result<(), eyre::Report> {
    let mut list = seeded(&["Buy milk"]);
    let milk = id_of(&list, "Buy milk")?;

    // A view that has not re-synced can fire events for a removed row.
    list.delete_task(milk);
    list.toggle_done(milk);
    list.delete_task(milk);

    eyre::ensure!(list.tasks().is_empty(), "list stays empty");
    eyre::ensure!(list.interaction().is_idle(), "controller stays idle");
    Ok(())
}

#[rstest]
fn unknown_ids_never_disturb_existing_tasks(mut controller: TestController) {
    controller.add_task("Buy milk");
    let before = controller.tasks().to_vec();

    controller.toggle_done(TaskId::new());
    controller.delete_task(TaskId::new());
    controller.start_editing(TaskId::new());

    assert_eq!(controller.tasks(), before);
    assert!(controller.interaction().is_idle());
}
