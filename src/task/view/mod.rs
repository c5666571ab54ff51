//! Read-only projection of controller state for rendering.
//!
//! The rendering layer is an external collaborator: it re-renders after
//! every mutation from this projection alone and pattern-matches on
//! [`RowMode`] instead of re-deriving editing flags itself. Rows serialize
//! so a UI bridge can consume them directly.

use crate::task::domain::TaskId;
use crate::task::services::TaskListController;
use mockable::Clock;
use serde::{Deserialize, Serialize};

/// How a single row is presented.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum RowMode {
    /// The row shows its stored title with toggle, delete, and edit
    /// affordances.
    Display,
    /// The row shows an edit field seeded with the in-progress draft.
    Editing {
        /// Current contents of the edit field.
        draft: String,
    },
}

/// One task as the rendering layer sees it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskRow {
    /// Stable row key.
    pub id: TaskId,
    /// Stored title (not the draft; see [`RowMode::Editing`]).
    pub title: String,
    /// Completion flag.
    pub done: bool,
    /// Presentation mode for this row.
    pub mode: RowMode,
}

/// Projects the controller's state into rows in display order.
///
/// Exactly the row whose task is being edited carries
/// [`RowMode::Editing`]; every other row is [`RowMode::Display`].
#[must_use]
pub fn project<C: Clock>(controller: &TaskListController<C>) -> Vec<TaskRow> {
    let editing = controller.interaction().editing_task();
    controller
        .tasks()
        .iter()
        .map(|task| {
            let mode = if editing == Some(task.id()) {
                controller
                    .interaction()
                    .draft()
                    .map_or(RowMode::Display, |draft| RowMode::Editing {
                        draft: draft.to_owned(),
                    })
            } else {
                RowMode::Display
            };
            TaskRow {
                id: task.id(),
                title: task.title().to_owned(),
                done: task.done(),
                mode,
            }
        })
        .collect()
}
