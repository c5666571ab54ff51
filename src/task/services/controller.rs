//! Controller serializing all task list mutations.

use crate::task::domain::{InteractionState, Task, TaskId};
use mockable::Clock;
use std::mem;

/// Owns the task collection and the editing interaction state.
///
/// Every operation runs to completion on the caller's thread; the
/// controller is constructed by, and exclusively owned by, the view layer
/// that drives it. Invalid input — a blank title, a stale task id, an
/// editing operation while idle — is a silent no-op rather than an error:
/// the view cannot act on failures it has no way to surface.
///
/// Insertion order is display order; there is no reordering operation.
#[derive(Debug)]
pub struct TaskListController<C: Clock> {
    tasks: Vec<Task>,
    interaction: InteractionState,
    clock: C,
}

impl<C: Clock> TaskListController<C> {
    /// Creates a controller with an empty collection in the idle state.
    #[must_use]
    pub const fn new(clock: C) -> Self {
        Self {
            tasks: Vec::new(),
            interaction: InteractionState::Idle,
            clock,
        }
    }

    /// Returns whether the given text is acceptable as a new task title.
    ///
    /// Pure predicate for the view to derive its add affordance from; the
    /// add button is presented as disabled rather than surfacing an error.
    #[must_use]
    pub fn can_add_task(title: &str) -> bool {
        !title.trim().is_empty()
    }

    /// Appends a new incomplete task to the end of the collection.
    ///
    /// The caller is expected to withhold submission while
    /// [`Self::can_add_task`] is false; an empty-after-trim title is
    /// defensively rejected as a no-op regardless. The stored title is the
    /// text as given, untrimmed.
    pub fn add_task(&mut self, title: impl Into<String>) {
        if let Ok(task) = Task::new(title, &self.clock) {
            self.tasks.push(task);
        }
    }

    /// Flips the completion flag on the matching task.
    ///
    /// No-op when `id` no longer exists, tolerating stale references from
    /// a rendering layer that has not yet re-synced.
    pub fn toggle_done(&mut self, id: TaskId) {
        if let Some(task) = self.tasks.iter_mut().find(|task| task.id() == id) {
            task.toggle_done(&self.clock);
        }
    }

    /// Removes the matching task; no-op when `id` is absent.
    ///
    /// When the removed task is the one being edited, the edit session
    /// ends: leaving it open would dangle a reference to a removed task.
    pub fn delete_task(&mut self, id: TaskId) {
        self.tasks.retain(|task| task.id() != id);
        if self.interaction.editing_task() == Some(id) {
            self.interaction = InteractionState::Idle;
        }
    }

    /// Opens an edit session on the matching task, seeding the draft with
    /// its current title.
    ///
    /// Switching to another task discards the previous unsaved draft
    /// without warning. No-op when `id` does not exist.
    pub fn start_editing(&mut self, id: TaskId) {
        if let Some(task) = self.tasks.iter().find(|task| task.id() == id) {
            self.interaction = InteractionState::Editing {
                task_id: id,
                draft: task.title().to_owned(),
            };
        }
    }

    /// Replaces the draft buffer; no-op while idle.
    ///
    /// No validation happens here: emptiness is only checked when a *new*
    /// task is added, never on a draft.
    pub fn update_draft(&mut self, text: impl Into<String>) {
        if let InteractionState::Editing { draft, .. } = &mut self.interaction {
            *draft = text.into();
        }
    }

    /// Stores the draft as the edited task's title and returns to idle.
    ///
    /// Triggered by the edit field losing focus, not by an explicit save
    /// action. The draft is committed verbatim, even when empty; no-op
    /// while idle.
    pub fn commit_edit(&mut self) {
        let state = mem::replace(&mut self.interaction, InteractionState::Idle);
        if let InteractionState::Editing { task_id, draft } = state {
            if let Some(task) = self.tasks.iter_mut().find(|task| task.id() == task_id) {
                task.rename(draft, &self.clock);
            }
        }
    }

    /// Discards the draft and returns to idle; stored titles are untouched.
    pub fn cancel_editing(&mut self) {
        self.interaction = InteractionState::Idle;
    }

    /// Returns the tasks in display order.
    #[must_use]
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// Returns the current interaction state.
    #[must_use]
    pub const fn interaction(&self) -> &InteractionState {
        &self.interaction
    }
}
