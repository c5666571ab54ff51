//! Editing interaction state for the task list.

use super::TaskId;
use serde::{Deserialize, Serialize};

/// The controller's interaction mode.
///
/// At most one task is editable at a time. While editing, `draft` is a
/// scratch buffer independent of the task's stored title until committed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum InteractionState {
    /// No edit session is in progress.
    #[default]
    Idle,
    /// One task's title is being edited.
    Editing {
        /// Identifier of the task being edited.
        task_id: TaskId,
        /// Uncommitted replacement title.
        draft: String,
    },
}

impl InteractionState {
    /// Returns whether no edit session is in progress.
    #[must_use]
    pub const fn is_idle(&self) -> bool {
        matches!(self, Self::Idle)
    }

    /// Returns the identifier of the task being edited, if any.
    #[must_use]
    pub const fn editing_task(&self) -> Option<TaskId> {
        match self {
            Self::Idle => None,
            Self::Editing { task_id, .. } => Some(*task_id),
        }
    }

    /// Returns the uncommitted draft title, if an edit is in progress.
    #[must_use]
    pub fn draft(&self) -> Option<&str> {
        match self {
            Self::Idle => None,
            Self::Editing { draft, .. } => Some(draft),
        }
    }
}
