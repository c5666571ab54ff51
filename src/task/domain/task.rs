//! Task aggregate and its lifecycle mutations.

use super::{TaskDomainError, TaskId};
use chrono::{DateTime, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};

/// A single to-do item.
///
/// Titles are validated as non-empty at creation only; [`Task::rename`]
/// accepts any text because committing an edit performs no validation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    id: TaskId,
    title: String,
    done: bool,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl Task {
    /// Creates a new incomplete task with a freshly generated identifier.
    ///
    /// The stored title is the text as given; trimming applies to
    /// validation only.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::EmptyTitle`] when the title is empty
    /// after trimming.
    pub fn new(title: impl Into<String>, clock: &impl Clock) -> Result<Self, TaskDomainError> {
        let text = title.into();
        if text.trim().is_empty() {
            return Err(TaskDomainError::EmptyTitle);
        }
        let timestamp = clock.utc();
        Ok(Self {
            id: TaskId::new(),
            title: text,
            done: false,
            created_at: timestamp,
            updated_at: timestamp,
        })
    }

    /// Returns the task identifier.
    #[must_use]
    pub const fn id(&self) -> TaskId {
        self.id
    }

    /// Returns the displayed title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns whether the task is complete.
    #[must_use]
    pub const fn done(&self) -> bool {
        self.done
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Returns the latest mutation timestamp.
    #[must_use]
    pub const fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    /// Flips the completion flag.
    pub fn toggle_done(&mut self, clock: &impl Clock) {
        self.done = !self.done;
        self.touch(clock);
    }

    /// Replaces the title with the given text, without validation.
    pub fn rename(&mut self, title: impl Into<String>, clock: &impl Clock) {
        self.title = title.into();
        self.touch(clock);
    }

    /// Updates the `updated_at` timestamp to the current clock time.
    fn touch(&mut self, clock: &impl Clock) {
        self.updated_at = clock.utc();
    }
}
