//! Domain model for the task list.
//!
//! The task domain models the to-do item itself and the editing interaction
//! state while keeping all presentation concerns outside of the domain
//! boundary.

mod editing;
mod error;
mod ids;
mod task;

pub use editing::InteractionState;
pub use error::{ParseTaskIdError, TaskDomainError};
pub use ids::TaskId;
pub use task::Task;
