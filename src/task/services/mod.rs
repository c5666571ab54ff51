//! Application services for the task list.

mod controller;

pub use controller::TaskListController;
