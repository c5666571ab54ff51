//! Task collection and editing-mode state machine.
//!
//! This module implements the whole application core: creating, completing,
//! retitling, and deleting tasks held in memory, together with the
//! exclusive single-task editing session. The module separates concerns the
//! same way throughout:
//!
//! - Domain types in [`domain`]
//! - The controller in [`services`]
//! - The rendering projection in [`view`]

pub mod domain;
pub mod services;
pub mod view;
