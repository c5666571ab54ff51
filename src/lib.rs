//! Checklist: in-memory to-do list core.
//!
//! This crate provides the state machine behind a single-screen to-do list:
//! an ordered task collection plus the transient editing interaction state,
//! driven by a controller the view layer calls in response to user input.
//! All state is transient in-process state, lost on process termination;
//! there is no persistence and no network boundary.
//!
//! # Architecture
//!
//! The crate keeps domain logic free of presentation concerns:
//!
//! - **Domain**: pure task and interaction-state types with no
//!   infrastructure dependencies
//! - **Services**: the controller that serializes mutations and enforces
//!   editing-mode exclusivity
//! - **View**: a read-only projection of controller state for a rendering
//!   collaborator to pattern-match on
//!
//! # Modules
//!
//! - [`task`]: task collection, editing state machine, and view projection

pub mod task;
