//! Domain Entities
//!
//! Stateful domain objects.

mod entry_controller;

pub use entry_controller::{ControllerOutcome, EntryController, SignInView};
