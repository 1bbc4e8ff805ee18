//! Infrastructure Layer
//!
//! Concrete implementations of the domain ports.

pub mod events;

pub use events::{ConsoleEventSink, JsonEventSink};
