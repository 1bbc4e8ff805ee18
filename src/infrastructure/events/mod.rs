//! Event Sink Implementations
//!
//! Provides concrete implementations of SignInEventSink:
//! - JsonEventSink: NDJSON output for scripting
//! - ConsoleEventSink: verbose diagnostics on stderr

mod console;
mod json;

pub use console::ConsoleEventSink;
pub use json::JsonEventSink;
