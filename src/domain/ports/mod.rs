//! Domain Ports (Interfaces)
//!
//! These traits define the boundaries of the domain layer.
//! Infrastructure layer provides concrete implementations.

pub mod sign_in_events;

pub use sign_in_events::{NoopEventSink, SignInEvent, SignInEventSink};
