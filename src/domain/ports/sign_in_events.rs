//! Sign-in Event Port
//!
//! Observable interface for a sign-in session.
//! Enables JSON event streams, verbose console diagnostics and test recording.

use crate::domain::value_objects::Screen;

/// Event emitted while a session processes user input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SignInEvent {
    /// Session opened on its initial screen
    Started { screen: Screen },

    /// Field text replaced after a keystroke or paste
    TextChanged {
        raw_len: usize,
        displayed_text: String,
        valid: bool,
        error: Option<String>,
    },

    /// Submit pressed with an invalid number
    SubmitRejected {
        displayed_text: String,
        error: String,
    },

    /// Submit pressed with a valid number
    SubmitAccepted,

    /// Current screen changed
    Navigated { from: Screen, to: Screen },

    /// Input arrived on a screen that has nothing to do with it
    Ignored { screen: Screen, event: &'static str },

    /// Session closed
    Finished { screen: Screen },
}

/// Trait for receiving sign-in events
///
/// Implementations:
/// - JsonEventSink: NDJSON event stream
/// - ConsoleEventSink: stderr diagnostics gated by verbosity
/// - NoopEventSink: Silent operation
pub trait SignInEventSink: Send + Sync {
    /// Handle a sign-in event
    fn on_event(&self, event: SignInEvent);

    /// Whether this sink wants one event per keystroke
    ///
    /// Sinks that only care about outcomes return false and never see
    /// `TextChanged`.
    fn wants_detailed_events(&self) -> bool {
        true
    }
}

/// No-op event sink for silent operation
pub struct NoopEventSink;

impl SignInEventSink for NoopEventSink {
    fn on_event(&self, _event: SignInEvent) {}

    fn wants_detailed_events(&self) -> bool {
        false
    }
}
