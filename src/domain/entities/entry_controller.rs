//! Sign-in entry controller
//!
//! State machine over `(PhoneInput, ErrorMessage)`, driven by two events:
//!
//! - text changed: sanitize, validate, set or clear the live error. Never
//!   navigates.
//! - submit pressed: validate again from scratch; either show the submit
//!   error or clear it and emit a navigation intent to Home.
//!
//! The intent is only a request. Once the caller has actually moved to Home
//! it calls [`EntryController::confirm_navigated`], which ends the
//! controller's lifecycle: later events are ignored, so at most one
//! navigation ever happens. A failed navigation leaves the field editable.

use serde::Serialize;

use crate::domain::value_objects::{ErrorMessage, NavigationIntent, PhoneInput};

/// What the display surface renders after each event
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SignInView {
    pub displayed_text: String,
    pub error_text: Option<String>,
}

/// Result of feeding one event to the controller
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControllerOutcome {
    /// Field content replaced; `valid` is the fresh verdict
    Edited { valid: bool },
    /// Submit pressed with an invalid number
    Rejected,
    /// Submit accepted; the caller must perform this navigation
    Navigate(NavigationIntent),
    /// Event arrived after the controller already navigated away
    Ignored,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EntryController {
    input: PhoneInput,
    error: ErrorMessage,
    finished: bool,
}

impl EntryController {
    /// Empty field, no error
    pub fn new() -> Self {
        Self::default()
    }

    pub fn input(&self) -> &PhoneInput {
        &self.input
    }

    pub fn error(&self) -> ErrorMessage {
        self.error
    }

    /// Fresh verdict for the current input
    pub fn is_valid(&self) -> bool {
        self.input.is_valid()
    }

    /// True once the navigation to Home has been confirmed
    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// Handle a text-changed event carrying the field's full raw text.
    pub fn on_text_changed(&mut self, raw: &str) -> ControllerOutcome {
        if self.finished {
            return ControllerOutcome::Ignored;
        }

        self.input = PhoneInput::sanitize(raw);
        let valid = self.input.is_valid();
        self.error = if valid {
            ErrorMessage::None
        } else {
            ErrorMessage::LiveFormat
        };

        ControllerOutcome::Edited { valid }
    }

    /// Handle a submit-pressed event.
    pub fn on_submit(&mut self) -> ControllerOutcome {
        if self.finished {
            return ControllerOutcome::Ignored;
        }

        if !self.input.is_valid() {
            self.error = ErrorMessage::SubmitFormat;
            return ControllerOutcome::Rejected;
        }

        self.error = ErrorMessage::None;
        ControllerOutcome::Navigate(NavigationIntent::home())
    }

    /// Record that the intent from [`on_submit`](Self::on_submit) was carried out.
    pub fn confirm_navigated(&mut self) {
        self.finished = true;
    }

    pub fn view(&self) -> SignInView {
        SignInView {
            displayed_text: self.input.as_str().to_string(),
            error_text: self.error.text().map(str::to_string),
        }
    }
}
