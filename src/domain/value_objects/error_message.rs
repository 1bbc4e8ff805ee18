//! Inline error shown under the phone field
//!
//! Both variants describe the same failure (the input is not a local phone
//! number); only the wording differs with the event that surfaced it.

use serde::{Serialize, Serializer};

/// Shown while typing
pub const LIVE_FORMAT_ERROR: &str = "Số điện thoại không đúng định dạng";

/// Shown when submit is pressed with an invalid number
pub const SUBMIT_FORMAT_ERROR: &str = "Số điện thoại không đúng định dạng. Vui lòng nhập lại.";

/// Error line state
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum ErrorMessage {
    /// Nothing shown
    #[default]
    None,
    /// Format error raised by a text change
    LiveFormat,
    /// Format error raised by submit
    SubmitFormat,
}

impl ErrorMessage {
    /// Display text, `None` when the error line is hidden
    pub fn text(&self) -> Option<&'static str> {
        match self {
            ErrorMessage::None => None,
            ErrorMessage::LiveFormat => Some(LIVE_FORMAT_ERROR),
            ErrorMessage::SubmitFormat => Some(SUBMIT_FORMAT_ERROR),
        }
    }

    pub fn is_shown(&self) -> bool {
        !matches!(self, ErrorMessage::None)
    }
}

impl Serialize for ErrorMessage {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.text().serialize(serializer)
    }
}
