//! Domain Value Objects
//!
//! Immutable value types that represent domain concepts.

mod error_message;
mod navigation_intent;
mod phone_input;
mod screen;

pub use error_message::{ErrorMessage, LIVE_FORMAT_ERROR, SUBMIT_FORMAT_ERROR};
pub use navigation_intent::NavigationIntent;
pub use phone_input::PhoneInput;
pub use screen::Screen;
