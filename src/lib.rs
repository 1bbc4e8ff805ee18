//! phone-signin - phone-number sign-in flow
//!
//! A sign-in screen that accepts a local phone number, validates its format
//! while the user types and again on submit, and navigates to a home screen
//! once the number is well formed. No account lookup or network is involved.
//!
//! The flow is framework independent: an [`EntryController`] state machine,
//! a [`NavigationGraph`], and a [`SignInSession`] that routes user events.
//! The binary puts a terminal front end on top.

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod presentation;

// Re-exports for convenience
pub use application::{ReplayScript, SignInSession, Step, UserEvent};
pub use config::Config;
pub use domain::entities::{ControllerOutcome, EntryController, SignInView};
pub use domain::ports::{NoopEventSink, SignInEvent, SignInEventSink};
pub use domain::services::{
    is_valid_local_phone_number, NavigationError, NavigationGraph, Navigator,
};
pub use domain::value_objects::{
    ErrorMessage, NavigationIntent, PhoneInput, Screen, LIVE_FORMAT_ERROR, SUBMIT_FORMAT_ERROR,
};
pub use error::{SigninError, SigninResult};
