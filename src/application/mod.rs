//! Application Layer
//!
//! Use cases that orchestrate the sign-in flow.
//! This layer:
//! - Depends on Domain layer (entities, services, ports)
//! - Does NOT contain business rules (those are in Domain)
//!
//! ## Use Cases
//!
//! - `SignInSession` - Routes user events to the current screen and navigates
//! - `ReplayScript` - Parses scripted `type`/`submit` input

pub mod replay;
pub mod session;

pub use replay::{ReplayScript, ScriptStep};
pub use session::{SignInSession, Step, UserEvent};
