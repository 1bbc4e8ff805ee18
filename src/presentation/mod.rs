//! Presentation Layer
//!
//! This layer handles:
//! - CLI argument parsing (via clap)
//! - Wiring the session to an event sink for the chosen output mode
//!
//! ## Structure
//!
//! - `cli` - Argument definitions
//! - `factory` - Creates event sinks from output flags

pub mod cli;
pub mod factory;

pub use cli::{Cli, ColorWhen, Commands};
pub use factory::create_event_sink;
