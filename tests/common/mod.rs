//! Common test utilities for phone-signin integration tests.
//!
//! This module provides:
//! - `TestEnv`: isolated HOME/config dirs plus helpers to run the CLI
//! - `RecordingSink`: an event sink that keeps every event for assertions

#![allow(dead_code)]

pub mod env;

pub use env::*;
pub use recording::*;
