//! Configuration module for phone-signin
//!
//! Configuration hierarchy:
//! 1. CLI flags (highest priority)
//! 2. Environment variables (PHONE_SIGNIN_*)
//! 3. User config (~/.config/phone-signin/config.toml) or `--config PATH`
//! 4. Built-in defaults (lowest priority)

mod loader;
mod types;

pub use loader::{load, user_config_path, ConfigWarning, LoadedConfig};
pub use types::{ColorMode, Config, OutputConfig, ScreenCopy, Verbosity};
