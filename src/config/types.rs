//! Configuration type definitions

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::SigninResult;

use super::loader::{self, ConfigWarning};

/// Output configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    #[serde(default)]
    pub verbosity: Verbosity,

    #[serde(default)]
    pub color: ColorMode,

    #[serde(default = "default_true")]
    pub unicode: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            verbosity: Verbosity::default(),
            color: ColorMode::default(),
            unicode: true,
        }
    }
}

fn default_true() -> bool {
    true
}

/// Color output mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ColorMode {
    #[default]
    Auto,
    Always,
    Never,
}

/// Verbosity level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Verbosity {
    Quiet,
    #[default]
    Normal,
    Verbose,
    Debug,
}

impl Verbosity {
    /// Equivalent `-v` count
    pub fn level(&self) -> u8 {
        match self {
            Verbosity::Quiet | Verbosity::Normal => 0,
            Verbosity::Verbose => 1,
            Verbosity::Debug => 2,
        }
    }
}

/// Copy shown on the two screens.
///
/// Validation messages are fixed and live with the value objects.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScreenCopy {
    pub title: String,
    pub instruction: String,
    pub placeholder: String,
    pub button: String,
    pub home_title: String,
    pub home_message: String,
}

impl Default for ScreenCopy {
    fn default() -> Self {
        Self {
            title: "Đăng nhập".to_string(),
            instruction: "Vui lòng nhập số điện thoại của bạn để tiếp tục".to_string(),
            placeholder: "Nhập số điện thoại".to_string(),
            button: "Tiếp tục".to_string(),
            home_title: "Trang chủ".to_string(),
            home_message: "Chào mừng bạn đến với trang chủ!".to_string(),
        }
    }
}

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub output: OutputConfig,

    #[serde(default)]
    pub screen: ScreenCopy,
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> SigninResult<Self> {
        let (config, _warnings) = loader::load_with_warnings(path)?;
        Ok(config)
    }

    /// Load configuration and collect non-fatal warnings (e.g. unknown keys).
    pub fn load_with_warnings(path: &Path) -> SigninResult<(Self, Vec<ConfigWarning>)> {
        loader::load_with_warnings(path)
    }

    /// Apply environment variable overrides (PHONE_SIGNIN_* prefix)
    pub fn with_env_overrides(self) -> Self {
        loader::with_env_overrides(self)
    }
}
