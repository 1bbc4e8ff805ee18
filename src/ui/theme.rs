use crossterm::style::Color;
use dialoguer::theme::Theme;
use std::fmt;

/// Design tokens for the sign-in terminal UI.
///
/// Design constraints:
/// - Only 5 semantic colors (`colors::*`)
/// - All icons and borders must be sourced from this module
pub mod colors {
    use super::Color;

    /// #22C55E
    pub const SUCCESS: Color = Color::Green;
    /// #EF4444
    pub const ERROR: Color = Color::Red;
    /// #F59E0B
    pub const WARNING: Color = Color::Yellow;
    /// #007AFF
    pub const INFO: Color = Color::Blue;
    /// #666666
    pub const DIM: Color = Color::DarkGrey;
}

pub mod icons {
    pub const SUCCESS: &str = "✓";
    pub const ERROR: &str = "✗";
    pub const WARNING: &str = "⚠";
    pub const ARROW: &str = "↳";
    pub const PHONE: &str = "☎";
    pub const HOME: &str = "⌂";
}

pub mod icons_ascii {
    pub const SUCCESS: &str = "[OK]";
    pub const ERROR: &str = "[!]";
    pub const WARNING: &str = "[WARN]";
    pub const ARROW: &str = "->";
    pub const PHONE: &str = "#";
    pub const HOME: &str = "[HOME]";
}

pub mod borders {
    pub const TOP_LEFT: &str = "╭";
    pub const TOP_RIGHT: &str = "╮";
    pub const BOTTOM_LEFT: &str = "╰";
    pub const BOTTOM_RIGHT: &str = "╯";
    pub const HORIZONTAL: &str = "─";
    pub const VERTICAL: &str = "│";
}

pub mod borders_ascii {
    pub const TOP_LEFT: &str = "+";
    pub const TOP_RIGHT: &str = "+";
    pub const BOTTOM_LEFT: &str = "+";
    pub const BOTTOM_RIGHT: &str = "+";
    pub const HORIZONTAL: &str = "-";
    pub const VERTICAL: &str = "|";
}

// ----------------------------------------------------------------------------
// SigninTheme - dialoguer theme for the line-mode prompt
// ----------------------------------------------------------------------------

/// Theme for the `run --plain` prompt.
///
/// Wraps `ColorfulTheme` and only swaps the prompt prefix and error marker
/// for the icons above (or their ASCII fallbacks).
pub struct SigninTheme {
    unicode: bool,
    inner: dialoguer::theme::ColorfulTheme,
}

impl SigninTheme {
    pub fn new(unicode: bool) -> Self {
        Self {
            unicode,
            inner: dialoguer::theme::ColorfulTheme::default(),
        }
    }

    pub fn prompt_icon(&self) -> &'static str {
        if self.unicode {
            icons::PHONE
        } else {
            icons_ascii::PHONE
        }
    }

    pub fn error_icon(&self) -> &'static str {
        if self.unicode {
            icons::ERROR
        } else {
            icons_ascii::ERROR
        }
    }
}

impl Theme for SigninTheme {
    fn format_prompt(&self, f: &mut dyn fmt::Write, prompt: &str) -> fmt::Result {
        self.inner.format_prompt(f, prompt)
    }

    fn format_error(&self, f: &mut dyn fmt::Write, err: &str) -> fmt::Result {
        write!(f, "{} {}", self.error_icon(), err)
    }

    fn format_input_prompt(
        &self,
        f: &mut dyn fmt::Write,
        prompt: &str,
        default: Option<&str>,
    ) -> fmt::Result {
        match default {
            Some(default) if !default.is_empty() => {
                write!(f, "{} {} [{}]: ", self.prompt_icon(), prompt, default)
            }
            _ => write!(f, "{} {}: ", self.prompt_icon(), prompt),
        }
    }

    fn format_input_prompt_selection(
        &self,
        f: &mut dyn fmt::Write,
        prompt: &str,
        sel: &str,
    ) -> fmt::Result {
        write!(f, "{} {}: {}", self.prompt_icon(), prompt, sel)
    }
}
