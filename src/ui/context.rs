use crate::ui::terminal::{detect_capabilities, TerminalCapabilities};
use phone_signin::config::{ColorMode, Config, Verbosity};
use phone_signin::presentation::ColorWhen;

/// Output decisions for one run, resolved from flags, config and terminal
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UiContext {
    pub json: bool,
    pub verbose: u8,
    /// Configured `quiet` with no `-v`: only the screens themselves are printed
    pub quiet: bool,
    pub caps: TerminalCapabilities,
    pub color: bool,
    pub unicode: bool,
}

impl UiContext {
    pub fn new(json: bool, verbose: u8, cli_color: Option<ColorWhen>, config: &Config) -> Self {
        let caps = detect_capabilities();
        Self::from_caps(json, verbose, cli_color, config, caps)
    }

    pub(crate) fn from_caps(
        json: bool,
        verbose: u8,
        cli_color: Option<ColorWhen>,
        config: &Config,
        caps: TerminalCapabilities,
    ) -> Self {
        let unicode = config.output.unicode && caps.supports_unicode;

        let color = match cli_color {
            Some(ColorWhen::Never) => false,
            Some(ColorWhen::Always) => true,
            Some(ColorWhen::Auto) | None => match config.output.color {
                ColorMode::Never => false,
                ColorMode::Always => true,
                ColorMode::Auto => caps.supports_color && !caps.is_ci,
            },
        };

        let quiet = verbose == 0 && config.output.verbosity == Verbosity::Quiet;

        // `-v` on the command line stacks on top of the configured level.
        let verbose = verbose.max(config.output.verbosity.level());

        Self {
            json,
            verbose,
            quiet,
            caps,
            color,
            unicode,
        }
    }
}
