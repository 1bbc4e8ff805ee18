//! CLI Argument Parsing
//!
//! This module defines the CLI interface using clap.
//!
//! ## Design Notes
//!
//! - Global flags (--json, --color, --verbose, --config) are inherited by all subcommands
//! - Running without a subcommand starts the interactive sign-in screen

use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorWhen {
    Auto,
    Always,
    Never,
}

/// phone-signin - phone-number sign-in with inline validation
#[derive(Parser, Debug)]
#[command(name = "phone-signin")]
#[command(author, version, about, long_about = None)]
#[command(after_help = "Run 'phone-signin' without arguments for the interactive sign-in screen.")]
pub struct Cli {
    /// Emit NDJSON events instead of rendered screens
    #[arg(long, global = true)]
    pub json: bool,

    /// Color output mode
    #[arg(long, global = true, value_enum)]
    pub color: Option<ColorWhen>,

    /// Verbosity level (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Config file (default: ~/.config/phone-signin/config.toml)
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Commands {
    /// Interactive sign-in screen (default)
    Run {
        /// Line-by-line prompt instead of the full-screen editor
        #[arg(long)]
        plain: bool,
    },

    /// Validate phone numbers without the UI (exits 1 if any is invalid)
    Check {
        /// Raw input, sanitized the same way as typed text
        #[arg(required = true, value_name = "RAW")]
        numbers: Vec<String>,
    },

    /// Feed a script of `type <text>` / `submit` lines through the sign-in flow
    Replay {
        /// Script file ('-' or omitted for stdin)
        #[arg(value_name = "FILE")]
        script: Option<PathBuf>,
    },
}
