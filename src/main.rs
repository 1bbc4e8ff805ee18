//! phone-signin CLI - phone-number sign-in screen for the terminal
//!
//! Usage: phone-signin [COMMAND]
//!
//! Commands:
//!   run     Interactive sign-in screen (default)
//!   check   Validate phone numbers without the UI
//!   replay  Feed a scripted session through the sign-in flow

mod commands;
mod ui;

use anyhow::Result;
use clap::Parser;

use phone_signin::presentation::{Cli, Commands};

fn main() {
    let cli = Cli::parse();
    let json = cli.json;
    let command_name = match &cli.command {
        None | Some(Commands::Run { .. }) => "run",
        Some(Commands::Check { .. }) => "check",
        Some(Commands::Replay { .. }) => "replay",
    };

    match run(cli) {
        Ok(true) => {}
        Ok(false) => std::process::exit(1),
        Err(err) => {
            if json {
                let _ = ui::output::emit(ui::output::error_event(command_name, &err));
            } else {
                eprintln!("Error: {:#}", err);
            }
            std::process::exit(1);
        }
    }
}

/// Dispatch the parsed command. `Ok(false)` means "ran, but report failure".
fn run(cli: Cli) -> Result<bool> {
    let loaded = phone_signin::config::load(cli.config.as_deref())?;
    let ui = crate::ui::context::UiContext::new(cli.json, cli.verbose, cli.color, &loaded.config);

    if !ui.json && !ui.quiet {
        crate::ui::output::print_config_warnings(&loaded.warnings, ui.color, ui.unicode);
    }

    let copy = &loaded.config.screen;
    match cli.command {
        None => commands::run::cmd_run(false, copy, &ui).map(|()| true),
        Some(Commands::Run { plain }) => commands::run::cmd_run(plain, copy, &ui).map(|()| true),
        Some(Commands::Check { numbers }) => commands::check::cmd_check(&numbers, &ui),
        Some(Commands::Replay { script }) => {
            commands::replay::cmd_replay(script.as_deref(), copy, &ui).map(|()| true)
        }
    }
}
