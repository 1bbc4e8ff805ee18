use std::io::Read;
use std::path::Path;

use anyhow::{Context, Result};

use phone_signin::application::ScriptStep;
use phone_signin::config::ScreenCopy;
use phone_signin::presentation::create_event_sink;
use phone_signin::{ReplayScript, Screen, SignInSession, UserEvent};

use crate::ui::context::UiContext;
use crate::ui::primitives::icon::Icon;
use crate::ui::primitives::text::ColoredText;
use crate::ui::views::home::render_home;
use crate::ui::views::sign_in::render_sign_in;

pub fn cmd_replay(script: Option<&Path>, copy: &ScreenCopy, ui: &UiContext) -> Result<()> {
    let content = read_script(script)?;
    let script = ReplayScript::parse(&content)?;

    let events = create_event_sink(ui.json, ui.verbose, "replay");
    let mut session = SignInSession::new(events);

    if !ui.json {
        print!("{}", render_screen(&session, copy, ui));
    }

    for step in script.steps() {
        let result = session
            .handle(step.event.clone())
            .with_context(|| format!("script line {}", step.line))?;
        if !ui.json {
            println!();
            if !ui.quiet {
                println!("{}", describe_step(step, ui));
            }
            if result.screen == Screen::Home && result.navigated.is_none() {
                // Home ignores input; nothing new to draw
                continue;
            }
            print!("{}", render_screen(&session, copy, ui));
        }
    }

    let screen = session.finish();
    if !ui.json && !ui.quiet {
        println!();
        println!("{}", summary_line(screen, ui));
    }
    Ok(())
}

fn read_script(path: Option<&Path>) -> Result<String> {
    match path {
        Some(p) if p != Path::new("-") => std::fs::read_to_string(p)
            .with_context(|| format!("failed to read replay script {}", p.display())),
        _ => {
            let mut content = String::new();
            std::io::stdin()
                .read_to_string(&mut content)
                .context("failed to read replay script from stdin")?;
            Ok(content)
        }
    }
}

fn render_screen(session: &SignInSession, copy: &ScreenCopy, ui: &UiContext) -> String {
    match session.current_screen() {
        Screen::SignIn => render_sign_in(&session.view(), copy, ui.color, ui.unicode),
        Screen::Home => render_home(copy, ui.color, ui.unicode),
    }
}

fn describe_step(step: &ScriptStep, ui: &UiContext) -> String {
    let text = match &step.event {
        UserEvent::TextChanged(raw) => format!("type '{}'", raw),
        UserEvent::SubmitPressed => "submit".to_string(),
    };
    format!(
        "{} {}",
        Icon::Arrow.colored(ui.color, ui.unicode),
        ColoredText::dim(format!("line {}: {}", step.line, text)).render(ui.color)
    )
}

fn summary_line(screen: Screen, ui: &UiContext) -> String {
    match screen {
        Screen::Home => format!(
            "{} {}",
            Icon::Success.colored(ui.color, ui.unicode),
            ColoredText::success("Final screen: Home (signed in)").render(ui.color)
        ),
        Screen::SignIn => format!(
            "{} {}",
            Icon::Warning.colored(ui.color, ui.unicode),
            ColoredText::warning("Final screen: SignIn (not signed in)").render(ui.color)
        ),
    }
}
