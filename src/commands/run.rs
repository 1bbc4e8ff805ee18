use anyhow::Result;

use phone_signin::config::ScreenCopy;
use phone_signin::presentation::create_event_sink;
use phone_signin::{Screen, SigninError, SignInSession, Step, UserEvent};

use crate::ui::context::UiContext;
use crate::ui::primitives::icon::Icon;
use crate::ui::primitives::text::ColoredText;
use crate::ui::theme::SigninTheme;
use crate::ui::views::home::render_home;

pub fn cmd_run(plain: bool, copy: &ScreenCopy, ui: &UiContext) -> Result<()> {
    if ui.json {
        anyhow::bail!(
            "--json is not supported for the interactive screen; use 'phone-signin replay --json'"
        );
    }
    if !ui.caps.is_interactive() {
        return Err(SigninError::NotATerminal.into());
    }

    let events = create_event_sink(false, ui.verbose, "run");
    let mut session = SignInSession::new(events);

    let screen = if plain {
        run_plain(&mut session, copy, ui)?
    } else {
        crate::ui::input::run_interactive(&mut session, copy, ui)?
    };

    if screen == Screen::SignIn && !plain {
        println!("{}", ColoredText::dim("Sign-in cancelled").render(ui.color));
    }
    session.finish();
    Ok(())
}

/// Line mode: every entered line replaces the field text, then submits.
fn run_plain(session: &mut SignInSession, copy: &ScreenCopy, ui: &UiContext) -> Result<Screen> {
    use dialoguer::Input;

    println!("{}", ColoredText::plain(&copy.title).bold().render(ui.color));
    println!("{}\n", ColoredText::dim(&copy.instruction).render(ui.color));

    let theme = SigninTheme::new(ui.unicode);
    loop {
        let line: String = Input::with_theme(&theme)
            .with_prompt(&copy.placeholder)
            .allow_empty(true)
            .interact_text()?;

        let step = submit_line(session, &line)?;
        if step.navigated.is_some() {
            println!();
            print!("{}", render_home(copy, ui.color, ui.unicode));
            return Ok(step.screen);
        }

        if let Some(error) = session.view().error_text {
            println!(
                "{} {}",
                Icon::Error.colored(ui.color, ui.unicode),
                ColoredText::error(error).render(ui.color)
            );
        }
    }
}

fn submit_line(session: &mut SignInSession, line: &str) -> Result<Step> {
    session.handle(UserEvent::TextChanged(line.to_string()))?;
    Ok(session.handle(UserEvent::SubmitPressed)?)
}
