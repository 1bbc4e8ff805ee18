//! Keyboard input handling and the interactive sign-in loop.
//!
//! Keys are mapped to [`FieldAction`]s, which [`field_edit`] turns into the
//! session's [`UserEvent`]s. The field reports its whole raw text on every
//! edit, the same way a native text input does.

use std::io::{self, Write};

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use phone_signin::config::ScreenCopy;
use phone_signin::{Screen, SigninResult, SignInSession, UserEvent};

use crate::ui::context::UiContext;
use crate::ui::views::home::render_home;
use crate::ui::views::sign_in::{render_sign_in, render_sign_in_help};

/// What a key press asks the field to do
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldAction {
    Insert(char),
    DeleteBack,
    Paste(String),
    Submit,
    Quit,
}

/// Convert a keyboard event to a FieldAction
pub fn key_to_action(key: KeyEvent) -> Option<FieldAction> {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('c') | KeyCode::Char('d') => Some(FieldAction::Quit),
            _ => None,
        };
    }

    match key.code {
        KeyCode::Char(c) => Some(FieldAction::Insert(c)),
        KeyCode::Backspace => Some(FieldAction::DeleteBack),
        KeyCode::Enter => Some(FieldAction::Submit),
        KeyCode::Esc => Some(FieldAction::Quit),
        _ => None,
    }
}

/// Event the field emits for `action`, given the text it currently shows.
///
/// Returns `None` when the action leaves the field untouched.
pub fn field_edit(displayed: &str, action: &FieldAction) -> Option<UserEvent> {
    match action {
        FieldAction::Insert(c) => Some(UserEvent::TextChanged(format!("{displayed}{c}"))),
        FieldAction::Paste(text) => Some(UserEvent::TextChanged(format!("{displayed}{text}"))),
        FieldAction::DeleteBack => {
            let mut chars = displayed.chars();
            chars.next_back()?;
            Some(UserEvent::TextChanged(chars.as_str().to_string()))
        }
        FieldAction::Submit => Some(UserEvent::SubmitPressed),
        FieldAction::Quit => None,
    }
}

/// Run the sign-in screen interactively.
///
/// Returns the screen the user ended on: `Home` after a successful submit,
/// `SignIn` if they quit first.
pub fn run_interactive(
    session: &mut SignInSession,
    copy: &ScreenCopy,
    ui: &UiContext,
) -> SigninResult<Screen> {
    use crossterm::{cursor, event::EnableBracketedPaste, execute, terminal};

    terminal::enable_raw_mode()?;
    let mut stdout = io::stdout();
    if let Err(e) = execute!(stdout, EnableBracketedPaste, cursor::Hide) {
        let _ = terminal::disable_raw_mode();
        return Err(e.into());
    }

    let result = drive(session, copy, ui, &mut stdout);

    // Restore terminal even if the loop failed
    let _ = execute!(
        stdout,
        crossterm::event::DisableBracketedPaste,
        cursor::Show
    );
    let _ = terminal::disable_raw_mode();
    println!();

    result
}

fn drive(
    session: &mut SignInSession,
    copy: &ScreenCopy,
    ui: &UiContext,
    stdout: &mut io::Stdout,
) -> SigninResult<Screen> {
    use crossterm::event::{self, Event};

    redraw(stdout, session, copy, ui)?;

    loop {
        let action = match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => key_to_action(key),
            Event::Paste(text) => Some(FieldAction::Paste(text)),
            Event::Resize(_, _) => {
                redraw(stdout, session, copy, ui)?;
                None
            }
            _ => None,
        };
        let Some(action) = action else {
            continue;
        };

        if action == FieldAction::Quit {
            return Ok(session.current_screen());
        }

        let displayed = session.view().displayed_text;
        if let Some(user_event) = field_edit(&displayed, &action) {
            let step = session.handle(user_event)?;
            redraw(stdout, session, copy, ui)?;
            if step.navigated.is_some() {
                wait_for_any_key()?;
                return Ok(step.screen);
            }
        }
    }
}

fn wait_for_any_key() -> io::Result<()> {
    use crossterm::event::{self, Event};

    loop {
        if let Event::Key(key) = event::read()? {
            if key.kind == KeyEventKind::Press {
                return Ok(());
            }
        }
    }
}

fn redraw(
    stdout: &mut io::Stdout,
    session: &SignInSession,
    copy: &ScreenCopy,
    ui: &UiContext,
) -> io::Result<()> {
    use crossterm::{cursor, execute, terminal::{self, ClearType}};

    execute!(stdout, terminal::Clear(ClearType::All), cursor::MoveTo(0, 0))?;

    let body = match session.current_screen() {
        Screen::SignIn => {
            let mut body = render_sign_in(&session.view(), copy, ui.color, ui.unicode);
            body.push('\n');
            body.push_str(&render_sign_in_help(ui.color));
            body.push('\n');
            body
        }
        Screen::Home => {
            let mut body = render_home(copy, ui.color, ui.unicode);
            body.push('\n');
            body.push_str("press any key to exit\n");
            body
        }
    };

    // Raw mode needs explicit carriage returns
    for line in body.lines() {
        write!(stdout, "{}\r\n", line)?;
    }
    stdout.flush()
}
