//! Scenario: what the field shows while the user types or pastes
//!
//! Non-digits are dropped and anything past ten digits is cut off, so the
//! displayed text is always something the validator can judge.

use phone_signin::{Screen, UserEvent, LIVE_FORMAT_ERROR};

use crate::common::*;

#[test]
fn scenario_separators_are_stripped_from_pasted_number() {
    let (mut session, _sink) = recorded_session();

    session
        .handle(UserEvent::TextChanged("091-234 5678".to_string()))
        .unwrap();

    assert_eq!(session.view().displayed_text, "0912345678");
    assert!(session.controller().is_valid());
}

#[test]
fn scenario_letters_mixed_in_are_dropped() {
    let (mut session, _sink) = recorded_session();

    session
        .handle(UserEvent::TextChanged("09a12b".to_string()))
        .unwrap();

    assert_eq!(session.view().displayed_text, "0912");
    assert_eq!(session.view().error_text.as_deref(), Some(LIVE_FORMAT_ERROR));
}

#[test]
fn scenario_extra_digits_are_cut_at_ten() {
    let (mut session, _sink) = recorded_session();

    session
        .handle(UserEvent::TextChanged("091234567899".to_string()))
        .unwrap();

    assert_eq!(session.view().displayed_text, "0912345678");
    assert!(session.controller().is_valid());
    assert_eq!(session.view().error_text, None);
}

#[test]
fn scenario_typing_one_key_at_a_time() {
    let (mut session, _sink) = recorded_session();
    let mut field = String::new();

    for c in "0912345678".chars() {
        field.push(c);
        session.handle(UserEvent::TextChanged(field.clone())).unwrap();
        let view = session.view();
        if field.len() < 10 {
            assert_eq!(view.error_text.as_deref(), Some(LIVE_FORMAT_ERROR));
        } else {
            assert_eq!(view.error_text, None);
        }
    }

    // An eleventh key press is swallowed by the length cap
    field.push('9');
    session.handle(UserEvent::TextChanged(field)).unwrap();
    assert_eq!(session.view().displayed_text, "0912345678");
    assert_eq!(session.current_screen(), Screen::SignIn);
}

#[test]
fn scenario_clearing_the_field_shows_live_error() {
    let (mut session, _sink) = recorded_session();
    session
        .handle(UserEvent::TextChanged("0912345678".to_string()))
        .unwrap();

    session.handle(UserEvent::TextChanged(String::new())).unwrap();

    assert_eq!(session.view().displayed_text, "");
    assert_eq!(session.view().error_text.as_deref(), Some(LIVE_FORMAT_ERROR));
}
