//! Scenario: typing a number and pressing the continue button
//!
//! Each test is one of the reference journeys: a valid number typed, an
//! invalid number typed, then submit with a valid, a wrong-prefix and an
//! empty field.

use phone_signin::{
    Screen, SignInEvent, UserEvent, LIVE_FORMAT_ERROR, SUBMIT_FORMAT_ERROR,
};

use crate::common::*;

/// SCENARIO A: a well-formed number typed in one go
#[test]
fn scenario_valid_number_typed_shows_no_error() {
    let (mut session, sink) = recorded_session();

    let step = session
        .handle(UserEvent::TextChanged("0912345678".to_string()))
        .unwrap();

    assert_eq!(step.navigated, None);
    assert_eq!(step.screen, Screen::SignIn);
    assert!(session.controller().is_valid());
    assert_eq!(session.view().error_text, None);
    assert_eq!(sink.navigations(), 0);
}

/// SCENARIO B: a number with the wrong leading digit
#[test]
fn scenario_invalid_number_typed_shows_live_error() {
    let (mut session, _sink) = recorded_session();

    session
        .handle(UserEvent::TextChanged("1234567890".to_string()))
        .unwrap();

    assert!(!session.controller().is_valid());
    assert_eq!(session.view().error_text.as_deref(), Some(LIVE_FORMAT_ERROR));
}

/// SCENARIO C: submit with a valid number navigates to Home exactly once
#[test]
fn scenario_valid_submit_navigates_home_once() {
    let (mut session, sink) = recorded_session();
    session
        .handle(UserEvent::TextChanged("0912345678".to_string()))
        .unwrap();

    let step = session.handle(UserEvent::SubmitPressed).unwrap();
    assert_eq!(step.navigated, Some(Screen::Home));
    assert_eq!(session.view().error_text, None);

    // A second press lands on Home, which ignores it
    let again = session.handle(UserEvent::SubmitPressed).unwrap();
    assert_eq!(again.navigated, None);
    assert_eq!(again.screen, Screen::Home);

    assert_eq!(sink.navigations(), 1);
    assert!(sink.events().contains(&SignInEvent::Navigated {
        from: Screen::SignIn,
        to: Screen::Home,
    }));
    assert_eq!(session.finish(), Screen::Home);
}

/// SCENARIO D: submit with the "02" prefix is rejected
#[test]
fn scenario_wrong_prefix_submit_shows_submit_error() {
    let (mut session, sink) = recorded_session();
    session
        .handle(UserEvent::TextChanged("0212345678".to_string()))
        .unwrap();

    let step = session.handle(UserEvent::SubmitPressed).unwrap();

    assert_eq!(step.navigated, None);
    assert_eq!(session.current_screen(), Screen::SignIn);
    assert_eq!(
        session.view().error_text.as_deref(),
        Some(SUBMIT_FORMAT_ERROR)
    );
    assert_eq!(sink.navigations(), 0);
    assert!(sink.events().iter().any(|e| matches!(
        e,
        SignInEvent::SubmitRejected { displayed_text, .. } if displayed_text == "0212345678"
    )));
}

/// SCENARIO E: submit on an empty field
#[test]
fn scenario_empty_submit_shows_submit_error() {
    let (mut session, sink) = recorded_session();

    let step = session.handle(UserEvent::SubmitPressed).unwrap();

    assert_eq!(step.navigated, None);
    assert_eq!(session.view().displayed_text, "");
    assert_eq!(
        session.view().error_text.as_deref(),
        Some(SUBMIT_FORMAT_ERROR)
    );
    assert_eq!(sink.navigations(), 0);
}

/// SCENARIO: rejected, corrected, then accepted
#[test]
fn scenario_correction_after_rejection() {
    let (mut session, sink) = recorded_session();
    session
        .handle(UserEvent::TextChanged("0212345678".to_string()))
        .unwrap();
    session.handle(UserEvent::SubmitPressed).unwrap();

    // Editing replaces the submit error with the live verdict
    session
        .handle(UserEvent::TextChanged("031234567".to_string()))
        .unwrap();
    assert_eq!(session.view().error_text.as_deref(), Some(LIVE_FORMAT_ERROR));

    session
        .handle(UserEvent::TextChanged("0312345678".to_string()))
        .unwrap();
    assert_eq!(session.view().error_text, None);

    let step = session.handle(UserEvent::SubmitPressed).unwrap();
    assert_eq!(step.navigated, Some(Screen::Home));
    assert_eq!(sink.navigations(), 1);
}
