//! Property tests for the sign-in session's navigation.

use std::sync::Arc;

use proptest::prelude::*;

use phone_signin::{NoopEventSink, Screen, SignInSession, UserEvent};

fn user_event() -> impl Strategy<Value = UserEvent> {
    prop_oneof![
        3 => "[0-9 ]{0,12}".prop_map(UserEvent::TextChanged),
        1 => Just(UserEvent::SubmitPressed),
    ]
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 256,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: a session navigates at most once, and only on a submit
    /// whose field is valid at that moment.
    #[test]
    fn property_navigates_at_most_once(
        events in prop::collection::vec(user_event(), 0..24)
    ) {
        let mut session = SignInSession::new(Arc::new(NoopEventSink));
        let mut navigations = 0;

        for event in events {
            let was_valid = session.controller().is_valid();
            let on_sign_in = session.current_screen() == Screen::SignIn;
            let is_submit = event == UserEvent::SubmitPressed;

            let step = session.handle(event).unwrap();
            if let Some(to) = step.navigated {
                navigations += 1;
                prop_assert_eq!(to, Screen::Home);
                prop_assert!(is_submit && was_valid && on_sign_in);
            }
        }

        prop_assert!(navigations <= 1);
        prop_assert_eq!(navigations == 1, session.current_screen() == Screen::Home);
    }

    /// PROPERTY: text edits alone never leave the sign-in screen.
    #[test]
    fn property_typing_never_navigates(
        edits in prop::collection::vec("(?s).{0,16}", 0..16)
    ) {
        let mut session = SignInSession::new(Arc::new(NoopEventSink));
        for raw in edits {
            let step = session.handle(UserEvent::TextChanged(raw)).unwrap();
            prop_assert_eq!(step.navigated, None);
        }
        prop_assert_eq!(session.current_screen(), Screen::SignIn);
    }
}
