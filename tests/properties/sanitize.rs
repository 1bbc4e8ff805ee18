//! Property tests for field sanitization through the entry controller.

use proptest::prelude::*;

use phone_signin::{EntryController, ErrorMessage, PhoneInput};

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 256,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: the field holds only ASCII digits, at most ten of them.
    #[test]
    fn property_sanitized_is_short_ascii_digits(raw in "(?s).{0,64}") {
        let input = PhoneInput::sanitize(&raw);
        prop_assert!(input.len() <= 10);
        prop_assert!(input.as_str().chars().all(|c| c.is_ascii_digit()));
    }

    /// PROPERTY: sanitization keeps the leading digits of the raw text in order.
    #[test]
    fn property_sanitized_is_prefix_of_raw_digits(raw in "(?s).{0,64}") {
        let digits: String = raw.chars().filter(char::is_ascii_digit).collect();
        let input = PhoneInput::sanitize(&raw);
        prop_assert!(digits.starts_with(input.as_str()));
        prop_assert_eq!(input.len(), digits.len().min(10));
    }

    /// PROPERTY: sanitizing the displayed text again changes nothing.
    #[test]
    fn property_sanitize_is_idempotent(raw in "(?s).{0,64}") {
        let once = PhoneInput::sanitize(&raw);
        let twice = PhoneInput::sanitize(once.as_str());
        prop_assert_eq!(once, twice);
    }

    /// PROPERTY: after any edit the live error is shown exactly when the
    /// field is invalid.
    #[test]
    fn property_live_error_tracks_validity(
        edits in prop::collection::vec("[0-9a-z +-]{0,14}", 1..8)
    ) {
        let mut controller = EntryController::new();
        for raw in &edits {
            controller.on_text_changed(raw);
            let expected = if controller.is_valid() {
                ErrorMessage::None
            } else {
                ErrorMessage::LiveFormat
            };
            prop_assert_eq!(controller.error(), expected);
        }
    }

    /// PROPERTY: the same raw text twice leaves the same state.
    #[test]
    fn property_text_change_is_idempotent(raw in "(?s).{0,32}") {
        let mut once = EntryController::new();
        once.on_text_changed(&raw);
        let mut twice = once.clone();
        twice.on_text_changed(&raw);
        prop_assert_eq!(once, twice);
    }
}
