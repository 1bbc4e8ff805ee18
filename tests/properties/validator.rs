//! Property tests for the local phone-number format check.

use proptest::prelude::*;

use phone_signin::is_valid_local_phone_number;

/// Character-level restatement of the format
fn reference_rule(s: &str) -> bool {
    let bytes = s.as_bytes();
    bytes.len() == 10
        && bytes.iter().all(u8::is_ascii_digit)
        && bytes[0] == b'0'
        && matches!(bytes[1], b'3' | b'5' | b'7' | b'8' | b'9')
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 256,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: the validator agrees with the character rule on any string.
    #[test]
    fn property_matches_reference_rule_on_arbitrary_input(s in "(?s).{0,16}") {
        prop_assert_eq!(is_valid_local_phone_number(&s), reference_rule(&s));
    }

    /// PROPERTY: the validator agrees with the character rule on digit strings,
    /// where almost every interesting case lives.
    #[test]
    fn property_matches_reference_rule_on_digits(s in "[0-9]{0,12}") {
        prop_assert_eq!(is_valid_local_phone_number(&s), reference_rule(&s));
    }

    /// PROPERTY: every well-formed number is accepted.
    #[test]
    fn property_accepts_all_well_formed(
        second in prop::sample::select(vec!['3', '5', '7', '8', '9']),
        rest in "[0-9]{8}"
    ) {
        let number = format!("0{second}{rest}");
        prop_assert!(is_valid_local_phone_number(&number));
    }

    /// PROPERTY: a wrong second digit is always rejected.
    #[test]
    fn property_rejects_other_prefixes(
        second in prop::sample::select(vec!['0', '1', '2', '4', '6']),
        rest in "[0-9]{8}"
    ) {
        let number = format!("0{second}{rest}");
        prop_assert!(!is_valid_local_phone_number(&number));
    }

    /// PROPERTY: non-ASCII digits never count as digits.
    #[test]
    fn property_rejects_unicode_digits(rest in "[٠-٩]{8}") {
        let number = format!("09{rest}");
        prop_assert!(!is_valid_local_phone_number(&number));
    }
}
