//! Local phone number format check
//!
//! A local number is ten ASCII digits: a leading `0`, a carrier digit from
//! `{3, 5, 7, 8, 9}`, then eight more digits.

use once_cell::sync::Lazy;
use regex::Regex;

/// Anchored pattern for a local mobile number.
///
/// `[0-9]` instead of `\d`: the regex crate's `\d` is Unicode-aware and would
/// accept digits from other scripts.
static LOCAL_PHONE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^0[35789][0-9]{8}$").expect("local phone pattern is valid"));

/// Number of digits in a local phone number.
pub const LOCAL_PHONE_LEN: usize = 10;

/// Returns true if `digits` is a well-formed local phone number.
///
/// Total over any input: empty, over-long and non-digit strings are simply
/// rejected. Callers are expected to have stripped non-digits already.
pub fn is_valid_local_phone_number(digits: &str) -> bool {
    LOCAL_PHONE_RE.is_match(digits)
}
