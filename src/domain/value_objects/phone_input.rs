//! PhoneInput value object
//!
//! The digits currently held by the sign-in field. Built only through
//! [`PhoneInput::sanitize`], so it never contains a non-digit and never
//! exceeds [`LOCAL_PHONE_LEN`] characters.

use serde::Serialize;

use crate::domain::services::validator::{is_valid_local_phone_number, LOCAL_PHONE_LEN};

/// Sanitized field content: 0 to 10 ASCII digits
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct PhoneInput(String);

impl PhoneInput {
    /// Empty field
    pub fn empty() -> Self {
        Self::default()
    }

    /// Keep the ASCII digits of `raw`, in order, capped at the first ten.
    pub fn sanitize(raw: &str) -> Self {
        Self(
            raw.chars()
                .filter(char::is_ascii_digit)
                .take(LOCAL_PHONE_LEN)
                .collect(),
        )
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Fresh validation verdict. Not cached.
    pub fn is_valid(&self) -> bool {
        is_valid_local_phone_number(&self.0)
    }
}

impl AsRef<str> for PhoneInput {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for PhoneInput {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}
