//! NavigationIntent - one-shot request to move to another screen

use serde::Serialize;

use super::Screen;

/// Request to navigate to `target`.
///
/// Carries only the destination; nothing from the sign-in field travels with
/// it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct NavigationIntent {
    pub target: Screen,
}

impl NavigationIntent {
    pub fn to(target: Screen) -> Self {
        Self { target }
    }

    /// The only intent the sign-in controller emits
    pub fn home() -> Self {
        Self::to(Screen::Home)
    }
}
