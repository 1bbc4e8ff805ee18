//! Screen value object - the named nodes of the navigation graph
//!
//! - `SignIn`: phone-number entry, the initial screen
//! - `Home`: static landing screen reached after a valid submit

use serde::{Deserialize, Serialize};

/// A named screen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Screen {
    /// Phone-number entry (initial)
    #[default]
    SignIn,
    /// Landing screen
    Home,
}

impl Screen {
    /// Every screen, in declaration order
    pub const ALL: [Screen; 2] = [Screen::SignIn, Screen::Home];

    /// Route name used by the navigation boundary
    pub fn name(&self) -> &'static str {
        match self {
            Screen::SignIn => "SignIn",
            Screen::Home => "Home",
        }
    }
}

impl std::fmt::Display for Screen {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
