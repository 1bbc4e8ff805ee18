//! Navigation graph
//!
//! Screens are nodes, allowed transitions are directed edges. The
//! [`Navigator`] owns the current screen and moves it only along an edge
//! named by a [`NavigationIntent`].

use std::collections::HashSet;

use thiserror::Error;

use crate::domain::value_objects::{NavigationIntent, Screen};

/// Rejected navigation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum NavigationError {
    /// No edge from the current screen to the requested one
    #[error("no route from '{from}' to '{to}'")]
    NoRoute { from: Screen, to: Screen },
}

/// Directed graph of screens
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavigationGraph {
    initial: Screen,
    edges: HashSet<(Screen, Screen)>,
}

impl NavigationGraph {
    /// Empty graph starting at `initial`
    pub fn new(initial: Screen) -> Self {
        Self {
            initial,
            edges: HashSet::new(),
        }
    }

    /// The sign-in flow: `SignIn -> Home`, nothing back.
    pub fn sign_in_flow() -> Self {
        Self::new(Screen::SignIn).with_edge(Screen::SignIn, Screen::Home)
    }

    pub fn with_edge(mut self, from: Screen, to: Screen) -> Self {
        self.edges.insert((from, to));
        self
    }

    pub fn initial(&self) -> Screen {
        self.initial
    }

    pub fn has_edge(&self, from: Screen, to: Screen) -> bool {
        self.edges.contains(&(from, to))
    }

    /// Screens reachable in one step from `from`, in declaration order
    pub fn successors(&self, from: Screen) -> Vec<Screen> {
        Screen::ALL
            .into_iter()
            .filter(|to| self.has_edge(from, *to))
            .collect()
    }

    /// True when no edge leaves `screen`
    pub fn is_terminal(&self, screen: Screen) -> bool {
        self.successors(screen).is_empty()
    }
}

impl Default for NavigationGraph {
    fn default() -> Self {
        Self::sign_in_flow()
    }
}

/// Current position in a [`NavigationGraph`]
#[derive(Debug, Clone)]
pub struct Navigator {
    graph: NavigationGraph,
    current: Screen,
}

impl Navigator {
    pub fn new(graph: NavigationGraph) -> Self {
        let current = graph.initial();
        Self { graph, current }
    }

    pub fn current(&self) -> Screen {
        self.current
    }

    pub fn graph(&self) -> &NavigationGraph {
        &self.graph
    }

    /// Follow `intent` from the current screen.
    ///
    /// On error the current screen is unchanged.
    pub fn navigate(&mut self, intent: NavigationIntent) -> Result<Screen, NavigationError> {
        let from = self.current;
        let to = intent.target;
        if !self.graph.has_edge(from, to) {
            return Err(NavigationError::NoRoute { from, to });
        }
        self.current = to;
        Ok(to)
    }
}

impl Default for Navigator {
    fn default() -> Self {
        Self::new(NavigationGraph::default())
    }
}
