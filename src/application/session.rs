//! Sign-in session
//!
//! Composes the entry controller with a navigator. User events are routed to
//! the screen currently shown: only `SignIn` reacts to input, `Home` is a
//! static display. Every step is reported to the event sink.

use std::sync::Arc;

use crate::domain::entities::{ControllerOutcome, EntryController, SignInView};
use crate::domain::ports::{SignInEvent, SignInEventSink};
use crate::domain::services::{NavigationError, NavigationGraph, Navigator};
use crate::domain::value_objects::Screen;

/// Input reported by the display surface
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UserEvent {
    /// The field's full raw text after an edit
    TextChanged(String),
    /// The activate control was pressed
    SubmitPressed,
}

impl UserEvent {
    pub fn name(&self) -> &'static str {
        match self {
            UserEvent::TextChanged(_) => "text_changed",
            UserEvent::SubmitPressed => "submit_pressed",
        }
    }
}

/// Result of one handled event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Step {
    /// Screen shown after the event
    pub screen: Screen,
    /// Set when this event caused a navigation
    pub navigated: Option<Screen>,
}

pub struct SignInSession {
    controller: EntryController,
    navigator: Navigator,
    events: Arc<dyn SignInEventSink>,
}

impl SignInSession {
    /// Session over the standard `SignIn -> Home` flow
    pub fn new(events: Arc<dyn SignInEventSink>) -> Self {
        Self::with_graph(NavigationGraph::sign_in_flow(), events)
    }

    pub fn with_graph(graph: NavigationGraph, events: Arc<dyn SignInEventSink>) -> Self {
        let navigator = Navigator::new(graph);
        events.on_event(SignInEvent::Started {
            screen: navigator.current(),
        });
        Self {
            controller: EntryController::new(),
            navigator,
            events,
        }
    }

    pub fn current_screen(&self) -> Screen {
        self.navigator.current()
    }

    pub fn controller(&self) -> &EntryController {
        &self.controller
    }

    /// Render tuple of the sign-in field
    pub fn view(&self) -> SignInView {
        self.controller.view()
    }

    /// True once the current screen has no outgoing edge
    pub fn is_done(&self) -> bool {
        self.navigator.graph().is_terminal(self.current_screen())
    }

    /// Process one event to completion.
    pub fn handle(&mut self, event: UserEvent) -> Result<Step, NavigationError> {
        let screen = self.current_screen();
        if screen != Screen::SignIn {
            self.events.on_event(SignInEvent::Ignored {
                screen,
                event: event.name(),
            });
            return Ok(Step {
                screen,
                navigated: None,
            });
        }

        let outcome = match &event {
            UserEvent::TextChanged(raw) => self.controller.on_text_changed(raw),
            UserEvent::SubmitPressed => self.controller.on_submit(),
        };

        let navigated = match outcome {
            ControllerOutcome::Edited { valid } => {
                if self.events.wants_detailed_events() {
                    let view = self.controller.view();
                    let raw_len = match &event {
                        UserEvent::TextChanged(raw) => raw.chars().count(),
                        UserEvent::SubmitPressed => 0,
                    };
                    self.events.on_event(SignInEvent::TextChanged {
                        raw_len,
                        displayed_text: view.displayed_text,
                        valid,
                        error: view.error_text,
                    });
                }
                None
            }
            ControllerOutcome::Rejected => {
                let view = self.controller.view();
                self.events.on_event(SignInEvent::SubmitRejected {
                    displayed_text: view.displayed_text,
                    error: view.error_text.unwrap_or_default(),
                });
                None
            }
            ControllerOutcome::Navigate(intent) => {
                self.events.on_event(SignInEvent::SubmitAccepted);
                let to = self.navigator.navigate(intent)?;
                self.controller.confirm_navigated();
                self.events.on_event(SignInEvent::Navigated { from: screen, to });
                Some(to)
            }
            ControllerOutcome::Ignored => {
                self.events.on_event(SignInEvent::Ignored {
                    screen,
                    event: event.name(),
                });
                None
            }
        };

        Ok(Step {
            screen: self.current_screen(),
            navigated,
        })
    }

    /// Close the session, reporting the screen it ended on
    pub fn finish(self) -> Screen {
        let screen = self.current_screen();
        self.events.on_event(SignInEvent::Finished { screen });
        screen
    }
}
