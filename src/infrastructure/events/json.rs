//! JSON Event Sink
//!
//! Outputs sign-in events as NDJSON for scripting and CI consumption.

use crate::domain::ports::{SignInEvent, SignInEventSink};
use std::io::{self, Write};
use std::sync::Mutex;

/// Event sink that outputs NDJSON events to stdout
pub struct JsonEventSink {
    /// Mutex to ensure thread-safe writes
    writer: Mutex<Box<dyn Write + Send>>,
    command: &'static str,
}

impl JsonEventSink {
    /// Create a new JSON event sink writing to stdout
    pub fn stdout(command: &'static str) -> Self {
        Self::with_writer(command, io::stdout())
    }

    /// Create a JSON event sink writing to a custom writer
    pub fn with_writer<W: Write + Send + 'static>(command: &'static str, writer: W) -> Self {
        Self {
            writer: Mutex::new(Box::new(writer)),
            command,
        }
    }

    fn write_event(&self, event: serde_json::Value) {
        if let Ok(mut writer) = self.writer.lock() {
            let _ = writeln!(writer, "{}", event);
            let _ = writer.flush();
        }
    }
}

impl SignInEventSink for JsonEventSink {
    fn on_event(&self, event: SignInEvent) {
        let command = self.command;
        let json = match event {
            SignInEvent::Started { screen } => {
                serde_json::json!({
                    "event": "start",
                    "command": command,
                    "screen": screen,
                    "version": env!("CARGO_PKG_VERSION"),
                })
            }

            SignInEvent::TextChanged {
                raw_len,
                displayed_text,
                valid,
                error,
            } => {
                serde_json::json!({
                    "event": "text_changed",
                    "command": command,
                    "raw_len": raw_len,
                    "displayed_text": displayed_text,
                    "valid": valid,
                    "error_text": error,
                })
            }

            SignInEvent::SubmitRejected {
                displayed_text,
                error,
            } => {
                serde_json::json!({
                    "event": "submit_rejected",
                    "command": command,
                    "displayed_text": displayed_text,
                    "error_text": error,
                })
            }

            SignInEvent::SubmitAccepted => {
                serde_json::json!({
                    "event": "submit_accepted",
                    "command": command,
                })
            }

            SignInEvent::Navigated { from, to } => {
                serde_json::json!({
                    "event": "navigate",
                    "command": command,
                    "from": from,
                    "to": to,
                })
            }

            SignInEvent::Ignored { screen, event } => {
                serde_json::json!({
                    "event": "ignored",
                    "command": command,
                    "screen": screen,
                    "input": event,
                })
            }

            SignInEvent::Finished { screen } => {
                serde_json::json!({
                    "event": "complete",
                    "command": command,
                    "screen": screen,
                    "signed_in": screen == crate::domain::value_objects::Screen::Home,
                })
            }
        };

        self.write_event(json);
    }
}
