//! Console Event Sink
//!
//! Human-readable diagnostics on stderr, gated by `-v` count:
//! - `-v`: submit outcomes and navigation
//! - `-vv`: every keystroke as well

use crate::domain::ports::{SignInEvent, SignInEventSink};
use std::io::{self, Write};
use std::sync::Mutex;

pub struct ConsoleEventSink {
    writer: Mutex<Box<dyn Write + Send>>,
    verbose: u8,
}

impl ConsoleEventSink {
    pub fn stderr(verbose: u8) -> Self {
        Self::with_writer(verbose, io::stderr())
    }

    pub fn with_writer<W: Write + Send + 'static>(verbose: u8, writer: W) -> Self {
        Self {
            writer: Mutex::new(Box::new(writer)),
            verbose,
        }
    }

    fn format(event: &SignInEvent) -> String {
        match event {
            SignInEvent::Started { screen } => format!("[signin] started on {}", screen),
            SignInEvent::TextChanged {
                raw_len,
                displayed_text,
                valid,
                ..
            } => format!(
                "[signin] text changed: {} raw chars -> '{}' ({})",
                raw_len,
                displayed_text,
                if *valid { "valid" } else { "invalid" }
            ),
            SignInEvent::SubmitRejected { displayed_text, .. } => {
                format!("[signin] submit rejected: '{}'", displayed_text)
            }
            SignInEvent::SubmitAccepted => "[signin] submit accepted".to_string(),
            SignInEvent::Navigated { from, to } => {
                format!("[signin] navigate {} -> {}", from, to)
            }
            SignInEvent::Ignored { screen, event } => {
                format!("[signin] ignored {} on {}", event, screen)
            }
            SignInEvent::Finished { screen } => format!("[signin] finished on {}", screen),
        }
    }
}

impl SignInEventSink for ConsoleEventSink {
    fn on_event(&self, event: SignInEvent) {
        if self.verbose == 0 {
            return;
        }
        if matches!(event, SignInEvent::TextChanged { .. }) && self.verbose < 2 {
            return;
        }

        if let Ok(mut writer) = self.writer.lock() {
            let _ = writeln!(writer, "{}", Self::format(&event));
        }
    }

    fn wants_detailed_events(&self) -> bool {
        self.verbose >= 2
    }
}
