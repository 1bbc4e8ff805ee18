//! Dependency wiring
//!
//! Picks the event sink for a run from the output flags.

use std::sync::Arc;

use crate::domain::ports::{NoopEventSink, SignInEventSink};
use crate::infrastructure::{ConsoleEventSink, JsonEventSink};

/// Event sink for `command`.
///
/// `--json` wins over verbosity: NDJSON goes to stdout and nothing else is
/// printed there. Otherwise `-v`/`-vv` diagnostics go to stderr.
pub fn create_event_sink(json: bool, verbose: u8, command: &'static str) -> Arc<dyn SignInEventSink> {
    if json {
        Arc::new(JsonEventSink::stdout(command))
    } else if verbose > 0 {
        Arc::new(ConsoleEventSink::stderr(verbose))
    } else {
        Arc::new(NoopEventSink)
    }
}
