use std::io::{self, Write};

use phone_signin::config::ConfigWarning;

use crate::ui::primitives::icon::Icon;
use crate::ui::primitives::text::ColoredText;

/// Write one NDJSON line to `out`.
pub fn write_event(out: &mut impl Write, event: &serde_json::Value) -> io::Result<()> {
    serde_json::to_writer(&mut *out, event)?;
    out.write_all(b"\n")
}

/// Write one NDJSON line to stdout.
pub fn emit(event: serde_json::Value) -> io::Result<()> {
    let mut out = io::stdout().lock();
    write_event(&mut out, &event)?;
    out.flush()
}

pub fn print_config_warnings(warnings: &[ConfigWarning], supports_color: bool, supports_unicode: bool) {
    for w in warnings {
        eprintln!(
            "{} {}",
            Icon::Warning.colored(supports_color, supports_unicode),
            ColoredText::warning(w.to_string()).render(supports_color)
        );
        if let Some(suggestion) = &w.suggestion {
            eprintln!("   Did you mean '{}'?", suggestion);
        }
    }
}

/// Error event printed in place of the human message under `--json`
pub fn error_event(command: &str, err: &anyhow::Error) -> serde_json::Value {
    serde_json::json!({
        "event": "error",
        "command": command,
        "message": format!("{:#}", err),
    })
}
