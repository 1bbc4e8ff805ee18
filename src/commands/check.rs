use anyhow::Result;

use phone_signin::SUBMIT_FORMAT_ERROR;

use crate::ui::context::UiContext;
use crate::ui::output::{emit, write_event};
use crate::ui::views::check::{render_check, CheckLine};

/// Validate each argument. Returns `true` when every number is valid.
pub fn cmd_check(numbers: &[String], ui: &UiContext) -> Result<bool> {
    let lines: Vec<CheckLine> = numbers.iter().map(|raw| CheckLine::evaluate(raw)).collect();
    let all_valid = lines.iter().all(|l| l.valid);

    if ui.json {
        let mut out = std::io::stdout().lock();
        for line in &lines {
            write_event(&mut out, &check_event(line))?;
        }
        drop(out);
        emit(serde_json::json!({
            "event": "complete",
            "command": "check",
            "checked": lines.len(),
            "invalid": lines.iter().filter(|l| !l.valid).count(),
        }))?;
    } else {
        print!("{}", render_check(&lines, ui.color, ui.unicode));
    }

    Ok(all_valid)
}

fn check_event(line: &CheckLine) -> serde_json::Value {
    serde_json::json!({
        "event": "check",
        "command": "check",
        "input": line.raw,
        "digits": line.input,
        "valid": line.valid,
        "error_text": if line.valid { None } else { Some(SUBMIT_FORMAT_ERROR) },
    })
}
