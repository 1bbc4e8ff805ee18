use phone_signin::PhoneInput;

use crate::ui::primitives::icon::Icon;
use crate::ui::primitives::text::ColoredText;

/// One `check` argument after sanitizing
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckLine {
    pub raw: String,
    pub input: PhoneInput,
    pub valid: bool,
}

impl CheckLine {
    pub fn evaluate(raw: &str) -> Self {
        let input = PhoneInput::sanitize(raw);
        let valid = input.is_valid();
        Self {
            raw: raw.to_string(),
            input,
            valid,
        }
    }
}

pub fn render_check(lines: &[CheckLine], supports_color: bool, supports_unicode: bool) -> String {
    let mut out = String::new();
    for line in lines {
        let icon = if line.valid { Icon::Success } else { Icon::Error };
        out.push_str(&icon.colored(supports_color, supports_unicode));
        out.push(' ');

        let shown = if line.input.is_empty() {
            "(no digits)".to_string()
        } else {
            line.input.to_string()
        };
        out.push_str(&shown);

        if line.input.as_str() != line.raw {
            out.push_str(&format!(
                " {}",
                ColoredText::dim(format!("(from '{}')", line.raw)).render(supports_color)
            ));
        }
        out.push('\n');
    }

    let invalid = lines.iter().filter(|l| !l.valid).count();
    out.push('\n');
    out.push_str(&format!(
        "Summary: {} valid, {} invalid\n",
        lines.len() - invalid,
        invalid
    ));
    out
}
