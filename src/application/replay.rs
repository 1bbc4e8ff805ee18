//! Replay scripts
//!
//! A line-oriented stand-in for a person at the keyboard:
//!
//! ```text
//! # comments and blank lines are skipped
//! type 0912 345 678
//! submit
//! ```
//!
//! `type` replaces the whole field text with the rest of the line (after one
//! separating space or tab, so whitespace beyond it is kept as raw input).

use crate::error::{SigninError, SigninResult};

use super::session::UserEvent;

/// One parsed script line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScriptStep {
    /// 1-indexed source line
    pub line: usize,
    pub event: UserEvent,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReplayScript {
    steps: Vec<ScriptStep>,
}

impl ReplayScript {
    pub fn parse(content: &str) -> SigninResult<Self> {
        let mut steps = Vec::new();

        for (index, raw_line) in content.lines().enumerate() {
            let line = index + 1;
            let text = raw_line.strip_suffix('\r').unwrap_or(raw_line);
            let trimmed = text.trim();

            if trimmed.is_empty() || trimmed.starts_with('#') {
                continue;
            }

            let body = text.trim_start();
            let (directive, rest) = match body.split_once(char::is_whitespace) {
                Some((d, r)) => (d, Some(r)),
                None => (body, None),
            };

            let event = match directive {
                "type" => UserEvent::TextChanged(rest.unwrap_or_default().to_string()),
                "submit" => {
                    if rest.is_some_and(|r| !r.trim().is_empty()) {
                        return Err(SigninError::InvalidScript {
                            line,
                            message: "'submit' takes no argument".to_string(),
                        });
                    }
                    UserEvent::SubmitPressed
                }
                other => {
                    return Err(SigninError::InvalidScript {
                        line,
                        message: format!(
                            "unknown directive '{}' (expected 'type' or 'submit')",
                            other
                        ),
                    });
                }
            };

            steps.push(ScriptStep { line, event });
        }

        Ok(Self { steps })
    }

    pub fn steps(&self) -> &[ScriptStep] {
        &self.steps
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }
}
