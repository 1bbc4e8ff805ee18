use phone_signin::config::ScreenCopy;
use phone_signin::domain::services::LOCAL_PHONE_LEN;
use phone_signin::SignInView;

use crate::ui::primitives::icon::Icon;
use crate::ui::primitives::text::ColoredText;
use crate::ui::widgets::r#box::{visible_width, Box, BoxStyle};

/// Sign-in screen: title, instruction, phone field, inline error, button.
pub fn render_sign_in(
    view: &SignInView,
    copy: &ScreenCopy,
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    let mut out = String::new();
    out.push_str(&ColoredText::plain(&copy.title).bold().render(supports_color));
    out.push('\n');
    out.push_str(&ColoredText::dim(&copy.instruction).render(supports_color));
    out.push_str("\n\n");

    let icon = Icon::Phone.colored(supports_color, supports_unicode);
    let field_text = if view.displayed_text.is_empty() {
        ColoredText::dim(&copy.placeholder).render(supports_color)
    } else {
        ColoredText::plain(&view.displayed_text).render(supports_color)
    };

    let style = if view.error_text.is_some() {
        BoxStyle::Error
    } else {
        BoxStyle::Dim
    };
    let field_width = field_inner_width(copy, supports_unicode);
    let mut field = Box::with_style(style).width(field_width);
    field.add_line(format!("{} {}", icon, field_text));
    out.push_str(&field.render(supports_color, supports_unicode));

    if let Some(error) = &view.error_text {
        out.push_str(&format!(
            "{} {}\n",
            Icon::Error.colored(supports_color, supports_unicode),
            ColoredText::error(error).render(supports_color)
        ));
    }

    out.push('\n');
    out.push_str(
        &ColoredText::info(format!("[ {} ]", copy.button))
            .bold()
            .render(supports_color),
    );
    out.push('\n');
    out
}

/// Wide enough for the placeholder or a full number, whichever is longer.
fn field_inner_width(copy: &ScreenCopy, supports_unicode: bool) -> u16 {
    let icon = visible_width(Icon::Phone.render(supports_unicode));
    let text = visible_width(&copy.placeholder).max(LOCAL_PHONE_LEN);
    u16::try_from(icon + 1 + text + 2).unwrap_or(u16::MAX)
}

/// Key hints shown under the interactive screen
pub fn render_sign_in_help(supports_color: bool) -> String {
    ColoredText::dim("digits to type  backspace to erase  enter to submit  esc to quit")
        .render(supports_color)
}
