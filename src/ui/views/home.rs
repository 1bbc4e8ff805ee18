use phone_signin::config::ScreenCopy;

use crate::ui::primitives::icon::Icon;
use crate::ui::primitives::text::ColoredText;
use crate::ui::widgets::r#box::{Box, BoxStyle};

/// Home screen: static title and welcome message.
pub fn render_home(copy: &ScreenCopy, supports_color: bool, supports_unicode: bool) -> String {
    let title = format!(
        "{} {}",
        Icon::Home.colored(supports_color, supports_unicode),
        ColoredText::plain(&copy.home_title).bold().render(supports_color)
    );
    let mut b = Box::with_title(title).style(BoxStyle::Success);
    b.add_line(&copy.home_message);
    b.render(supports_color, supports_unicode)
}
