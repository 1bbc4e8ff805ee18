use crate::ui::theme::{borders, borders_ascii};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BorderChar {
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
    Horizontal,
    Vertical,
}

impl BorderChar {
    fn pair(&self) -> (&'static str, &'static str) {
        match self {
            BorderChar::TopLeft => (borders::TOP_LEFT, borders_ascii::TOP_LEFT),
            BorderChar::TopRight => (borders::TOP_RIGHT, borders_ascii::TOP_RIGHT),
            BorderChar::BottomLeft => (borders::BOTTOM_LEFT, borders_ascii::BOTTOM_LEFT),
            BorderChar::BottomRight => (borders::BOTTOM_RIGHT, borders_ascii::BOTTOM_RIGHT),
            BorderChar::Horizontal => (borders::HORIZONTAL, borders_ascii::HORIZONTAL),
            BorderChar::Vertical => (borders::VERTICAL, borders_ascii::VERTICAL),
        }
    }

    pub fn render(&self, supports_unicode: bool) -> &'static str {
        let (unicode, ascii) = self.pair();
        if supports_unicode {
            unicode
        } else {
            ascii
        }
    }
}
