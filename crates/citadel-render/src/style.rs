use crossterm::style::{self, Stylize};

use crate::caps::TermCaps;

/// Foreground colors available to render nodes.
///
/// Kept deliberately small: the dashboard palette maps onto the eight ANSI
/// colors every terminal understands, plus grey for de-emphasis.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Color {
    Red,
    Green,
    Yellow,
    Blue,
    Magenta,
    Cyan,
    White,
    Grey,
}

impl Color {
    fn to_crossterm(self) -> style::Color {
        match self {
            Color::Red => style::Color::Red,
            Color::Green => style::Color::Green,
            Color::Yellow => style::Color::Yellow,
            Color::Blue => style::Color::Blue,
            Color::Magenta => style::Color::Magenta,
            Color::Cyan => style::Color::Cyan,
            Color::White => style::Color::White,
            Color::Grey => style::Color::Grey,
        }
    }
}

/// Horizontal alignment within a fixed-width cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Align {
    #[default]
    Left,
    Center,
    Right,
}

/// Styling applied to a text node, table header, or border run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TextStyle {
    pub color: Option<Color>,
    pub bold: bool,
    pub dim: bool,
    pub align: Align,
}

impl TextStyle {
    pub fn plain() -> Self {
        Self::default()
    }

    pub fn colored(color: Color) -> Self {
        Self { color: Some(color), ..Self::default() }
    }

    pub fn bold(color: Color) -> Self {
        Self { color: Some(color), bold: true, ..Self::default() }
    }

    pub fn dim() -> Self {
        Self { dim: true, ..Self::default() }
    }

    pub fn centered(self) -> Self {
        Self { align: Align::Center, ..self }
    }

    pub fn right(self) -> Self {
        Self { align: Align::Right, ..self }
    }

    /// True when painting this style would not change the text at all.
    pub fn is_plain(&self) -> bool {
        self.color.is_none() && !self.bold && !self.dim
    }
}

/// Apply a style to already-laid-out text.
///
/// All width math must happen before this call: the escape sequences added
/// here occupy bytes but zero display cells.
pub(crate) fn paint(text: &str, style: TextStyle, caps: TermCaps) -> String {
    if !caps.color || style.is_plain() || text.is_empty() {
        return text.to_string();
    }
    let mut styled = text.stylize();
    if let Some(color) = style.color {
        styled = styled.with(color.to_crossterm());
    }
    if style.bold {
        styled = styled.bold();
    }
    if style.dim {
        styled = styled.dim();
    }
    styled.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_style_is_identity() {
        let out = paint("hello", TextStyle::plain(), TermCaps::full());
        assert_eq!(out, "hello");
    }

    #[test]
    fn color_disabled_is_identity() {
        let style = TextStyle::bold(Color::Red);
        let out = paint("alert", style, TermCaps::plain());
        assert_eq!(out, "alert");
    }

    #[test]
    fn colored_text_carries_escapes_and_reset() {
        let out = paint("ok", TextStyle::colored(Color::Green), TermCaps::full());
        assert!(out.starts_with('\x1b'));
        assert!(out.contains("ok"));
        assert!(out.ends_with('m'), "styled output should end with a reset sequence");
    }

    #[test]
    fn empty_text_never_styled() {
        let out = paint("", TextStyle::colored(Color::Cyan), TermCaps::full());
        assert_eq!(out, "");
    }

    #[test]
    fn painting_is_deterministic() {
        let style = TextStyle { color: Some(Color::Magenta), bold: true, dim: false, align: Align::Left };
        let a = paint("same", style, TermCaps::full());
        let b = paint("same", style, TermCaps::full());
        assert_eq!(a, b);
    }

    #[test]
    fn builder_helpers() {
        let style = TextStyle::colored(Color::Cyan).centered();
        assert_eq!(style.align, Align::Center);
        assert_eq!(style.color, Some(Color::Cyan));
        assert!(TextStyle::dim().dim);
        assert!(TextStyle::plain().is_plain());
        assert!(!TextStyle::bold(Color::White).is_plain());
    }
}
