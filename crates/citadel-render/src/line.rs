//! Internal styled-line model.
//!
//! The renderer lays out raw text first and attaches styles per span; ANSI
//! sequences are only emitted at the very end by [`StyledLine::paint`]. This
//! keeps every width computation honest even when a line mixes colors.

use crate::caps::TermCaps;
use crate::style::{paint, TextStyle};
use crate::text::{display_width, take_cells};

/// One styled fragment of a line.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Span {
    pub text: String,
    pub style: TextStyle,
}

/// A display line assembled from styled fragments.
#[derive(Debug, Clone, Default, PartialEq)]
pub(crate) struct StyledLine {
    pub spans: Vec<Span>,
}

impl StyledLine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn plain(text: impl Into<String>) -> Self {
        Self::styled(text, TextStyle::plain())
    }

    pub fn styled(text: impl Into<String>, style: TextStyle) -> Self {
        let mut line = Self::new();
        line.push(text, style);
        line
    }

    pub fn push(&mut self, text: impl Into<String>, style: TextStyle) {
        let text = text.into();
        if !text.is_empty() {
            self.spans.push(Span { text, style });
        }
    }

    /// Display width in cells of the raw text.
    pub fn width(&self) -> usize {
        self.spans.iter().map(|s| display_width(&s.text)).sum()
    }

    /// Append unstyled spaces until the line is `width` cells wide.
    pub fn pad_to(&mut self, width: usize) {
        let current = self.width();
        if current < width {
            self.push(" ".repeat(width - current), TextStyle::plain());
        }
    }

    /// Cut the line down to at most `max` cells, marking the cut with the
    /// capability ellipsis. Glyphs are never split.
    pub fn truncate_to(&mut self, max: usize, caps: TermCaps) {
        if self.width() <= max {
            return;
        }
        if max == 0 {
            self.spans.clear();
            return;
        }

        let budget = max - 1;
        let mut used = 0;
        let mut kept = Vec::new();
        for span in &self.spans {
            let w = display_width(&span.text);
            if used + w <= budget {
                used += w;
                kept.push(span.clone());
                continue;
            }
            let (prefix, pw) = take_cells(&span.text, budget - used);
            if !prefix.is_empty() {
                kept.push(Span { text: prefix.to_string(), style: span.style });
                used += pw;
            }
            break;
        }
        kept.push(Span {
            text: caps.ellipsis().to_string(),
            style: TextStyle::plain(),
        });
        if used + 1 < max {
            kept.push(Span {
                text: " ".repeat(max - used - 1),
                style: TextStyle::plain(),
            });
        }
        self.spans = kept;
    }

    /// Emit the finished line, applying styles when the terminal supports it.
    pub fn paint(&self, caps: TermCaps) -> String {
        let mut out = String::new();
        for span in &self.spans {
            out.push_str(&paint(&span.text, span.style, caps));
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::Color;

    #[test]
    fn width_sums_spans() {
        let mut line = StyledLine::plain("ab");
        line.push("cde", TextStyle::colored(Color::Red));
        assert_eq!(line.width(), 5);
    }

    #[test]
    fn empty_spans_are_dropped() {
        let mut line = StyledLine::new();
        line.push("", TextStyle::plain());
        assert!(line.spans.is_empty());
        assert_eq!(line.width(), 0);
    }

    #[test]
    fn pad_to_appends_plain_spaces() {
        let mut line = StyledLine::styled("hi", TextStyle::colored(Color::Cyan));
        line.pad_to(5);
        assert_eq!(line.width(), 5);
        assert_eq!(line.paint(TermCaps::plain()), "hi   ");
    }

    #[test]
    fn pad_to_shorter_is_noop() {
        let mut line = StyledLine::plain("hello");
        line.pad_to(3);
        assert_eq!(line.paint(TermCaps::plain()), "hello");
    }

    #[test]
    fn truncate_cuts_across_spans() {
        let mut line = StyledLine::plain("abc");
        line.push("defgh", TextStyle::colored(Color::Green));
        line.truncate_to(6, TermCaps::plain());
        assert_eq!(line.paint(TermCaps::plain()), "abcde~");
        assert_eq!(line.width(), 6);
    }

    #[test]
    fn truncate_within_budget_is_noop() {
        let mut line = StyledLine::plain("short");
        line.truncate_to(10, TermCaps::plain());
        assert_eq!(line.paint(TermCaps::plain()), "short");
    }

    #[test]
    fn truncate_to_zero_clears() {
        let mut line = StyledLine::plain("gone");
        line.truncate_to(0, TermCaps::plain());
        assert_eq!(line.paint(TermCaps::plain()), "");
    }

    #[test]
    fn paint_without_color_is_raw_text() {
        let mut line = StyledLine::styled("a", TextStyle::bold(Color::Red));
        line.push("b", TextStyle::dim());
        assert_eq!(line.paint(TermCaps::plain()), "ab");
    }

    #[test]
    fn paint_with_color_styles_each_span() {
        let mut line = StyledLine::styled("a", TextStyle::colored(Color::Red));
        line.push("b", TextStyle::plain());
        let out = line.paint(TermCaps::full());
        assert!(out.contains('\x1b'));
        assert!(out.ends_with('b'), "plain span stays unwrapped: {out:?}");
    }
}
