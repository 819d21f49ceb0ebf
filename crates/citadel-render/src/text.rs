//! Cell-width helpers on top of unicode-width.
//!
//! Everything here operates on raw text. Styled output is assembled later,
//! so escape sequences never reach these functions.

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::caps::TermCaps;
use crate::style::Align;

/// Display width of a string in terminal cells.
pub fn display_width(s: &str) -> usize {
    s.width()
}

/// Longest prefix of `s` that fits in `max` cells, with its width.
///
/// Never splits a glyph: a double-width character that would straddle the
/// boundary is left out entirely, which can leave the prefix one cell short.
pub(crate) fn take_cells(s: &str, max: usize) -> (&str, usize) {
    let mut width = 0;
    let mut end = 0;
    for (idx, ch) in s.char_indices() {
        let cw = ch.width().unwrap_or(0);
        if width + cw > max {
            break;
        }
        width += cw;
        end = idx + ch.len_utf8();
    }
    (&s[..end], width)
}

/// Fit `s` into exactly `width` cells.
///
/// Shorter text is padded with spaces according to `align`; longer text is
/// truncated and marked with the capability ellipsis. `width == 0` yields an
/// empty string.
pub(crate) fn fit_cell(s: &str, width: usize, align: Align, caps: TermCaps) -> String {
    if width == 0 {
        return String::new();
    }

    let w = display_width(s);
    if w <= width {
        let pad = width - w;
        return match align {
            Align::Left => format!("{}{}", s, " ".repeat(pad)),
            Align::Right => format!("{}{}", " ".repeat(pad), s),
            Align::Center => {
                let left = pad / 2;
                format!("{}{}{}", " ".repeat(left), s, " ".repeat(pad - left))
            }
        };
    }

    let (prefix, kept) = take_cells(s, width - 1);
    format!("{}{}{}", prefix, caps.ellipsis(), " ".repeat(width - 1 - kept))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn width_of_ascii() {
        assert_eq!(display_width("citadel"), 7);
        assert_eq!(display_width(""), 0);
    }

    #[test]
    fn width_of_wide_glyphs() {
        // CJK characters occupy two cells each.
        assert_eq!(display_width("状態"), 4);
        assert_eq!(display_width("a状b"), 4);
    }

    #[test]
    fn take_cells_stops_at_boundary() {
        let (prefix, w) = take_cells("workflow", 4);
        assert_eq!(prefix, "work");
        assert_eq!(w, 4);
    }

    #[test]
    fn take_cells_never_splits_wide_glyph() {
        // "状" is 2 cells; a 3-cell budget fits "a状" but not "a状b"+1.
        let (prefix, w) = take_cells("a状態", 3);
        assert_eq!(prefix, "a状");
        assert_eq!(w, 3);
        // Budget of 2 cannot take half of "状".
        let (prefix, w) = take_cells("状態", 1);
        assert_eq!(prefix, "");
        assert_eq!(w, 0);
    }

    #[test]
    fn fit_pads_left_aligned() {
        let out = fit_cell("ok", 5, Align::Left, TermCaps::plain());
        assert_eq!(out, "ok   ");
    }

    #[test]
    fn fit_pads_right_aligned() {
        let out = fit_cell("42", 5, Align::Right, TermCaps::plain());
        assert_eq!(out, "   42");
    }

    #[test]
    fn fit_centers_with_uneven_padding_biased_left() {
        let out = fit_cell("abc", 6, Align::Center, TermCaps::plain());
        assert_eq!(out, " abc  ");
    }

    #[test]
    fn fit_truncates_with_unicode_ellipsis() {
        let out = fit_cell("workflow", 5, Align::Left, TermCaps::full());
        assert_eq!(out, "work…");
        assert_eq!(display_width(&out), 5);
    }

    #[test]
    fn fit_truncates_with_ascii_marker() {
        let out = fit_cell("workflow", 5, Align::Left, TermCaps::plain());
        assert_eq!(out, "work~");
    }

    #[test]
    fn fit_truncation_backfills_after_wide_glyph() {
        // Four cells of "状態" leave three for content; only "状" (2 cells)
        // fits, so one space restores the exact width.
        let out = fit_cell("状態資", 4, Align::Left, TermCaps::full());
        assert_eq!(out, "状… ");
        assert_eq!(display_width(&out), 4);
    }

    #[test]
    fn fit_width_one_becomes_marker() {
        let out = fit_cell("long", 1, Align::Left, TermCaps::full());
        assert_eq!(out, "…");
    }

    #[test]
    fn fit_zero_width_is_empty() {
        assert_eq!(fit_cell("anything", 0, Align::Left, TermCaps::full()), "");
    }

    #[test]
    fn fit_exact_width_unchanged() {
        assert_eq!(fit_cell("abcde", 5, Align::Left, TermCaps::full()), "abcde");
    }
}
