//! Tree renderer: a [`RenderNode`] plus a target width become display lines.
//!
//! Rendering is pure. The same tree, width, and capabilities always produce
//! byte-identical output, and no line is ever wider than the target.

use crate::caps::TermCaps;
use crate::error::RenderError;
use crate::line::StyledLine;
use crate::node::{BorderLine, BorderStyle, Column, RenderNode};
use crate::style::{Align, TextStyle};
use crate::text::{display_width, fit_cell};

/// Gap between table columns, in cells.
const COLUMN_GAP: &str = "  ";

/// Render a tree into finished lines at the given width.
///
/// Fails with [`RenderError::InvalidArgument`] for a zero target width, a
/// malformed progress bar, an empty table, a panel narrower than its frame,
/// or a row child that does not occupy exactly one line.
pub fn draw(
    node: &RenderNode,
    target_width: usize,
    caps: TermCaps,
) -> Result<Vec<String>, RenderError> {
    if target_width == 0 {
        return Err(RenderError::invalid("target width must be positive"));
    }
    let mut lines = draw_node(node, target_width, caps)?;
    for line in &mut lines {
        line.truncate_to(target_width, caps);
    }
    Ok(lines.iter().map(|line| line.paint(caps)).collect())
}

fn draw_node(
    node: &RenderNode,
    width: usize,
    caps: TermCaps,
) -> Result<Vec<StyledLine>, RenderError> {
    match node {
        RenderNode::Text { content, style } => Ok(draw_text(content, *style, width)),
        RenderNode::Panel { title, border, child } => draw_panel(title, *border, child, width, caps),
        RenderNode::Table { columns, rows } => draw_table(columns, rows, caps),
        RenderNode::ProgressBar { fraction, width: bar_width, color } => {
            draw_progress(*fraction, *bar_width, *color, caps)
        }
        RenderNode::Stack(children) => {
            let mut lines = Vec::new();
            for child in children {
                lines.extend(draw_node(child, width, caps)?);
            }
            Ok(lines)
        }
        RenderNode::Row(children) => draw_row(children, width, caps),
    }
}

fn draw_text(content: &str, style: TextStyle, width: usize) -> Vec<StyledLine> {
    content
        .split('\n')
        .map(|raw| {
            let w = display_width(raw);
            let pad = width.saturating_sub(w);
            let lead = match style.align {
                Align::Left => 0,
                Align::Center => pad / 2,
                Align::Right => pad,
            };
            let mut line = StyledLine::new();
            if lead > 0 {
                line.push(" ".repeat(lead), TextStyle::plain());
            }
            line.push(raw, style);
            line
        })
        .collect()
}

struct BorderGlyphs {
    tl: char,
    tr: char,
    bl: char,
    br: char,
    h: char,
    v: char,
}

fn border_glyphs(line: BorderLine, caps: TermCaps) -> BorderGlyphs {
    match (caps.unicode, line) {
        (true, BorderLine::Single) => BorderGlyphs {
            tl: '┌', tr: '┐', bl: '└', br: '┘', h: '─', v: '│',
        },
        (true, BorderLine::Double) => BorderGlyphs {
            tl: '╔', tr: '╗', bl: '╚', br: '╝', h: '═', v: '║',
        },
        (false, BorderLine::Single) => BorderGlyphs {
            tl: '+', tr: '+', bl: '+', br: '+', h: '-', v: '|',
        },
        (false, BorderLine::Double) => BorderGlyphs {
            tl: '+', tr: '+', bl: '+', br: '+', h: '=', v: '|',
        },
    }
}

fn draw_panel(
    title: &str,
    border: BorderStyle,
    child: &RenderNode,
    width: usize,
    caps: TermCaps,
) -> Result<Vec<StyledLine>, RenderError> {
    if width < 5 {
        return Err(RenderError::invalid(format!(
            "panel needs at least 5 columns, got {width}"
        )));
    }

    let glyphs = border_glyphs(border.line, caps);
    let frame = TextStyle { color: border.color, ..TextStyle::plain() };
    let title_style = TextStyle { color: border.color, bold: true, ..TextStyle::plain() };
    let inner = width - 4;

    let mut lines = Vec::new();

    // Top border, with the title embedded when present. A title needs its own
    // run of frame cells; below 7 columns it is dropped rather than mangled.
    let mut top = StyledLine::new();
    if title.is_empty() || width < 7 {
        top.push(
            format!("{}{}{}", glyphs.tl, glyphs.h.to_string().repeat(width - 2), glyphs.tr),
            frame,
        );
    } else {
        let budget = width - 6;
        let fitted = if display_width(title) > budget {
            fit_cell(title, budget, Align::Left, caps)
        } else {
            title.to_string()
        };
        let run = width - 5 - display_width(&fitted);
        top.push(format!("{}{} ", glyphs.tl, glyphs.h), frame);
        top.push(fitted, title_style);
        top.push(
            format!(" {}{}", glyphs.h.to_string().repeat(run), glyphs.tr),
            frame,
        );
    }
    lines.push(top);

    for mut body in draw_node(child, inner, caps)? {
        body.truncate_to(inner, caps);
        body.pad_to(inner);
        let mut framed = StyledLine::new();
        framed.push(format!("{} ", glyphs.v), frame);
        framed.spans.extend(body.spans);
        framed.push(format!(" {}", glyphs.v), frame);
        lines.push(framed);
    }

    let mut bottom = StyledLine::new();
    bottom.push(
        format!("{}{}{}", glyphs.bl, glyphs.h.to_string().repeat(width - 2), glyphs.br),
        frame,
    );
    lines.push(bottom);

    Ok(lines)
}

fn draw_table(
    columns: &[Column],
    rows: &[Vec<String>],
    caps: TermCaps,
) -> Result<Vec<StyledLine>, RenderError> {
    if columns.is_empty() {
        return Err(RenderError::invalid("table needs at least one column"));
    }

    // Each column grows to its widest cell, header included, capped by the
    // column's max_width.
    let widths: Vec<usize> = columns
        .iter()
        .enumerate()
        .map(|(i, col)| {
            let mut w = display_width(&col.header);
            for row in rows {
                if let Some(cell) = row.get(i) {
                    w = w.max(display_width(cell));
                }
            }
            w.min(col.max_width).max(1)
        })
        .collect();

    let mut lines = Vec::new();

    let mut header = StyledLine::new();
    for (i, col) in columns.iter().enumerate() {
        if i > 0 {
            header.push(COLUMN_GAP, TextStyle::plain());
        }
        header.push(
            fit_cell(&col.header, widths[i], col.align, caps),
            TextStyle { bold: true, ..TextStyle::plain() },
        );
    }
    lines.push(header);

    let mut rule = StyledLine::new();
    for (i, w) in widths.iter().enumerate() {
        if i > 0 {
            rule.push(COLUMN_GAP, TextStyle::plain());
        }
        rule.push(caps.rule().to_string().repeat(*w), TextStyle::plain());
    }
    lines.push(rule);

    let empty = String::new();
    for row in rows {
        let mut out = StyledLine::new();
        for (i, col) in columns.iter().enumerate() {
            if i > 0 {
                out.push(COLUMN_GAP, TextStyle::plain());
            }
            let cell = row.get(i).unwrap_or(&empty);
            out.push(fit_cell(cell, widths[i], col.align, caps), TextStyle::plain());
        }
        lines.push(out);
    }

    Ok(lines)
}

fn draw_progress(
    fraction: f64,
    width: usize,
    color: Option<crate::style::Color>,
    caps: TermCaps,
) -> Result<Vec<StyledLine>, RenderError> {
    if !(0.0..=1.0).contains(&fraction) {
        return Err(RenderError::invalid(format!(
            "progress fraction {fraction} outside 0..=1"
        )));
    }
    if width == 0 {
        return Err(RenderError::invalid("progress width must be positive"));
    }

    let filled = (fraction * width as f64).round() as usize;
    let mut line = StyledLine::new();
    if filled > 0 {
        let style = match color {
            Some(c) => TextStyle::colored(c),
            None => TextStyle::plain(),
        };
        line.push(caps.bar_filled().to_string().repeat(filled), style);
    }
    if filled < width {
        let style = match color {
            Some(_) => TextStyle::dim(),
            None => TextStyle::plain(),
        };
        line.push(caps.bar_empty().to_string().repeat(width - filled), style);
    }
    Ok(vec![line])
}

fn draw_row(
    children: &[RenderNode],
    width: usize,
    caps: TermCaps,
) -> Result<Vec<StyledLine>, RenderError> {
    let mut joined = StyledLine::new();
    for (i, child) in children.iter().enumerate() {
        let lines = draw_node(child, width, caps)?;
        if lines.len() != 1 {
            return Err(RenderError::invalid(format!(
                "row child spans {} lines, expected 1",
                lines.len()
            )));
        }
        if i > 0 {
            joined.push(" ", TextStyle::plain());
        }
        joined.spans.extend(lines.into_iter().next().unwrap_or_default().spans);
    }
    Ok(vec![joined])
}
