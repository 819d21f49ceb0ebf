use crate::style::{Align, Color, TextStyle};

/// Default cap on table column width before cells are ellipsis-truncated.
pub const DEFAULT_MAX_CELL: usize = 24;

/// Line weight for panel borders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BorderLine {
    #[default]
    Single,
    Double,
}

/// Border appearance for a panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BorderStyle {
    pub line: BorderLine,
    pub color: Option<Color>,
}

impl BorderStyle {
    pub fn single(color: Color) -> Self {
        Self { line: BorderLine::Single, color: Some(color) }
    }

    pub fn double(color: Color) -> Self {
        Self { line: BorderLine::Double, color: Some(color) }
    }
}

/// One table column: header text, cell alignment, and a width cap.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Column {
    pub header: String,
    pub align: Align,
    /// Columns grow to their widest cell but never past this many cells.
    pub max_width: usize,
}

impl Column {
    pub fn new(header: impl Into<String>) -> Self {
        Self {
            header: header.into(),
            align: Align::Left,
            max_width: DEFAULT_MAX_CELL,
        }
    }

    pub fn right(mut self) -> Self {
        self.align = Align::Right;
        self
    }

    pub fn max_width(mut self, cells: usize) -> Self {
        self.max_width = cells;
        self
    }
}

/// A symbolic description of screen content.
///
/// Trees are cheap, immutable values: screens build a fresh one per render
/// pass and [`draw`](crate::draw) flattens it into lines. Nothing here
/// touches the terminal.
#[derive(Debug, Clone, PartialEq)]
pub enum RenderNode {
    /// Styled text. Embedded newlines split into multiple lines.
    Text { content: String, style: TextStyle },
    /// A titled box around exactly one child tree.
    Panel {
        title: String,
        border: BorderStyle,
        child: Box<RenderNode>,
    },
    /// Column-aligned rows of cells under a header rule.
    Table {
        columns: Vec<Column>,
        rows: Vec<Vec<String>>,
    },
    /// A horizontal gauge, exactly `width` cells wide.
    ProgressBar {
        fraction: f64,
        width: usize,
        color: Option<Color>,
    },
    /// Children stacked vertically.
    Stack(Vec<RenderNode>),
    /// Single-line children joined by one space on a shared line.
    Row(Vec<RenderNode>),
}

impl RenderNode {
    pub fn text(content: impl Into<String>) -> Self {
        RenderNode::Text { content: content.into(), style: TextStyle::plain() }
    }

    pub fn styled(content: impl Into<String>, style: TextStyle) -> Self {
        RenderNode::Text { content: content.into(), style }
    }

    /// An empty line.
    pub fn blank() -> Self {
        Self::text("")
    }

    pub fn panel(title: impl Into<String>, child: RenderNode) -> Self {
        Self::panel_with(title, BorderStyle::default(), child)
    }

    pub fn panel_with(title: impl Into<String>, border: BorderStyle, child: RenderNode) -> Self {
        RenderNode::Panel {
            title: title.into(),
            border,
            child: Box::new(child),
        }
    }

    pub fn table(columns: Vec<Column>, rows: Vec<Vec<String>>) -> Self {
        RenderNode::Table { columns, rows }
    }

    pub fn progress(fraction: f64, width: usize) -> Self {
        RenderNode::ProgressBar { fraction, width, color: None }
    }

    pub fn progress_colored(fraction: f64, width: usize, color: Color) -> Self {
        RenderNode::ProgressBar { fraction, width, color: Some(color) }
    }

    pub fn stack(children: Vec<RenderNode>) -> Self {
        RenderNode::Stack(children)
    }

    pub fn row(children: Vec<RenderNode>) -> Self {
        RenderNode::Row(children)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn text_constructor_defaults_to_plain() {
        match RenderNode::text("hi") {
            RenderNode::Text { content, style } => {
                assert_eq!(content, "hi");
                assert!(style.is_plain());
            }
            _ => panic!("expected Text"),
        }
    }

    #[test]
    fn column_builder_chains() {
        let col = Column::new("PROGRESS").right().max_width(8);
        assert_eq!(col.header, "PROGRESS");
        assert_eq!(col.align, Align::Right);
        assert_eq!(col.max_width, 8);
    }

    #[test]
    fn column_default_cap() {
        assert_eq!(Column::new("NAME").max_width, DEFAULT_MAX_CELL);
    }

    #[test]
    fn progress_constructor_has_no_color() {
        match RenderNode::progress(0.5, 10) {
            RenderNode::ProgressBar { fraction, width, color } => {
                assert_eq!(fraction, 0.5);
                assert_eq!(width, 10);
                assert!(color.is_none());
            }
            _ => panic!("expected ProgressBar"),
        }
    }

    #[test]
    fn panel_defaults_to_single_border() {
        match RenderNode::panel("T", RenderNode::blank()) {
            RenderNode::Panel { border, .. } => {
                assert_eq!(border.line, BorderLine::Single);
                assert!(border.color.is_none());
            }
            _ => panic!("expected Panel"),
        }
    }
}
