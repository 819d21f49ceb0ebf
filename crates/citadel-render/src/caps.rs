/// Terminal capabilities that shape rendered output.
///
/// The renderer never probes the terminal itself; the caller detects (or
/// configures) capabilities once and passes them into every draw call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TermCaps {
    /// Emit ANSI color and attribute sequences.
    pub color: bool,
    /// Use box-drawing, block, and ellipsis glyphs instead of ASCII stand-ins.
    pub unicode: bool,
}

impl TermCaps {
    /// Colored output with the full glyph set.
    pub fn full() -> Self {
        Self { color: true, unicode: true }
    }

    /// Seven-bit output: no styling, ASCII substitutes for every glyph.
    pub fn plain() -> Self {
        Self { color: false, unicode: false }
    }

    pub(crate) fn bar_filled(&self) -> char {
        if self.unicode { '█' } else { '#' }
    }

    pub(crate) fn bar_empty(&self) -> char {
        if self.unicode { '░' } else { '.' }
    }

    /// One-cell truncation marker.
    pub(crate) fn ellipsis(&self) -> char {
        if self.unicode { '…' } else { '~' }
    }

    pub(crate) fn rule(&self) -> char {
        if self.unicode { '─' } else { '-' }
    }
}

impl Default for TermCaps {
    fn default() -> Self {
        Self::full()
    }
}
