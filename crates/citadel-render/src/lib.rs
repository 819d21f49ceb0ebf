//! Rendering layer for the Citadel dashboard.
//!
//! Screens describe their content as a [`RenderNode`] tree; [`draw`] turns a
//! tree plus a target width into finished display lines. The renderer owns
//! all width math and capability degradation: callers decide *what* to show,
//! this crate decides how it fits, pads, truncates, and colors.

pub mod caps;
pub mod draw;
pub mod error;
mod line;
pub mod node;
pub mod style;
pub mod text;

pub use caps::TermCaps;
pub use draw::draw;
pub use error::RenderError;
pub use node::{BorderLine, BorderStyle, Column, RenderNode};
pub use style::{Align, Color, TextStyle};
pub use text::display_width;
