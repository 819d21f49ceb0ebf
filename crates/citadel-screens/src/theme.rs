//! Shared palette and layout helpers used across screens.

use citadel_core::session::WorkflowStatus;
use citadel_render::{Color, RenderNode, TextStyle};

/// Cell width of every gauge on the dashboard and monitoring screens.
pub(crate) const GAUGE_WIDTH: usize = 20;

pub(crate) fn workflow_color(status: WorkflowStatus) -> Color {
    match status {
        WorkflowStatus::Running => Color::Green,
        WorkflowStatus::Paused => Color::Yellow,
        WorkflowStatus::Failed => Color::Red,
        WorkflowStatus::Queued => Color::Blue,
    }
}

/// A one-line percentage gauge: label, bar, right-aligned percentage.
pub(crate) fn gauge_row(label: &str, pct: u8, color: Color) -> RenderNode {
    RenderNode::row(vec![
        RenderNode::text(label.to_string()),
        RenderNode::progress_colored(f64::from(pct.min(100)) / 100.0, GAUGE_WIDTH, color),
        RenderNode::text(format!("{:>3}%", pct)),
    ])
}

/// Footer hint shown on every screen reached from the dashboard.
pub(crate) fn return_hint() -> RenderNode {
    RenderNode::styled(
        "Type 'dashboard' to return | ESC logs out | 'quit' exits",
        TextStyle::dim(),
    )
}
