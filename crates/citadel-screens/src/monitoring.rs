use citadel_core::command::{CommandSpec, RETURN_COMMANDS};
use citadel_core::screen::{Screen, ScreenId};
use citadel_core::session::SessionState;
use citadel_render::{BorderStyle, Color, RenderNode, TextStyle};

use crate::theme;

/// Engine telemetry: resource gauges plus activity counters.
pub struct MonitoringScreen;

impl Screen for MonitoringScreen {
    fn id(&self) -> ScreenId {
        ScreenId::Monitoring
    }

    fn title(&self) -> &'static str {
        "System Monitoring"
    }

    fn build(&self, state: &SessionState) -> RenderNode {
        let m = &state.metrics;
        RenderNode::stack(vec![
            RenderNode::panel_with(
                "Monitoring",
                BorderStyle::double(Color::Blue),
                RenderNode::styled("SYSTEM MONITORING", TextStyle::bold(Color::Blue).centered()),
            ),
            RenderNode::blank(),
            RenderNode::panel_with(
                "Resource Usage",
                BorderStyle::single(Color::Blue),
                RenderNode::stack(vec![
                    theme::gauge_row("CPU", m.cpu_pct, Color::Cyan),
                    theme::gauge_row("RAM", m.ram_pct, Color::Cyan),
                ]),
            ),
            RenderNode::panel_with(
                "Engine Activity",
                BorderStyle::single(Color::Blue),
                RenderNode::stack(vec![
                    RenderNode::text(format!("Active Nodes      : {}", m.active_nodes)),
                    RenderNode::text(format!("Operator Sessions : {}", m.sessions)),
                    RenderNode::text(format!("Queued Jobs       : {}", m.queued_jobs)),
                ]),
            ),
            RenderNode::blank(),
            theme::return_hint(),
        ])
    }

    fn commands(&self) -> &'static [CommandSpec] {
        RETURN_COMMANDS
    }
}
