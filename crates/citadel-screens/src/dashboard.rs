use citadel_core::command::{CommandAction, CommandSpec};
use citadel_core::screen::{Screen, ScreenId};
use citadel_core::session::{SessionState, WorkflowSummary};
use citadel_render::{BorderStyle, Color, RenderNode, TextStyle};

use crate::theme;

/// Commands reachable from the dashboard. The digit aliases mirror the quick
/// actions panel.
pub const DASHBOARD_COMMANDS: &[CommandSpec] = &[
    CommandSpec::new(
        "help",
        &["h"],
        "Show the command reference",
        CommandAction::Goto(ScreenId::Help),
    ),
    CommandSpec::new(
        "workflows",
        &["workflow", "1"],
        "Manage workflows",
        CommandAction::Goto(ScreenId::WorkflowList),
    ),
    CommandSpec::new(
        "monitor",
        &["monitoring", "2"],
        "Monitor system performance",
        CommandAction::Goto(ScreenId::Monitoring),
    ),
    CommandSpec::new(
        "nodes",
        &["5"],
        "View and manage nodes",
        CommandAction::Goto(ScreenId::NodeList),
    ),
    CommandSpec::new(
        "settings",
        &["7"],
        "Modify user settings",
        CommandAction::Goto(ScreenId::Settings),
    ),
    CommandSpec::new(
        "security",
        &["8"],
        "View security status and logs",
        CommandAction::Goto(ScreenId::Security),
    ),
];

/// The operational hub: session identity, workflow cards, engine metrics,
/// and the quick actions panel.
pub struct DashboardScreen;

impl Screen for DashboardScreen {
    fn id(&self) -> ScreenId {
        ScreenId::Dashboard
    }

    fn title(&self) -> &'static str {
        "Operational Dashboard"
    }

    fn build(&self, state: &SessionState) -> RenderNode {
        RenderNode::stack(vec![
            header(),
            session_panel(state),
            workflows_panel(state),
            metrics_panel(state),
            actions_panel(),
            RenderNode::blank(),
            RenderNode::styled(
                "Type a command | ESC logs out | H for help",
                TextStyle::colored(Color::Yellow),
            ),
        ])
    }

    fn commands(&self) -> &'static [CommandSpec] {
        DASHBOARD_COMMANDS
    }
}

fn header() -> RenderNode {
    RenderNode::panel_with(
        "OPERATIONAL DASHBOARD",
        BorderStyle::double(Color::Green),
        RenderNode::stack(vec![
            RenderNode::styled("CITADEL-AGENT DASHBOARD", TextStyle::bold(Color::Cyan).centered()),
            RenderNode::styled("Secure Automation Suite", TextStyle::dim().centered()),
        ]),
    )
}

fn session_panel(state: &SessionState) -> RenderNode {
    let operator = state.operator.as_deref().unwrap_or("(none)");
    let green = TextStyle::colored(Color::Green);
    RenderNode::panel_with(
        "User Session",
        BorderStyle::single(Color::Magenta),
        RenderNode::stack(vec![
            RenderNode::styled(format!("USER    : {operator}@{}", state.org), green),
            RenderNode::styled(format!("ROLE    : {}", state.role), green),
            RenderNode::styled(format!("SESSION : {}", state.session_id), green),
            RenderNode::styled("STATUS  : Active | Last Activity: 0s ago", green),
        ]),
    )
}

fn workflows_panel(state: &SessionState) -> RenderNode {
    let rows: Vec<RenderNode> = if state.workflows.is_empty() {
        vec![RenderNode::styled("No active workflows.", TextStyle::dim())]
    } else {
        state.workflows.iter().map(workflow_row).collect()
    };
    RenderNode::panel_with(
        "Active Workflows",
        BorderStyle::single(Color::Green),
        RenderNode::stack(rows),
    )
}

fn workflow_row(wf: &WorkflowSummary) -> RenderNode {
    let color = theme::workflow_color(wf.status);
    RenderNode::row(vec![
        RenderNode::styled(format!("{:<7}", wf.status.label()), TextStyle::bold(color)),
        RenderNode::text(format!("{:<20}", wf.name)),
        RenderNode::progress_colored(
            f64::from(wf.progress.min(100)) / 100.0,
            theme::GAUGE_WIDTH,
            color,
        ),
        RenderNode::text(format!("{:>3}%", wf.progress)),
    ])
}

fn metrics_panel(state: &SessionState) -> RenderNode {
    let m = &state.metrics;
    RenderNode::panel_with(
        "System Metrics",
        BorderStyle::single(Color::Blue),
        RenderNode::stack(vec![
            theme::gauge_row("CPU", m.cpu_pct, Color::Cyan),
            theme::gauge_row("RAM", m.ram_pct, Color::Cyan),
            RenderNode::text(format!(
                "Nodes: {} Active | Sessions: {} | Queued: {}",
                m.active_nodes, m.sessions, m.queued_jobs
            )),
            posture_line(state),
        ]),
    )
}

fn posture_line(state: &SessionState) -> RenderNode {
    let sec = &state.security;
    let threats = if sec.threats_blocked == 0 { "NONE" } else { "ALERT" };
    let sandbox = if sec.sandbox_active { "Enforced" } else { "OFFLINE" };
    let color = if sec.threats_blocked == 0 && sec.sandbox_active {
        Color::Green
    } else {
        Color::Red
    };
    RenderNode::styled(
        format!("Security: Threats {threats} | Sandbox: {sandbox}"),
        TextStyle::colored(color),
    )
}

fn actions_panel() -> RenderNode {
    RenderNode::panel_with(
        "Quick Actions",
        BorderStyle::single(Color::Yellow),
        RenderNode::stack(vec![
            RenderNode::text("[1] Workflows      [2] Monitoring     [5] Nodes"),
            RenderNode::text("[7] Settings       [8] Security       [H] Help"),
        ]),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use citadel_core::session::{MetricsSnapshot, WorkflowStatus};
    use citadel_render::{display_width, draw, TermCaps};

    fn demo_state() -> SessionState {
        let mut state = SessionState::new("SECURE-OPS-AB12CD34");
        state.set_operator("morgan");
        state.workflows = vec![
            WorkflowSummary {
                id: "WF-1001".into(),
                name: "Data Sync Pipeline".into(),
                status: WorkflowStatus::Running,
                progress: 100,
            },
            WorkflowSummary {
                id: "WF-1003".into(),
                name: "API Monitor".into(),
                status: WorkflowStatus::Failed,
                progress: 8,
            },
        ];
        state.metrics = MetricsSnapshot {
            cpu_pct: 78,
            ram_pct: 62,
            active_nodes: 42,
            sessions: 3,
            queued_jobs: 7,
        };
        state.security.sandbox_active = true;
        state
    }

    fn render(state: &SessionState) -> String {
        draw(&DashboardScreen.build(state), 72, TermCaps::plain())
            .unwrap()
            .join("\n")
    }

    #[test]
    fn shows_operator_identity() {
        let body = render(&demo_state());
        assert!(body.contains("USER    : morgan@citadel-corp"));
        assert!(body.contains("SESSION : SECURE-OPS-AB12CD34"));
    }

    #[test]
    fn shows_workflow_rows_with_gauges() {
        let body = render(&demo_state());
        assert!(body.contains("RUNNING Data Sync Pipeline"));
        assert!(body.contains("100%"));
        assert!(body.contains("FAILED  API Monitor"));
    }

    #[test]
    fn shows_metrics_and_posture() {
        let body = render(&demo_state());
        assert!(body.contains("Nodes: 42 Active | Sessions: 3 | Queued: 7"));
        assert!(body.contains("Security: Threats NONE | Sandbox: Enforced"));
    }

    #[test]
    fn quick_actions_only_advertise_bound_digits() {
        let body = render(&demo_state());
        for digit in ["[1]", "[2]", "[5]", "[7]", "[8]"] {
            assert!(body.contains(digit), "missing {digit}");
        }
        assert!(!body.contains("[3]"));
        assert!(!body.contains("[9]"));
    }

    #[test]
    fn empty_workflow_list_has_placeholder() {
        let mut state = demo_state();
        state.workflows.clear();
        assert!(render(&state).contains("No active workflows."));
    }

    #[test]
    fn every_digit_alias_has_a_command() {
        for digit in ["1", "2", "5", "7", "8"] {
            assert!(
                DASHBOARD_COMMANDS.iter().any(|spec| spec.matches(digit)),
                "digit {digit} unbound"
            );
        }
    }

    #[test]
    fn fits_narrow_terminals() {
        let state = demo_state();
        for width in [24, 40, 60] {
            let lines = draw(&DashboardScreen.build(&state), width, TermCaps::plain()).unwrap();
            for line in lines {
                assert!(display_width(&line) <= width, "{line:?} at width {width}");
            }
        }
    }
}
