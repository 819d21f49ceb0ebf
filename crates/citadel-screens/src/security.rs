use citadel_core::command::{CommandSpec, RETURN_COMMANDS};
use citadel_core::screen::{Screen, ScreenId};
use citadel_core::session::SessionState;
use citadel_render::{BorderStyle, Color, RenderNode, TextStyle};

use crate::theme;

/// Security posture and the recent-activity audit trail.
pub struct SecurityScreen;

impl Screen for SecurityScreen {
    fn id(&self) -> ScreenId {
        ScreenId::Security
    }

    fn title(&self) -> &'static str {
        "Security Dashboard"
    }

    fn build(&self, state: &SessionState) -> RenderNode {
        RenderNode::stack(vec![
            RenderNode::panel_with(
                "Security",
                BorderStyle::double(Color::Red),
                RenderNode::styled("SECURITY DASHBOARD", TextStyle::bold(Color::Red).centered()),
            ),
            RenderNode::blank(),
            status_panel(state),
            activity_panel(state),
            RenderNode::blank(),
            theme::return_hint(),
        ])
    }

    fn commands(&self) -> &'static [CommandSpec] {
        RETURN_COMMANDS
    }
}

fn status_panel(state: &SessionState) -> RenderNode {
    let sec = &state.security;
    let threats = if sec.threats_blocked == 0 {
        RenderNode::styled("ACTIVE THREATS    : NONE", TextStyle::colored(Color::Green))
    } else {
        RenderNode::styled(
            format!("ACTIVE THREATS    : {} BLOCKED", sec.threats_blocked),
            TextStyle::colored(Color::Red),
        )
    };
    let sandbox = if sec.sandbox_active {
        RenderNode::styled("SANDBOX STATUS    : ALL SECURE", TextStyle::colored(Color::Green))
    } else {
        RenderNode::styled("SANDBOX STATUS    : OFFLINE", TextStyle::colored(Color::Red))
    };
    let violations = RenderNode::styled(
        format!("POLICY VIOLATIONS : {}", sec.policy_violations),
        if sec.policy_violations == 0 {
            TextStyle::colored(Color::Green)
        } else {
            TextStyle::colored(Color::Yellow)
        },
    );
    let auth = RenderNode::styled(
        format!(
            "AUTH LOGS         : Last 24hrs: {} Events | {} Suspicious",
            sec.auth_events_24h, sec.suspicious_events
        ),
        if sec.suspicious_events == 0 {
            TextStyle::colored(Color::Green)
        } else {
            TextStyle::colored(Color::Yellow)
        },
    );
    RenderNode::panel_with(
        "Security Status",
        BorderStyle::single(Color::Red),
        RenderNode::stack(vec![
            threats,
            sandbox,
            violations,
            auth,
            RenderNode::text(format!("LAST SCAN         : {}", sec.last_scan)),
        ]),
    )
}

fn activity_panel(state: &SessionState) -> RenderNode {
    let lines: Vec<RenderNode> = if state.audit.is_empty() {
        vec![RenderNode::styled("No recent activity.", TextStyle::dim())]
    } else {
        state
            .audit
            .iter()
            .map(|entry| RenderNode::text(entry.clone()))
            .collect()
    };
    RenderNode::panel_with(
        "Recent Activity",
        BorderStyle::single(Color::Blue),
        RenderNode::stack(lines),
    )
}
