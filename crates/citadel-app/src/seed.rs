//! Demo session data shown by the dashboard.
//!
//! The engine itself lives elsewhere; this binary seeds the screens with a
//! representative inventory so every panel has something to show.

use citadel_core::session::{
    MetricsSnapshot, NodeKind, NodeStatus, NodeSummary, SecurityOverview, SessionState,
    SettingEntry, WorkflowStatus, WorkflowSummary,
};
use uuid::Uuid;

/// Build a fresh session id in the `SECURE-OPS-XXXXXXXX` shape.
pub(crate) fn session_id() -> String {
    let uuid = Uuid::new_v4().simple().to_string();
    format!("SECURE-OPS-{}", uuid[..8].to_uppercase())
}

fn workflow(
    id: &str,
    name: &str,
    status: WorkflowStatus,
    progress: u8,
) -> WorkflowSummary {
    WorkflowSummary { id: id.into(), name: name.into(), status, progress }
}

fn node(name: &str, kind: NodeKind, status: NodeStatus) -> NodeSummary {
    NodeSummary { name: name.into(), kind, status }
}

/// A populated session: no operator yet, demo inventory everywhere else.
pub(crate) fn demo_session() -> SessionState {
    let mut state = SessionState::new(session_id());
    state.role = "Automation Engineer".into();

    state.workflows = vec![
        workflow("WF-1001", "Data Sync Pipeline", WorkflowStatus::Running, 100),
        workflow("WF-1002", "Report Generator", WorkflowStatus::Paused, 25),
        workflow("WF-1003", "API Monitor", WorkflowStatus::Failed, 8),
        workflow("WF-1004", "Email Campaign", WorkflowStatus::Queued, 0),
    ];

    state.metrics = MetricsSnapshot {
        cpu_pct: 78,
        ram_pct: 62,
        active_nodes: 42,
        sessions: 3,
        queued_jobs: 7,
    };

    state.nodes = vec![
        node("ingest-gateway", NodeKind::HttpRequest, NodeStatus::Online),
        node("payload-scrubber", NodeKind::Function, NodeStatus::Online),
        node("schedule-trigger", NodeKind::Trigger, NodeStatus::Online),
        node("edge-relay-7", NodeKind::HttpRequest, NodeStatus::Degraded),
        node("archive-writer", NodeKind::Function, NodeStatus::Offline),
    ];

    state.security = SecurityOverview {
        threats_blocked: 0,
        sandbox_active: true,
        policy_violations: 0,
        last_scan: "15:29:08".into(),
        auth_events_24h: 423,
        suspicious_events: 0,
    };

    state.audit = vec![
        "[15:32:47] User admin@citadel logged in from 10.0.0.42".into(),
        "[15:31:22] Workflow \"Data Sync Pipeline\" started execution".into(),
        "[15:30:15] Node \"HTTP Request\" completed successfully".into(),
        "[15:29:08] Security scan on node \"Data Processor\" PASSED".into(),
        "[15:28:55] Scheduled backup initiated for workflow data".into(),
    ];

    state.settings = vec![
        SettingEntry::new("Theme", "citadel-dark"),
        SettingEntry::new("Refresh Interval", "5s"),
        SettingEntry::new("Notifications", "enabled"),
        SettingEntry::new("Audit Retention", "90 days"),
        SettingEntry::new("Sandbox Level", "strict"),
    ];

    state
}
