//! Session snapshot types consumed by screen builders.
//!
//! Everything here is plain display data supplied from outside the
//! controller: the binary seeds it, a real engine would stream it. Rendering
//! never mutates a snapshot, so drawing the same state twice is always
//! byte-identical.

/// Lifecycle state of a workflow as reported by the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WorkflowStatus {
    Running,
    Paused,
    Failed,
    Queued,
}

impl WorkflowStatus {
    pub fn label(&self) -> &'static str {
        match self {
            WorkflowStatus::Running => "RUNNING",
            WorkflowStatus::Paused => "PAUSED",
            WorkflowStatus::Failed => "FAILED",
            WorkflowStatus::Queued => "QUEUED",
        }
    }
}

/// One workflow card on the dashboard.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkflowSummary {
    pub id: String,
    pub name: String,
    pub status: WorkflowStatus,
    /// Completion percentage, 0 to 100.
    pub progress: u8,
}

/// Fabricated engine metrics shown on the dashboard and monitoring screens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MetricsSnapshot {
    pub cpu_pct: u8,
    pub ram_pct: u8,
    pub active_nodes: u32,
    pub sessions: u32,
    pub queued_jobs: u32,
}

/// Kind of an execution node, mirroring the engine's node model.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeKind {
    HttpRequest,
    Function,
    Trigger,
}

impl NodeKind {
    pub fn label(&self) -> &'static str {
        match self {
            NodeKind::HttpRequest => "http_request",
            NodeKind::Function => "function",
            NodeKind::Trigger => "trigger",
        }
    }
}

/// Reachability of an execution node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeStatus {
    Online,
    Degraded,
    Offline,
}

impl NodeStatus {
    pub fn label(&self) -> &'static str {
        match self {
            NodeStatus::Online => "ONLINE",
            NodeStatus::Degraded => "DEGRADED",
            NodeStatus::Offline => "OFFLINE",
        }
    }
}

/// One row of the node inventory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NodeSummary {
    pub name: String,
    pub kind: NodeKind,
    pub status: NodeStatus,
}

/// Security posture shown on the security screen.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SecurityOverview {
    pub threats_blocked: u32,
    pub sandbox_active: bool,
    pub policy_violations: u32,
    /// Preformatted timestamp of the last completed sweep.
    pub last_scan: String,
    /// Authentication events recorded in the trailing 24 hours.
    pub auth_events_24h: u32,
    /// Subset of those events flagged as suspicious.
    pub suspicious_events: u32,
}

/// One key/value row on the settings screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SettingEntry {
    pub key: String,
    pub value: String,
}

impl SettingEntry {
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self { key: key.into(), value: value.into() }
    }
}

/// Snapshot of everything the screens display.
#[derive(Debug, Clone, PartialEq)]
pub struct SessionState {
    /// Authenticated operator, if any. The login screen never shows one.
    pub operator: Option<String>,
    /// Display role attached to the operator account.
    pub role: String,
    /// Organization suffix shown after the operator, as `user@org`.
    pub org: String,
    pub session_id: String,
    pub workflows: Vec<WorkflowSummary>,
    pub metrics: MetricsSnapshot,
    pub nodes: Vec<NodeSummary>,
    pub security: SecurityOverview,
    /// Preformatted recent-activity lines, newest last.
    pub audit: Vec<String>,
    pub settings: Vec<SettingEntry>,
}

impl SessionState {
    /// An empty snapshot carrying only identity fields.
    pub fn new(session_id: impl Into<String>) -> Self {
        Self {
            operator: None,
            role: "Operator".to_string(),
            org: "citadel-corp".to_string(),
            session_id: session_id.into(),
            workflows: Vec::new(),
            metrics: MetricsSnapshot::default(),
            nodes: Vec::new(),
            security: SecurityOverview::default(),
            audit: Vec::new(),
            settings: Vec::new(),
        }
    }

    pub fn set_operator(&mut self, username: impl Into<String>) {
        self.operator = Some(username.into());
    }

    pub fn clear_operator(&mut self) {
        self.operator = None;
    }

    pub fn authenticated(&self) -> bool {
        self.operator.is_some()
    }
}
