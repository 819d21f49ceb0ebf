use citadel_core::command::{CommandSpec, RETURN_COMMANDS};
use citadel_core::screen::{Screen, ScreenId};
use citadel_core::session::{NodeStatus, SessionState};
use citadel_render::{BorderStyle, Color, Column, RenderNode, TextStyle};

use crate::theme;

/// Execution node inventory: name, kind, reachability.
pub struct NodeListScreen;

impl Screen for NodeListScreen {
    fn id(&self) -> ScreenId {
        ScreenId::NodeList
    }

    fn title(&self) -> &'static str {
        "Node Management"
    }

    fn build(&self, state: &SessionState) -> RenderNode {
        RenderNode::stack(vec![
            RenderNode::panel_with(
                "Nodes",
                BorderStyle::double(Color::Blue),
                RenderNode::styled("NODE MANAGEMENT", TextStyle::bold(Color::Blue).centered()),
            ),
            RenderNode::blank(),
            node_table(state),
            RenderNode::blank(),
            summary_line(state),
            RenderNode::blank(),
            theme::return_hint(),
        ])
    }

    fn commands(&self) -> &'static [CommandSpec] {
        RETURN_COMMANDS
    }
}

fn node_table(state: &SessionState) -> RenderNode {
    let columns = vec![Column::new("NODE"), Column::new("TYPE"), Column::new("STATUS")];
    let rows = state
        .nodes
        .iter()
        .map(|node| {
            vec![
                node.name.clone(),
                node.kind.label().to_string(),
                node.status.label().to_string(),
            ]
        })
        .collect();
    RenderNode::table(columns, rows)
}

fn summary_line(state: &SessionState) -> RenderNode {
    let online = state
        .nodes
        .iter()
        .filter(|node| node.status == NodeStatus::Online)
        .count();
    let color = if online == state.nodes.len() { Color::Green } else { Color::Yellow };
    RenderNode::styled(
        format!("{} nodes registered | {} online", state.nodes.len(), online),
        TextStyle::colored(color),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use citadel_core::session::{NodeKind, NodeSummary};
    use citadel_render::{draw, TermCaps};

    fn state_with_nodes() -> SessionState {
        let mut state = SessionState::new("s");
        state.nodes = vec![
            NodeSummary {
                name: "ingest-gateway".into(),
                kind: NodeKind::HttpRequest,
                status: NodeStatus::Online,
            },
            NodeSummary {
                name: "edge-relay-7".into(),
                kind: NodeKind::HttpRequest,
                status: NodeStatus::Degraded,
            },
            NodeSummary {
                name: "archive-writer".into(),
                kind: NodeKind::Function,
                status: NodeStatus::Offline,
            },
        ];
        state
    }

    fn render(state: &SessionState) -> String {
        draw(&NodeListScreen.build(state), 72, TermCaps::plain())
            .unwrap()
            .join("\n")
    }

    #[test]
    fn lists_every_node_with_kind_and_status() {
        let body = render(&state_with_nodes());
        assert!(body.contains("ingest-gateway"));
        assert!(body.contains("http_request"));
        assert!(body.contains("DEGRADED"));
        assert!(body.contains("OFFLINE"));
    }

    #[test]
    fn counts_online_nodes() {
        assert!(render(&state_with_nodes()).contains("3 nodes registered | 1 online"));
    }

    #[test]
    fn empty_inventory_still_renders() {
        let body = render(&SessionState::new("s"));
        assert!(body.contains("NODE MANAGEMENT"));
        assert!(body.contains("0 nodes registered | 0 online"));
    }
}
