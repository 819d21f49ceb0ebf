use citadel_core::command::{CommandSpec, RETURN_COMMANDS};
use citadel_core::screen::{Screen, ScreenId};
use citadel_core::session::SessionState;
use citadel_render::{BorderStyle, Color, Column, RenderNode, TextStyle};

use crate::theme;

/// Workflow inventory as a table: id, name, state, completion.
pub struct WorkflowListScreen;

impl Screen for WorkflowListScreen {
    fn id(&self) -> ScreenId {
        ScreenId::WorkflowList
    }

    fn title(&self) -> &'static str {
        "Workflow Management"
    }

    fn build(&self, state: &SessionState) -> RenderNode {
        RenderNode::stack(vec![
            RenderNode::panel_with(
                "Workflows",
                BorderStyle::double(Color::Green),
                RenderNode::styled("WORKFLOW MANAGEMENT", TextStyle::bold(Color::Green).centered()),
            ),
            RenderNode::blank(),
            workflow_table(state),
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

fn workflow_table(state: &SessionState) -> RenderNode {
    let columns = vec![
        Column::new("ID"),
        Column::new("NAME"),
        Column::new("STATUS"),
        Column::new("PROGRESS").right(),
    ];
    let rows = state
        .workflows
        .iter()
        .map(|wf| {
            vec![
                wf.id.clone(),
                wf.name.clone(),
                wf.status.label().to_string(),
                format!("{}%", wf.progress),
            ]
        })
        .collect();
    RenderNode::table(columns, rows)
}

fn summary_line(state: &SessionState) -> RenderNode {
    let running = state
        .workflows
        .iter()
        .filter(|wf| wf.status == citadel_core::session::WorkflowStatus::Running)
        .count();
    RenderNode::styled(
        format!("{} workflows | {} running", state.workflows.len(), running),
        TextStyle::colored(Color::Green),
    )
}
