use citadel_core::command::{CommandSpec, GLOBAL_COMMANDS, RETURN_COMMANDS};
use citadel_core::screen::{Screen, ScreenId};
use citadel_core::session::SessionState;
use citadel_render::{BorderStyle, Color, RenderNode, TextStyle};

use crate::dashboard::DASHBOARD_COMMANDS;
use crate::theme;

/// Command reference. The listing is generated from the live command tables,
/// so it can never disagree with what the dispatcher accepts.
pub struct HelpScreen;

impl Screen for HelpScreen {
    fn id(&self) -> ScreenId {
        ScreenId::Help
    }

    fn title(&self) -> &'static str {
        "Help"
    }

    fn build(&self, _state: &SessionState) -> RenderNode {
        let mut lines = vec![
            RenderNode::panel_with(
                "Help",
                BorderStyle::double(Color::Green),
                RenderNode::stack(vec![
                    RenderNode::styled("CITADEL-AGENT HELP", TextStyle::bold(Color::Green).centered()),
                    RenderNode::styled("Command Reference", TextStyle::dim().centered()),
                ]),
            ),
            RenderNode::blank(),
            RenderNode::styled("DASHBOARD COMMANDS:", TextStyle::bold(Color::White)),
        ];
        lines.extend(command_lines(DASHBOARD_COMMANDS));
        lines.push(RenderNode::blank());
        lines.push(RenderNode::styled("AVAILABLE EVERYWHERE:", TextStyle::bold(Color::White)));
        lines.extend(command_lines(GLOBAL_COMMANDS));
        lines.extend(command_lines(RETURN_COMMANDS));
        lines.push(RenderNode::blank());
        lines.push(RenderNode::styled("SYSTEM INFORMATION:", TextStyle::bold(Color::White)));
        lines.push(RenderNode::text(format!("  Version : {}", env!("CARGO_PKG_VERSION"))));
        lines.push(RenderNode::text("  Engine  : Foundation-Core v0.1.0"));
        lines.push(RenderNode::blank());
        lines.push(theme::return_hint());
        RenderNode::stack(lines)
    }

    fn commands(&self) -> &'static [CommandSpec] {
        RETURN_COMMANDS
    }
}

fn command_lines(specs: &[CommandSpec]) -> Vec<RenderNode> {
    specs
        .iter()
        .map(|spec| {
            let aliases = if spec.aliases.is_empty() {
                String::new()
            } else {
                format!("  ({})", spec.aliases.join(", "))
            };
            RenderNode::text(format!("  {:<12}- {}{}", spec.name, spec.summary, aliases))
        })
        .collect()
}
