use citadel_core::screen::{Screen, ScreenId};
use citadel_core::session::SessionState;
use citadel_render::{BorderStyle, Color, RenderNode, TextStyle};

/// The entry screen: engine banner plus the pre-auth status block.
///
/// Credential prompting happens in the binary. This screen renders only the
/// surrounding chrome and deliberately ignores the session snapshot, so it
/// looks the same before and after a logout.
pub struct LoginScreen;

impl Screen for LoginScreen {
    fn id(&self) -> ScreenId {
        ScreenId::Login
    }

    fn title(&self) -> &'static str {
        "Secure Login"
    }

    fn build(&self, _state: &SessionState) -> RenderNode {
        RenderNode::stack(vec![
            banner(),
            RenderNode::blank(),
            RenderNode::styled(
                "[ AUTHENTICATION REQUIRED ]",
                TextStyle::bold(Color::Red).centered(),
            ),
            RenderNode::blank(),
            RenderNode::styled("STATUS : Secure channel initialized", TextStyle::colored(Color::Cyan)),
            RenderNode::styled("ENGINE : Foundation-Core v0.1.0", TextStyle::colored(Color::Cyan)),
            RenderNode::styled("MODE   : Operator Login", TextStyle::colored(Color::Cyan)),
            RenderNode::blank(),
            RenderNode::styled("NOTES:", TextStyle::colored(Color::Yellow)),
            RenderNode::text("  - Ensure credentials are correct."),
            RenderNode::text("  - Access is recorded in the event log."),
            RenderNode::text("  - Sandbox and policy isolation are enforced."),
        ])
    }
}

fn banner() -> RenderNode {
    RenderNode::panel_with(
        "SECURE LOGIN",
        BorderStyle::double(Color::Cyan),
        RenderNode::stack(vec![
            RenderNode::styled("CITADEL-AGENT", TextStyle::bold(Color::Cyan).centered()),
            RenderNode::styled(
                "Autonomous Secure Workflow Engine",
                TextStyle::dim().centered(),
            ),
        ]),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use citadel_render::{display_width, draw, TermCaps};

    fn render(state: &SessionState) -> Vec<String> {
        draw(&LoginScreen.build(state), 64, TermCaps::plain()).unwrap()
    }

    #[test]
    fn shows_banner_and_auth_prompt() {
        let lines = render(&SessionState::new("SECURE-OPS-TEST"));
        let body = lines.join("\n");
        assert!(body.contains("CITADEL-AGENT"));
        assert!(body.contains("[ AUTHENTICATION REQUIRED ]"));
        assert!(body.contains("Operator Login"));
    }

    #[test]
    fn never_exceeds_target_width() {
        for width in [20, 40, 64, 100] {
            let lines =
                draw(&LoginScreen.build(&SessionState::new("s")), width, TermCaps::plain()).unwrap();
            for line in lines {
                assert!(display_width(&line) <= width, "{line:?} at width {width}");
            }
        }
    }

    #[test]
    fn ignores_session_contents() {
        let empty = SessionState::new("SECURE-OPS-TEST");
        let mut authed = SessionState::new("SECURE-OPS-TEST");
        authed.set_operator("morgan");
        assert_eq!(render(&empty), render(&authed));
    }

    #[test]
    fn has_no_extra_commands() {
        assert!(LoginScreen.commands().is_empty());
    }
}
