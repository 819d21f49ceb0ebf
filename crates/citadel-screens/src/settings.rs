use citadel_core::command::{CommandSpec, RETURN_COMMANDS};
use citadel_core::screen::{Screen, ScreenId};
use citadel_core::session::SessionState;
use citadel_render::{BorderStyle, Color, Column, RenderNode, TextStyle};

use crate::theme;

/// Read-only view of the operator's preference entries.
pub struct SettingsScreen;

impl Screen for SettingsScreen {
    fn id(&self) -> ScreenId {
        ScreenId::Settings
    }

    fn title(&self) -> &'static str {
        "User Settings"
    }

    fn build(&self, state: &SessionState) -> RenderNode {
        RenderNode::stack(vec![
            RenderNode::panel_with(
                "Settings",
                BorderStyle::double(Color::Cyan),
                RenderNode::styled("USER SETTINGS", TextStyle::bold(Color::Cyan).centered()),
            ),
            RenderNode::blank(),
            settings_table(state),
            RenderNode::blank(),
            theme::return_hint(),
        ])
    }

    fn commands(&self) -> &'static [CommandSpec] {
        RETURN_COMMANDS
    }
}

fn settings_table(state: &SessionState) -> RenderNode {
    let columns = vec![Column::new("SETTING"), Column::new("VALUE").max_width(32)];
    let rows = state
        .settings
        .iter()
        .map(|entry| vec![entry.key.clone(), entry.value.clone()])
        .collect();
    RenderNode::table(columns, rows)
}

#[cfg(test)]
mod tests {
    use super::*;
    use citadel_core::session::SettingEntry;
    use citadel_render::{draw, TermCaps};

    fn render(state: &SessionState) -> String {
        draw(&SettingsScreen.build(state), 72, TermCaps::plain())
            .unwrap()
            .join("\n")
    }

    #[test]
    fn lists_setting_entries() {
        let mut state = SessionState::new("s");
        state.settings = vec![
            SettingEntry::new("Theme", "citadel-dark"),
            SettingEntry::new("Audit Retention", "90 days"),
        ];
        let body = render(&state);
        assert!(body.contains("Theme"));
        assert!(body.contains("citadel-dark"));
        assert!(body.contains("Audit Retention"));
    }

    #[test]
    fn long_values_truncate_at_column_cap() {
        let mut state = SessionState::new("s");
        state.settings = vec![SettingEntry::new(
            "Webhook",
            "https://hooks.citadel-corp.example/ingest/very/long/path",
        )];
        let body = render(&state);
        assert!(body.contains('~'), "expected a truncation marker:\n{body}");
        assert!(!body.contains("long/path"));
    }

    #[test]
    fn empty_settings_still_render_headers() {
        let body = render(&SessionState::new("s"));
        assert!(body.contains("SETTING"));
        assert!(body.contains("VALUE"));
    }
}
