use crate::screen::ScreenId;

/// What a matched command does.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandAction {
    /// Switch to another screen.
    Goto(ScreenId),
    /// End the session with an exit code.
    Exit(i32),
}

/// One dispatchable command: primary name, aliases, and effect.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommandSpec {
    pub name: &'static str,
    pub aliases: &'static [&'static str],
    pub summary: &'static str,
    pub action: CommandAction,
}

impl CommandSpec {
    pub const fn new(
        name: &'static str,
        aliases: &'static [&'static str],
        summary: &'static str,
        action: CommandAction,
    ) -> Self {
        Self { name, aliases, summary, action }
    }

    /// True when already-normalized input matches the name or an alias.
    pub fn matches(&self, input: &str) -> bool {
        self.name == input || self.aliases.contains(&input)
    }
}

/// Result of feeding one round of input to the controller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Transition {
    /// Nothing changed; render the same screen again.
    Stay,
    /// The active screen changed.
    GoTo(ScreenId),
    /// End the session with this exit code.
    Exit(i32),
    /// Input was refused; the message is shown to the operator.
    Reject(String),
}

/// Commands honored on every screen.
pub const GLOBAL_COMMANDS: &[CommandSpec] = &[
    CommandSpec::new(
        "esc",
        &[],
        "Log out and return to the login screen",
        CommandAction::Goto(ScreenId::Login),
    ),
    CommandSpec::new("quit", &["exit", "q"], "End the session", CommandAction::Exit(0)),
];

/// Commands shared by every screen reached from the dashboard.
pub const RETURN_COMMANDS: &[CommandSpec] = &[CommandSpec::new(
    "dashboard",
    &["back", "b"],
    "Return to the dashboard",
    CommandAction::Goto(ScreenId::Dashboard),
)];

/// Normalize operator input before matching: trim and lowercase.
pub fn normalize(input: &str) -> String {
    input.trim().to_lowercase()
}

/// Resolve normalized input against the given tables, first match wins.
pub fn find_action(tables: &[&[CommandSpec]], input: &str) -> Option<CommandAction> {
    tables
        .iter()
        .flat_map(|table| table.iter())
        .find(|spec| spec.matches(input))
        .map(|spec| spec.action)
}
