use std::fmt;

use anyhow::{bail, Result};
use citadel_render::{draw, TermCaps};
use tracing::{debug, info, warn};

use crate::auth::Authenticator;
use crate::command::{find_action, normalize, CommandAction, Transition, GLOBAL_COMMANDS};
use crate::error::CommandError;
use crate::screen::{ScreenId, ScreenRegistry};
use crate::session::SessionState;

/// Drives the dashboard: holds the active screen, dispatches commands, and
/// renders the current screen against the session snapshot.
///
/// The controller starts at [`ScreenId::Login`] and only ever leaves it
/// through a successful [`handle_login`](ScreenController::handle_login).
pub struct ScreenController {
    registry: ScreenRegistry,
    auth: Box<dyn Authenticator>,
    session: SessionState,
    current: ScreenId,
}

impl fmt::Debug for ScreenController {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ScreenController")
            .field("current", &self.current)
            .finish_non_exhaustive()
    }
}

impl ScreenController {
    /// Build a controller over a registry that must contain every screen.
    pub fn new(
        registry: ScreenRegistry,
        auth: Box<dyn Authenticator>,
        session: SessionState,
    ) -> Result<Self> {
        for id in ScreenId::all() {
            if registry.get(id).is_none() {
                bail!("screen registry is missing screen: {}", id);
            }
        }
        Ok(Self {
            registry,
            auth,
            session,
            current: ScreenId::Login,
        })
    }

    pub fn current_screen(&self) -> ScreenId {
        self.current
    }

    pub fn session(&self) -> &SessionState {
        &self.session
    }

    /// Render the active screen.
    ///
    /// Never panics or exits: a render failure is logged and turned into
    /// visible error text so the loop keeps running.
    pub fn render(&self, width: usize, caps: TermCaps) -> Vec<String> {
        let Some(screen) = self.registry.get(self.current) else {
            // Unreachable after the constructor check, but degrade anyway.
            return vec![format!("render error: screen {} is not registered", self.current)];
        };
        let tree = screen.build(&self.session);
        match draw(&tree, width, caps) {
            Ok(lines) => lines,
            Err(err) => {
                warn!(screen = %self.current, error = %err, "render failed");
                vec![format!("render error: {err}")]
            }
        }
    }

    /// Dispatch one line of operator input.
    ///
    /// Input is trimmed and lowercased, matched against the global table and
    /// then the active screen's table. Empty input re-renders quietly;
    /// unmatched input is rejected without changing screens.
    pub fn handle_command(&mut self, raw: &str) -> Transition {
        let input = normalize(raw);
        if input.is_empty() {
            return Transition::Stay;
        }

        let screen_commands = self
            .registry
            .get(self.current)
            .map(|screen| screen.commands())
            .unwrap_or(&[]);

        match find_action(&[GLOBAL_COMMANDS, screen_commands], &input) {
            Some(CommandAction::Goto(target)) => self.goto(target),
            Some(CommandAction::Exit(code)) => {
                info!(code, "session ended by command");
                Transition::Exit(code)
            }
            None => {
                debug!(input = %input, screen = %self.current, "unrecognized command");
                Transition::Reject(CommandError::Unrecognized.to_string())
            }
        }
    }

    /// Verify a credential pair at the login screen.
    ///
    /// Success records the operator and moves to the dashboard; failure stays
    /// put. Called anywhere else it rejects without consulting the
    /// authenticator.
    pub fn handle_login(&mut self, username: &str, secret: &str) -> Transition {
        if self.current != ScreenId::Login {
            return Transition::Reject(CommandError::NotAtLogin.to_string());
        }

        let username = username.trim();
        if self.auth.verify(username, secret) {
            info!(user = %username, "operator authenticated");
            self.session.set_operator(username);
            self.goto(ScreenId::Dashboard)
        } else {
            warn!(user = %username, "authentication rejected");
            Transition::Reject(CommandError::AuthenticationFailed.to_string())
        }
    }

    fn goto(&mut self, target: ScreenId) -> Transition {
        // Returning to login always logs the operator out.
        if target == ScreenId::Login {
            self.session.clear_operator();
        }
        if target != self.current {
            info!(from = %self.current, to = %target, "screen transition");
        }
        self.current = target;
        Transition::GoTo(target)
    }
}
