use std::collections::HashMap;
use std::fmt;

use anyhow::{bail, Result};
use citadel_render::RenderNode;

use crate::command::CommandSpec;
use crate::session::SessionState;

/// Identifies each screen of the dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScreenId {
    Login,
    Dashboard,
    Help,
    WorkflowList,
    NodeList,
    Monitoring,
    Security,
    Settings,
}

impl ScreenId {
    /// Every screen, in registration order.
    pub fn all() -> [ScreenId; 8] {
        [
            ScreenId::Login,
            ScreenId::Dashboard,
            ScreenId::Help,
            ScreenId::WorkflowList,
            ScreenId::NodeList,
            ScreenId::Monitoring,
            ScreenId::Security,
            ScreenId::Settings,
        ]
    }

    pub fn name(&self) -> &'static str {
        match self {
            ScreenId::Login => "login",
            ScreenId::Dashboard => "dashboard",
            ScreenId::Help => "help",
            ScreenId::WorkflowList => "workflows",
            ScreenId::NodeList => "nodes",
            ScreenId::Monitoring => "monitoring",
            ScreenId::Security => "security",
            ScreenId::Settings => "settings",
        }
    }
}

impl fmt::Display for ScreenId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A dashboard screen.
///
/// Screens are pure views. [`build`](Screen::build) turns the current session
/// snapshot into a render tree and must not mutate anything or read ambient
/// state; the same snapshot always yields the same tree.
pub trait Screen {
    /// Which screen this is.
    fn id(&self) -> ScreenId;

    /// Human-readable name, shown in logs and screen listings.
    fn title(&self) -> &'static str;

    /// Build the render tree for the current session snapshot.
    fn build(&self, state: &SessionState) -> RenderNode;

    /// Commands available while this screen is active, in addition to the
    /// globals. The table is static; nothing is registered at runtime.
    fn commands(&self) -> &'static [CommandSpec] {
        &[]
    }
}

/// Owns every screen and resolves them by id.
pub struct ScreenRegistry {
    screens: Vec<Box<dyn Screen>>,
    index: HashMap<ScreenId, usize>,
}

impl Default for ScreenRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl ScreenRegistry {
    pub fn new() -> Self {
        Self {
            screens: Vec::new(),
            index: HashMap::new(),
        }
    }

    pub fn register(&mut self, screen: Box<dyn Screen>) -> Result<()> {
        let id = screen.id();
        if self.index.contains_key(&id) {
            bail!("duplicate screen id: {}", id);
        }
        let idx = self.screens.len();
        self.index.insert(id, idx);
        self.screens.push(screen);
        Ok(())
    }

    pub fn get(&self, id: ScreenId) -> Option<&dyn Screen> {
        self.index.get(&id).map(|&i| &*self.screens[i])
    }

    pub fn list(&self) -> Vec<(ScreenId, &str)> {
        self.screens.iter().map(|s| (s.id(), s.title())).collect()
    }

    pub fn len(&self) -> usize {
        self.screens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.screens.is_empty()
    }
}
