//! The eight screens of the Citadel dashboard.
//!
//! Each screen is a pure view over the session snapshot: `build` returns a
//! render tree, `commands` a static dispatch table. Nothing here touches the
//! terminal or mutates state.

pub mod dashboard;
pub mod help;
pub mod login;
pub mod monitoring;
pub mod nodes;
pub mod security;
pub mod settings;
pub mod workflows;

mod theme;

pub use dashboard::{DashboardScreen, DASHBOARD_COMMANDS};
pub use help::HelpScreen;
pub use login::LoginScreen;
pub use monitoring::MonitoringScreen;
pub use nodes::NodeListScreen;
pub use security::SecurityScreen;
pub use settings::SettingsScreen;
pub use workflows::WorkflowListScreen;

use citadel_core::screen::Screen;

/// Every screen, boxed for registration, in [`ScreenId::all`] order.
///
/// [`ScreenId::all`]: citadel_core::screen::ScreenId::all
pub fn all_screens() -> Vec<Box<dyn Screen>> {
    vec![
        Box::new(LoginScreen),
        Box::new(DashboardScreen),
        Box::new(HelpScreen),
        Box::new(WorkflowListScreen),
        Box::new(NodeListScreen),
        Box::new(MonitoringScreen),
        Box::new(SecurityScreen),
        Box::new(SettingsScreen),
    ]
}
