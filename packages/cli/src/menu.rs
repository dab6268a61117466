//! Menu action types
//!
//! Shared by the interactive menu and subcommand dispatch.

use auth_core::FlowKind;

/// Actions that can be performed from the menu
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuAction {
    Login,
    Signup,
    ListBusiness,
    WhoAmI,
    Logout,
    Exit,
}

impl MenuAction {
    pub const ALL: [MenuAction; 6] = [
        MenuAction::Login,
        MenuAction::Signup,
        MenuAction::ListBusiness,
        MenuAction::WhoAmI,
        MenuAction::Logout,
        MenuAction::Exit,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            MenuAction::Login => "🔑 Login",
            MenuAction::Signup => "📝 Sign up",
            MenuAction::ListBusiness => "🏪 List your business for free",
            MenuAction::WhoAmI => "👤 Who am I?",
            MenuAction::Logout => "🚪 Logout",
            MenuAction::Exit => "🛑 Exit",
        }
    }

    /// The wizard flow this action opens, if any.
    pub fn flow(&self) -> Option<FlowKind> {
        match self {
            MenuAction::Login => Some(FlowKind::Login),
            MenuAction::Signup => Some(FlowKind::Signup),
            MenuAction::ListBusiness => Some(FlowKind::FreeListing),
            MenuAction::WhoAmI | MenuAction::Logout | MenuAction::Exit => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wizard_actions_map_to_flows() {
        assert_eq!(MenuAction::Login.flow(), Some(FlowKind::Login));
        assert_eq!(MenuAction::Signup.flow(), Some(FlowKind::Signup));
        assert_eq!(MenuAction::ListBusiness.flow(), Some(FlowKind::FreeListing));
        assert_eq!(MenuAction::Logout.flow(), None);
    }

    #[test]
    fn test_exit_is_last() {
        assert_eq!(MenuAction::ALL.last(), Some(&MenuAction::Exit));
    }
}
