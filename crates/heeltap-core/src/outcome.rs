//! Typed results of repair actions.

use serde::{Deserialize, Serialize};

/// Why an action was refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Rejection {
    /// A tool is already in hand.
    ToolHeld,
    /// The sole is not facing the user.
    WrongView,
    /// The tool does not belong to the current step.
    WrongTool,
}

impl std::fmt::Display for Rejection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ToolHeld => write!(f, "tool_held"),
            Self::WrongView => write!(f, "wrong_view"),
            Self::WrongTool => write!(f, "wrong_tool"),
        }
    }
}

/// What a repair action did to the session.
///
/// Rejections and ignored actions never change step, held tool, view or
/// nail count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "outcome", content = "reason", rename_all = "snake_case")]
pub enum Outcome {
    /// The action changed the session.
    Applied,
    /// The action was refused; the status now carries a warning.
    Rejected(Rejection),
    /// The action had nothing to act on; the session is untouched.
    Ignored,
}

impl Outcome {
    pub fn is_applied(self) -> bool {
        matches!(self, Self::Applied)
    }

    pub fn rejection(self) -> Option<Rejection> {
        match self {
            Self::Rejected(r) => Some(r),
            _ => None,
        }
    }
}
