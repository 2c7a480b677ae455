//! Repair steps: the ordered progress of a single heel-tap repair.

use serde::{Deserialize, Serialize};

use crate::tool::Tool;

/// A stage of the repair.
///
/// The declaration order is the repair order; `Ord` is used to assert that
/// a session only ever moves forward.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RepairStep {
    /// The worn tap is still on the heel.
    Damaged,
    /// The old tap has been pulled off.
    Removed,
    /// The heel block has been sanded clean.
    Prepared,
    /// Contact cement has been applied.
    Glued,
    /// The new tap sits on the heel, waiting for nails.
    Placed,
    /// All nails are driven.
    Finished,
}

impl RepairStep {
    /// Every step, in repair order.
    pub const ALL: [RepairStep; 6] = [
        Self::Damaged,
        Self::Removed,
        Self::Prepared,
        Self::Glued,
        Self::Placed,
        Self::Finished,
    ];

    /// The only tool that may be picked up during this step.
    ///
    /// `Finished` has no required tool.
    pub fn required_tool(self) -> Option<Tool> {
        match self {
            Self::Damaged => Some(Tool::Pliers),
            Self::Removed => Some(Tool::Sandpaper),
            Self::Prepared => Some(Tool::Glue),
            Self::Glued => Some(Tool::NewTap),
            Self::Placed => Some(Tool::Hammer),
            Self::Finished => None,
        }
    }

    /// The step reached once this step's tool has done its work.
    pub fn next(self) -> Option<RepairStep> {
        match self {
            Self::Damaged => Some(Self::Removed),
            Self::Removed => Some(Self::Prepared),
            Self::Prepared => Some(Self::Glued),
            Self::Glued => Some(Self::Placed),
            Self::Placed => Some(Self::Finished),
            Self::Finished => None,
        }
    }

    /// 1-based position shown in the instruction banner.
    pub fn number(self) -> u8 {
        self as u8 + 1
    }

    pub fn is_terminal(self) -> bool {
        matches!(self, Self::Finished)
    }
}

impl std::fmt::Display for RepairStep {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Damaged => write!(f, "damaged"),
            Self::Removed => write!(f, "removed"),
            Self::Prepared => write!(f, "prepared"),
            Self::Glued => write!(f, "glued"),
            Self::Placed => write!(f, "placed"),
            Self::Finished => write!(f, "finished"),
        }
    }
}
