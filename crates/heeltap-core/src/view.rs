//! Which side of the shoe faces the user.

use serde::{Deserialize, Serialize};

/// Camera orientation. Tools can only be picked up while looking at the sole.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ViewOrientation {
    Side,
    Bottom,
}

impl ViewOrientation {
    pub fn toggled(self) -> Self {
        match self {
            Self::Side => Self::Bottom,
            Self::Bottom => Self::Side,
        }
    }

    /// Whether the sole is visible.
    pub fn shows_sole(self) -> bool {
        matches!(self, Self::Bottom)
    }
}

impl std::fmt::Display for ViewOrientation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Side => write!(f, "side"),
            Self::Bottom => write!(f, "bottom"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_is_an_involution() {
        for view in [ViewOrientation::Side, ViewOrientation::Bottom] {
            assert_ne!(view.toggled(), view);
            assert_eq!(view.toggled().toggled(), view);
        }
    }
}
