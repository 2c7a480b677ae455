//! Tools hanging on the workshop panel.

use serde::{Deserialize, Serialize};

/// A tool the user can hold.
///
/// "No tool held" is `Option::<Tool>::None` on the session rather than a
/// variant here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Tool {
    Pliers,
    Sandpaper,
    Glue,
    NewTap,
    Hammer,
}

impl Tool {
    /// Panel order, left to right.
    pub const ALL: [Tool; 5] = [
        Self::Pliers,
        Self::Sandpaper,
        Self::Glue,
        Self::NewTap,
        Self::Hammer,
    ];

    /// Label shown on the panel.
    pub fn name(self) -> &'static str {
        match self {
            Self::Pliers => "Pliers",
            Self::Sandpaper => "Sandpaper",
            Self::Glue => "Glue",
            Self::NewTap => "New Tap",
            Self::Hammer => "Hammer",
        }
    }

    /// One-line description of what the tool is for.
    pub fn description(self) -> &'static str {
        match self {
            Self::Pliers => "Remove old tap",
            Self::Sandpaper => "Clean residue",
            Self::Glue => "Apply contact cement",
            Self::NewTap => "Fit replacement",
            Self::Hammer => "Drive nails",
        }
    }
}

impl std::fmt::Display for Tool {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_has_unique_names() {
        let mut names: Vec<_> = Tool::ALL.iter().map(|t| t.name()).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), Tool::ALL.len());
    }

    #[test]
    fn test_serde_uses_snake_case() {
        let json = serde_json::to_string(&Tool::NewTap).unwrap();
        assert_eq!(json, "\"new_tap\"");
    }
}
