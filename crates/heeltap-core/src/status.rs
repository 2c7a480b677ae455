//! Status banner: what the workshop tells the user after every action.
//!
//! The session stores a typed [`Status`]; the banner text is its `Display`.
//! Callers that need to tell success from rejection look at the returned
//! [`Outcome`](crate::Outcome), never at this text.

use serde::{Deserialize, Serialize};

use crate::step::RepairStep;
use crate::tool::Tool;
use crate::view::ViewOrientation;

/// Nails the hammer must drive before the tap counts as secured.
pub const NAILS_REQUIRED: u8 = 5;

/// The message currently shown in the instruction banner.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Status {
    /// Fresh session.
    #[default]
    Welcome,
    /// Pickup attempted while looking at the side of the shoe.
    TurnShoeFirst,
    /// Pickup attempted with a tool already in hand.
    ToolAlreadyHeld,
    /// Pickup attempted with a tool the current step does not use.
    WrongTool,
    /// A tool was picked up.
    ToolReady { tool: Tool },
    /// The tool finished its step and should go back on the panel.
    ReturnTool { tool: Tool },
    /// A nail went in but more are needed.
    Nailing { driven: u8 },
    /// Hands are empty; point at what comes next.
    NextTool { step: RepairStep },
    /// The shoe was turned.
    ViewChanged { view: ViewOrientation },
}

impl Status {
    /// Whether this status is a warning about a refused pickup.
    pub fn is_warning(self) -> bool {
        matches!(
            self,
            Self::TurnShoeFirst | Self::ToolAlreadyHeld | Self::WrongTool
        )
    }
}

impl std::fmt::Display for Status {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Welcome => {
                f.write_str("Welcome to the workshop. Turn the shoe over to inspect the sole.")
            }
            Self::TurnShoeFirst => {
                f.write_str("⚠️ Turn the shoe to see the sole before picking up tools.")
            }
            Self::ToolAlreadyHeld => {
                f.write_str("⚠️ You already have a tool in hand. Put it back on the panel first.")
            }
            Self::WrongTool => f.write_str("That is not the right tool for this step."),
            Self::ToolReady { tool } => f.write_str(match tool {
                Tool::Pliers => "Pliers in hand. Detach the old tap.",
                Tool::Sandpaper => "Sandpaper in hand. Rub the heel to clean the area.",
                Tool::Glue => "Glue ready. Apply the white lines.",
                Tool::NewTap => "New tap. Place it precisely.",
                Tool::Hammer => "Hammer ready. Strike 5 times to secure it.",
            }),
            Self::ReturnTool { tool } => f.write_str(match tool {
                Tool::Pliers => "Done! Now return the PLIERS to the panel.",
                Tool::Sandpaper => "Surface ready. Return the SANDPAPER to the panel.",
                Tool::Glue => "Glue applied. Put the bottle back on the panel.",
                Tool::NewTap => "Tap in place. Return the tap box to the panel.",
                Tool::Hammer => "Perfect! Return the HAMMER to finish.",
            }),
            Self::Nailing { driven } => write!(f, "Nailing... ({driven}/{NAILS_REQUIRED})"),
            Self::NextTool { step } => f.write_str(match step {
                RepairStep::Damaged => "Select the next tool.",
                RepairStep::Removed => "Area cleared. Take the SANDPAPER from the panel.",
                RepairStep::Prepared => "Clean. Take the GLUE from the panel.",
                RepairStep::Glued => "Tacky. Take the NEW TAP from the panel.",
                RepairStep::Placed => "In place. Take the HAMMER from the panel.",
                RepairStep::Finished => "Job complete! Admire your work.",
            }),
            Self::ViewChanged { view } => f.write_str(match view {
                ViewOrientation::Bottom => {
                    "Bottom view. Now select the tool you need from the panel."
                }
                ViewOrientation::Side => "Side view. Turn it again to work.",
            }),
        }
    }
}
