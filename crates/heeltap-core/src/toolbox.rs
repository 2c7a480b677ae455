//! Toolbox affordances: how each panel slot should be drawn.

use serde::{Deserialize, Serialize};

use crate::step::RepairStep;
use crate::tool::Tool;

/// Visual state of one slot on the tool panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SlotState {
    /// The tool is in the user's hand; the slot is an empty outline.
    InHand,
    /// Hands are empty and this is the tool the step needs.
    Required,
    /// Hands are empty, the repair is ongoing, and this tool is not needed.
    Dimmed,
    /// Drawn normally.
    Available,
}

/// One slot on the tool panel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ToolSlot {
    pub tool: Tool,
    pub name: &'static str,
    pub description: &'static str,
    pub state: SlotState,
}

/// Slot state for `tool` given the current step and hand.
pub fn slot_state(tool: Tool, step: RepairStep, held: Option<Tool>) -> SlotState {
    match held {
        Some(h) if h == tool => SlotState::InHand,
        Some(_) => SlotState::Available,
        None if step.required_tool() == Some(tool) => SlotState::Required,
        None if !step.is_terminal() => SlotState::Dimmed,
        None => SlotState::Available,
    }
}

/// All slots, in panel order.
pub fn layout(step: RepairStep, held: Option<Tool>) -> Vec<ToolSlot> {
    Tool::ALL
        .iter()
        .map(|&tool| ToolSlot {
            tool,
            name: tool.name(),
            description: tool.description(),
            state: slot_state(tool, step, held),
        })
        .collect()
}
