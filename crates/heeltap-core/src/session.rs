//! The repair session: the one mutable entity the presentation layer drives.
//!
//! Every user action maps to one method here. Each method mutates the
//! session, leaves a typed [`Status`] for the banner, and returns an
//! [`Outcome`] so callers never have to parse message text.

use serde::Serialize;
use uuid::Uuid;

use crate::obs::{self, SessionSpan};
use crate::outcome::{Outcome, Rejection};
use crate::status::{Status, NAILS_REQUIRED};
use crate::step::RepairStep;
use crate::tool::Tool;
use crate::toolbox::{self, ToolSlot};
use crate::view::ViewOrientation;

/// State of one heel-tap repair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepairSession {
    id: Uuid,
    step: RepairStep,
    held_tool: Option<Tool>,
    view: ViewOrientation,
    nails_driven: u8,
    status: Status,
}

/// Serializable view of a session for the presentation layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SessionSnapshot {
    pub session_id: Uuid,
    pub step: RepairStep,
    pub step_number: u8,
    pub held_tool: Option<Tool>,
    pub view: ViewOrientation,
    pub nails_driven: u8,
    pub status: Status,
    pub message: String,
    pub advice_available: bool,
    pub toolbox: Vec<ToolSlot>,
}

impl Default for RepairSession {
    fn default() -> Self {
        Self::new()
    }
}

impl RepairSession {
    /// A fresh session: damaged heel, empty hands, side view.
    pub fn new() -> Self {
        Self {
            id: Uuid::new_v4(),
            step: RepairStep::Damaged,
            held_tool: None,
            view: ViewOrientation::Side,
            nails_driven: 0,
            status: Status::Welcome,
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn step(&self) -> RepairStep {
        self.step
    }

    pub fn held_tool(&self) -> Option<Tool> {
        self.held_tool
    }

    pub fn view(&self) -> ViewOrientation {
        self.view
    }

    /// Nails driven into the new tap. Only meaningful once the tap is placed.
    pub fn nails_driven(&self) -> u8 {
        self.nails_driven
    }

    pub fn status(&self) -> Status {
        self.status
    }

    /// Banner text for the current status.
    pub fn status_message(&self) -> String {
        self.status.to_string()
    }

    pub fn step_number(&self) -> u8 {
        self.step.number()
    }

    pub fn is_finished(&self) -> bool {
        self.step.is_terminal()
    }

    /// Whether the post-repair advice panel may be shown: the repair is
    /// finished and the hammer is back on the panel.
    pub fn advice_available(&self) -> bool {
        self.is_finished() && self.held_tool.is_none()
    }

    /// Whether a new repair may be started. Same condition as advice.
    pub fn restart_available(&self) -> bool {
        self.advice_available()
    }

    /// Pick up a tool from the panel.
    ///
    /// Refused when a tool is already in hand, when the sole is not visible
    /// (unless the repair is finished), or when the tool is not the one the
    /// current step needs.
    pub fn select_tool(&mut self, tool: Tool) -> Outcome {
        let _span = SessionSpan::enter(self.id);

        if self.held_tool.is_some() {
            return self.reject("select_tool", Rejection::ToolHeld, Status::ToolAlreadyHeld);
        }

        if !self.view.shows_sole() && !self.step.is_terminal() {
            return self.reject("select_tool", Rejection::WrongView, Status::TurnShoeFirst);
        }

        if self.step.required_tool() != Some(tool) {
            return self.reject("select_tool", Rejection::WrongTool, Status::WrongTool);
        }

        self.held_tool = Some(tool);
        self.status = Status::ToolReady { tool };
        obs::emit_tool_selected(tool, self.step);
        Outcome::Applied
    }

    /// Put the held tool back and point at what comes next.
    ///
    /// Succeeds with empty hands too; the hint still refreshes.
    pub fn return_tool(&mut self) -> Outcome {
        let _span = SessionSpan::enter(self.id);

        let returned = self.held_tool.take();
        self.status = Status::NextTool { step: self.step };
        obs::emit_tool_returned(returned, self.step);
        Outcome::Applied
    }

    /// Use the held tool on the heel.
    ///
    /// Ignored with empty hands, or when the held tool has already done its
    /// work for an earlier step.
    pub fn interact(&mut self) -> Outcome {
        let _span = SessionSpan::enter(self.id);

        let Some(tool) = self.held_tool else {
            return Outcome::Ignored;
        };
        if self.step.required_tool() != Some(tool) {
            return Outcome::Ignored;
        }

        if self.step == RepairStep::Placed {
            self.nails_driven = self.nails_driven.saturating_add(1);
            obs::emit_nail_driven(self.nails_driven);
            if self.nails_driven >= NAILS_REQUIRED {
                self.advance_to(RepairStep::Finished);
                self.status = Status::ReturnTool { tool };
            } else {
                self.status = Status::Nailing {
                    driven: self.nails_driven,
                };
            }
            return Outcome::Applied;
        }

        // Every other step completes in one use.
        match self.step.next() {
            Some(next) => {
                self.advance_to(next);
                self.status = Status::ReturnTool { tool };
                Outcome::Applied
            }
            None => Outcome::Ignored,
        }
    }

    /// Turn the shoe between side and bottom view.
    pub fn toggle_view(&mut self) -> Outcome {
        let _span = SessionSpan::enter(self.id);

        self.view = self.view.toggled();
        self.status = Status::ViewChanged { view: self.view };
        obs::emit_view_changed(self.view);
        Outcome::Applied
    }

    /// Start over with a fresh session.
    pub fn reset(&mut self) -> Outcome {
        let _span = SessionSpan::enter(self.id);

        obs::emit_session_reset(self.step);
        *self = Self::new();
        Outcome::Applied
    }

    /// Click on the shoe itself.
    ///
    /// From the side the click turns the shoe; on the sole it uses the held
    /// tool.
    pub fn click_surface(&mut self) -> Outcome {
        if self.view.shows_sole() {
            self.interact()
        } else {
            self.toggle_view()
        }
    }

    /// Click on a panel slot.
    ///
    /// The slot of the held tool takes it back; any slot with empty hands is
    /// a pickup attempt; other slots do nothing while a tool is held.
    pub fn click_slot(&mut self, tool: Tool) -> Outcome {
        match self.held_tool {
            Some(held) if held == tool => self.return_tool(),
            Some(_) => Outcome::Ignored,
            None => self.select_tool(tool),
        }
    }

    /// Panel slots with their current affordances.
    pub fn toolbox(&self) -> Vec<ToolSlot> {
        toolbox::layout(self.step, self.held_tool)
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            session_id: self.id,
            step: self.step,
            step_number: self.step_number(),
            held_tool: self.held_tool,
            view: self.view,
            nails_driven: self.nails_driven,
            status: self.status,
            message: self.status_message(),
            advice_available: self.advice_available(),
            toolbox: self.toolbox(),
        }
    }

    fn reject(&mut self, action: &str, reason: Rejection, status: Status) -> Outcome {
        obs::emit_action_rejected(action, reason, self.step);
        self.status = status;
        Outcome::Rejected(reason)
    }

    fn advance_to(&mut self, to: RepairStep) {
        debug_assert!(to > self.step, "repair steps only move forward");
        obs::emit_step_advanced(self.step, to);
        if to == RepairStep::Placed {
            self.nails_driven = 0;
        }
        self.step = to;
    }
}
