//! Structured observability hooks for repair session events.
//!
//! This module provides:
//! - Session-scoped tracing spans via `SessionSpan` RAII guard
//! - Emission functions for the repair lifecycle: pickups, rejections,
//!   step advances, view turns, nails, resets
//!
//! Events are emitted at `debug!`/`info!` level; filter with `RUST_LOG`.

use tracing::{debug, info};
use uuid::Uuid;

use crate::outcome::Rejection;
use crate::step::RepairStep;
use crate::tool::Tool;
use crate::view::ViewOrientation;

/// RAII guard that enters a session-scoped tracing span.
///
/// # Example
///
/// ```ignore
/// let _span = SessionSpan::enter(session.id());
/// // every event below is tagged with session_id
/// ```
pub struct SessionSpan {
    _span: tracing::span::EnteredSpan,
}

impl SessionSpan {
    /// Create and enter a span tagged with the session id.
    pub fn enter(session_id: Uuid) -> Self {
        let span = tracing::info_span!("heeltap.session", session_id = %session_id);
        Self {
            _span: span.entered(),
        }
    }
}

pub fn emit_tool_selected(tool: Tool, step: RepairStep) {
    debug!(event = "repair.tool_selected", tool = %tool, step = %step);
}

pub fn emit_tool_returned(tool: Option<Tool>, step: RepairStep) {
    match tool {
        Some(tool) => debug!(event = "repair.tool_returned", tool = %tool, step = %step),
        None => debug!(event = "repair.tool_returned", step = %step, empty_handed = true),
    }
}

/// Emit event: an action was refused.
pub fn emit_action_rejected(action: &str, reason: Rejection, step: RepairStep) {
    debug!(
        event = "repair.action_rejected",
        action = action,
        reason = %reason,
        step = %step,
    );
}

/// Emit event: the repair moved to a new step.
pub fn emit_step_advanced(from: RepairStep, to: RepairStep) {
    info!(event = "repair.step_advanced", from = %from, to = %to);
}

pub fn emit_view_changed(view: ViewOrientation) {
    debug!(event = "repair.view_changed", view = %view);
}

pub fn emit_nail_driven(driven: u8) {
    debug!(event = "repair.nail_driven", driven = driven);
}

pub fn emit_session_reset(previous: RepairStep) {
    info!(event = "repair.reset", previous_step = %previous);
}
