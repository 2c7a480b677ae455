//! The workshop controller.
//!
//! Owns one repair session and the advice request that goes with it. The
//! advice call is split into [`Workshop::start_advice`] and
//! [`Workshop::finish_advice`] so the network wait never holds a borrow of
//! the workshop; [`Workshop::ask_for_advice`] runs both back to back.

use std::sync::Arc;

use anyhow::Context;
use chrono::Utc;
use serde::Serialize;
use tracing::{debug, info};
use uuid::Uuid;

use heeltap_advisor::{render_tips, AdviceReply, AdviceRequester, AdviceState, TipLine};
use heeltap_core::{Outcome, RepairSession, SessionSnapshot, Tool};

use crate::error::{WorkshopError, WorkshopResult};

/// A latched advice request, ready to run off the workshop.
///
/// Carries the id of the session that asked, so a reply that outlives a
/// restart is not mistaken for advice about the new repair.
#[derive(Debug)]
#[must_use = "the advice request only happens when the ticket is run"]
pub struct AdviceTicket {
    session_id: Uuid,
    requester: Arc<AdviceRequester>,
}

impl AdviceTicket {
    pub fn session_id(&self) -> Uuid {
        self.session_id
    }

    /// Perform the request. Never fails; failures come back as a reply.
    pub async fn run(self) -> TicketReply {
        TicketReply {
            session_id: self.session_id,
            reply: self.requester.request().await,
        }
    }

    /// Run the request on the tokio runtime.
    pub fn spawn(self) -> tokio::task::JoinHandle<TicketReply> {
        tokio::spawn(self.run())
    }
}

/// An advice reply tagged with the session that asked for it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TicketReply {
    pub session_id: Uuid,
    pub reply: AdviceReply,
}

/// Everything the presentation layer draws, in one serializable value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WorkshopView {
    pub session: SessionSnapshot,
    pub advisor_visible: bool,
    pub restart_available: bool,
    pub advice: AdviceState,
    pub tips: Option<Vec<TipLine>>,
}

#[derive(Debug)]
pub struct Workshop {
    session: RepairSession,
    advice: AdviceState,
    requester: Arc<AdviceRequester>,
}

impl Workshop {
    pub fn new(requester: AdviceRequester) -> Self {
        Self::with_requester(Arc::new(requester))
    }

    /// Build a workshop around a requester shared with other workshops.
    pub fn with_requester(requester: Arc<AdviceRequester>) -> Self {
        Self {
            session: RepairSession::new(),
            advice: AdviceState::default(),
            requester,
        }
    }

    /// Load `.env` if present, then configure the advisor from the environment.
    ///
    /// A missing API key is not an error: the workshop still runs and the
    /// advice panel answers with the not-configured message.
    ///
    /// ```no_run
    /// heeltap_workshop::init_tracing_from_env();
    /// let workshop = heeltap_workshop::Workshop::from_env()?;
    /// assert!(!workshop.advisor_visible());
    /// # Ok::<(), anyhow::Error>(())
    /// ```
    pub fn from_env() -> anyhow::Result<Self> {
        if let Ok(path) = dotenvy::dotenv() {
            debug!(path = %path.display(), "Loaded .env");
        }
        let requester =
            AdviceRequester::from_env().context("failed to build the advice client")?;
        if !requester.is_configured() {
            info!("No advice API key configured; tips will be unavailable");
        }
        Ok(Self::new(requester))
    }

    pub fn session(&self) -> &RepairSession {
        &self.session
    }

    pub fn advice(&self) -> &AdviceState {
        &self.advice
    }

    pub fn select_tool(&mut self, tool: Tool) -> Outcome {
        self.session.select_tool(tool)
    }

    pub fn return_tool(&mut self) -> Outcome {
        self.session.return_tool()
    }

    pub fn interact(&mut self) -> Outcome {
        self.session.interact()
    }

    pub fn toggle_view(&mut self) -> Outcome {
        self.session.toggle_view()
    }

    pub fn click_surface(&mut self) -> Outcome {
        self.session.click_surface()
    }

    pub fn click_slot(&mut self, tool: Tool) -> Outcome {
        self.session.click_slot(tool)
    }

    /// The advice panel shows once the job is done and the hands are empty.
    pub fn advisor_visible(&self) -> bool {
        self.session.advice_available()
    }

    pub fn restart_available(&self) -> bool {
        self.session.restart_available()
    }

    /// Start over with a fresh shoe.
    ///
    /// The advice latch belongs to the session, so the new repair starts at
    /// `NotAsked`. A request still in flight is not cancelled; its reply is
    /// dropped by [`Workshop::finish_advice`].
    pub fn restart(&mut self) -> Outcome {
        if self.advice.is_pending() {
            debug!(session_id = %self.session.id(), "Restarting with advice in flight");
        }
        self.advice = AdviceState::default();
        self.session.reset()
    }

    /// Latch the advice request and hand back the work to perform.
    pub fn start_advice(&mut self) -> WorkshopResult<AdviceTicket> {
        if !self.advisor_visible() {
            return Err(WorkshopError::NotFinished);
        }
        self.advice.begin(Utc::now())?;
        info!(session_id = %self.session.id(), "Advice requested");
        Ok(AdviceTicket {
            session_id: self.session.id(),
            requester: Arc::clone(&self.requester),
        })
    }

    /// Record the reply of the ticket returned by [`Workshop::start_advice`].
    ///
    /// A reply for an earlier session is dropped and the current advice state
    /// is returned unchanged.
    pub fn finish_advice(&mut self, answer: TicketReply) -> WorkshopResult<&AdviceState> {
        if answer.session_id != self.session.id() {
            info!(
                stale_session_id = %answer.session_id,
                session_id = %self.session.id(),
                "Dropping advice for a previous session"
            );
            return Ok(&self.advice);
        }
        let failed = answer.reply.is_failure();
        self.advice.resolve(answer.reply, Utc::now())?;
        info!(session_id = %self.session.id(), failed, "Advice settled");
        Ok(&self.advice)
    }

    /// Ask for advice and wait for the answer.
    pub async fn ask_for_advice(&mut self) -> WorkshopResult<&AdviceState> {
        let ticket = self.start_advice()?;
        let answer = ticket.run().await;
        self.finish_advice(answer)
    }

    /// The settled advice text, styled line by line.
    pub fn tips(&self) -> Option<Vec<TipLine>> {
        self.advice.display_text().map(render_tips)
    }

    pub fn view(&self) -> WorkshopView {
        WorkshopView {
            session: self.session.snapshot(),
            advisor_visible: self.advisor_visible(),
            restart_available: self.restart_available(),
            advice: self.advice.clone(),
            tips: self.tips(),
        }
    }
}
