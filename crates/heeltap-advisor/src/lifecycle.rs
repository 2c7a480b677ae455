//! Advice request lifecycle: the one-shot latch around a request.
//!
//! `NotAsked → Pending → Done | Failed`. Nothing leaves `Done` or `Failed`
//! except a fresh state for a new session.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::LifecycleError;
use crate::requester::{AdviceReply, FailureReason};

/// Where the advice request for a session stands.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum AdviceState {
    #[default]
    NotAsked,
    /// A request is in flight.
    Pending { requested_at: DateTime<Utc> },
    /// The service answered; `text` is what the panel shows.
    Done {
        text: String,
        completed_at: DateTime<Utc>,
    },
    Failed {
        reason: FailureReason,
        completed_at: DateTime<Utc>,
    },
}

impl AdviceState {
    /// Latch the request. Legal only once, from `NotAsked`.
    pub fn begin(&mut self, now: DateTime<Utc>) -> Result<(), LifecycleError> {
        if !matches!(self, Self::NotAsked) {
            return Err(LifecycleError::AlreadyAsked);
        }
        *self = Self::Pending { requested_at: now };
        Ok(())
    }

    /// Record the reply of the pending request.
    pub fn resolve(&mut self, reply: AdviceReply, now: DateTime<Utc>) -> Result<(), LifecycleError> {
        if !self.is_pending() {
            return Err(LifecycleError::NotPending);
        }
        *self = match reply {
            AdviceReply::Failed { reason } => Self::Failed {
                reason,
                completed_at: now,
            },
            other => Self::Done {
                text: other.into_message(),
                completed_at: now,
            },
        };
        Ok(())
    }

    pub fn has_asked(&self) -> bool {
        !matches!(self, Self::NotAsked)
    }

    pub fn is_pending(&self) -> bool {
        matches!(self, Self::Pending { .. })
    }

    pub fn is_settled(&self) -> bool {
        matches!(self, Self::Done { .. } | Self::Failed { .. })
    }

    /// Text for the advice panel once the request has settled.
    pub fn display_text(&self) -> Option<&str> {
        match self {
            Self::Done { text, .. } => Some(text),
            Self::Failed { reason, .. } => Some(reason.message()),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::requester::{NOT_CONFIGURED_MESSAGE, NO_TIPS_MESSAGE};

    #[test]
    fn test_default_is_not_asked() {
        let state = AdviceState::default();
        assert!(!state.has_asked());
        assert_eq!(state.display_text(), None);
    }

    #[test]
    fn test_begin_latches_once() {
        let mut state = AdviceState::default();
        state.begin(Utc::now()).unwrap();
        assert!(state.is_pending());
        assert_eq!(state.begin(Utc::now()), Err(LifecycleError::AlreadyAsked));
    }

    #[test]
    fn test_resolve_tips() {
        let mut state = AdviceState::default();
        state.begin(Utc::now()).unwrap();
        state
            .resolve(
                AdviceReply::Tips {
                    text: "- oil it".into(),
                },
                Utc::now(),
            )
            .unwrap();
        assert_eq!(state.display_text(), Some("- oil it"));
        assert!(state.is_settled());
    }

    #[test]
    fn test_resolve_no_tips_is_done_with_fallback() {
        let mut state = AdviceState::default();
        state.begin(Utc::now()).unwrap();
        state.resolve(AdviceReply::NoTips, Utc::now()).unwrap();
        assert!(matches!(state, AdviceState::Done { .. }));
        assert_eq!(state.display_text(), Some(NO_TIPS_MESSAGE));
    }

    #[test]
    fn test_resolve_failure() {
        let mut state = AdviceState::default();
        state.begin(Utc::now()).unwrap();
        state
            .resolve(
                AdviceReply::Failed {
                    reason: FailureReason::NotConfigured,
                },
                Utc::now(),
            )
            .unwrap();
        assert_eq!(state.display_text(), Some(NOT_CONFIGURED_MESSAGE));
    }

    #[test]
    fn test_resolve_requires_pending() {
        let mut state = AdviceState::default();
        assert_eq!(
            state.resolve(AdviceReply::NoTips, Utc::now()),
            Err(LifecycleError::NotPending)
        );

        state.begin(Utc::now()).unwrap();
        state.resolve(AdviceReply::NoTips, Utc::now()).unwrap();
        assert_eq!(
            state.resolve(AdviceReply::NoTips, Utc::now()),
            Err(LifecycleError::NotPending)
        );
        assert_eq!(state.begin(Utc::now()), Err(LifecycleError::AlreadyAsked));
    }
}
