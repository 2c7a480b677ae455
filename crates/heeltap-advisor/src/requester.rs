//! Advice requester: one fixed prompt, one request, one user-facing answer.
//!
//! Every failure collapses into a fixed message; the technical detail goes
//! to the log and nowhere else.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::config::AdvisorConfig;
use crate::error::{AdviceError, AdviceResult};
use crate::gemini::GeminiClient;
use crate::generator::TextGenerator;

/// The prompt sent on every advice request.
pub const ADVICE_PROMPT: &str = "You are an expert cobbler with 30 years of experience. \
I have just replaced the heel taps on a leather-soled shoe.

Give me 3 brief, practical, professional tips in Markdown format on:
1. Caring for the new tap.
2. Keeping the leather sole hydrated.
3. Knowing when it is time to replace it again.

Use a friendly but technical tone. List format.";

pub const NOT_CONFIGURED_MESSAGE: &str = "Error: API key not configured.";
pub const NO_TIPS_MESSAGE: &str = "Could not generate tips right now.";
pub const SERVICE_ERROR_MESSAGE: &str =
    "There was an error consulting the virtual expert cobbler.";

/// Why an advice request produced no tips.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FailureReason {
    /// No API key; nothing was sent.
    NotConfigured,
    /// Transport error, error status or unreadable response.
    ServiceUnavailable,
}

impl FailureReason {
    pub fn message(self) -> &'static str {
        match self {
            Self::NotConfigured => NOT_CONFIGURED_MESSAGE,
            Self::ServiceUnavailable => SERVICE_ERROR_MESSAGE,
        }
    }
}

/// Result of one advice request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum AdviceReply {
    /// Generated text, verbatim.
    Tips { text: String },
    /// The service answered with nothing.
    NoTips,
    Failed { reason: FailureReason },
}

impl AdviceReply {
    /// Text to show the user.
    pub fn message(&self) -> &str {
        match self {
            Self::Tips { text } => text,
            Self::NoTips => NO_TIPS_MESSAGE,
            Self::Failed { reason } => reason.message(),
        }
    }

    pub fn into_message(self) -> String {
        match self {
            Self::Tips { text } => text,
            other => other.message().to_string(),
        }
    }

    pub fn is_failure(&self) -> bool {
        matches!(self, Self::Failed { .. })
    }

    fn from_generated(result: AdviceResult<String>) -> Self {
        match result {
            Ok(text) if text.is_empty() => AdviceReply::NoTips,
            Ok(text) => AdviceReply::Tips { text },
            Err(AdviceError::NotConfigured) => AdviceReply::Failed {
                reason: FailureReason::NotConfigured,
            },
            Err(e) => {
                warn!(error = %e, "Advice request failed");
                AdviceReply::Failed {
                    reason: FailureReason::ServiceUnavailable,
                }
            }
        }
    }
}

/// Issues advice requests against an optional text generator.
///
/// Stateless: no caching, no retries. Each call is a fresh request.
#[derive(Clone, Default)]
pub struct AdviceRequester {
    generator: Option<Arc<dyn TextGenerator>>,
}

impl AdviceRequester {
    /// Requester backed by `generator`.
    pub fn new(generator: Arc<dyn TextGenerator>) -> Self {
        Self {
            generator: Some(generator),
        }
    }

    /// Requester with no credential; every request answers "not configured".
    pub fn unconfigured() -> Self {
        Self { generator: None }
    }

    /// Build from config: a Gemini client when a key is present, otherwise
    /// an unconfigured requester.
    pub fn from_config(config: AdvisorConfig) -> AdviceResult<Self> {
        if !config.is_configured() {
            warn!("Advice API key not found; advice is disabled");
            return Ok(Self::unconfigured());
        }
        Ok(Self::new(Arc::new(GeminiClient::new(config)?)))
    }

    /// Build from environment variables.
    pub fn from_env() -> AdviceResult<Self> {
        Self::from_config(AdvisorConfig::from_env())
    }

    pub fn is_configured(&self) -> bool {
        self.generator.is_some()
    }

    /// Ask for care tips, keeping the outcome typed.
    pub async fn request(&self) -> AdviceReply {
        let Some(generator) = &self.generator else {
            return AdviceReply::Failed {
                reason: FailureReason::NotConfigured,
            };
        };

        let result = generator.generate(ADVICE_PROMPT).await;
        let reply = AdviceReply::from_generated(result);
        info!(failed = reply.is_failure(), "Advice request finished");
        reply
    }

    /// Ask for care tips and return the text to display.
    pub async fn request_advice(&self) -> String {
        self.request().await.into_message()
    }
}

impl std::fmt::Debug for AdviceRequester {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AdviceRequester")
            .field("configured", &self.is_configured())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicUsize, Ordering};

    /// Generator that replays a fixed answer and counts calls.
    struct Scripted {
        answer: fn() -> AdviceResult<String>,
        calls: AtomicUsize,
    }

    impl Scripted {
        fn new(answer: fn() -> AdviceResult<String>) -> Arc<Self> {
            Arc::new(Self {
                answer,
                calls: AtomicUsize::new(0),
            })
        }
    }

    #[async_trait]
    impl TextGenerator for Scripted {
        async fn generate(&self, prompt: &str) -> AdviceResult<String> {
            assert_eq!(prompt, ADVICE_PROMPT);
            self.calls.fetch_add(1, Ordering::SeqCst);
            (self.answer)()
        }
    }

    #[tokio::test]
    async fn test_unconfigured_returns_fixed_message() {
        let requester = AdviceRequester::unconfigured();
        assert!(!requester.is_configured());
        assert_eq!(requester.request_advice().await, NOT_CONFIGURED_MESSAGE);
    }

    #[tokio::test]
    async fn test_success_is_verbatim() {
        let generator = Scripted::new(|| Ok("  # Tips\n- Keep dry  ".to_string()));
        let requester = AdviceRequester::new(generator.clone());
        assert_eq!(requester.request_advice().await, "  # Tips\n- Keep dry  ");
        assert_eq!(generator.calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_empty_text_falls_back() {
        let requester = AdviceRequester::new(Scripted::new(|| Ok(String::new())));
        assert_eq!(requester.request().await, AdviceReply::NoTips);
        assert_eq!(requester.request_advice().await, NO_TIPS_MESSAGE);
    }

    #[tokio::test]
    async fn test_whitespace_text_is_still_verbatim() {
        let requester = AdviceRequester::new(Scripted::new(|| Ok("  \n ".to_string())));
        assert_eq!(
            requester.request().await,
            AdviceReply::Tips {
                text: "  \n ".to_string()
            }
        );
    }

    #[tokio::test]
    async fn test_service_failure_is_fixed_message() {
        let requester = AdviceRequester::new(Scripted::new(|| {
            Err(AdviceError::Status {
                status: 503,
                body: "overloaded".to_string(),
            })
        }));
        let reply = requester.request().await;
        assert_eq!(
            reply,
            AdviceReply::Failed {
                reason: FailureReason::ServiceUnavailable
            }
        );
        assert!(!reply.message().contains("overloaded"));
    }

    #[tokio::test]
    async fn test_every_call_is_a_fresh_request() {
        let generator = Scripted::new(|| Ok("tip".to_string()));
        let requester = AdviceRequester::new(generator.clone());
        requester.request_advice().await;
        requester.request_advice().await;
        assert_eq!(generator.calls.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn test_from_config_without_key_is_unconfigured() {
        let config = AdvisorConfig::new("http://localhost", "m");
        let requester = AdviceRequester::from_config(config).unwrap();
        assert!(!requester.is_configured());
    }
}
