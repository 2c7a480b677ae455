//! Heeltap Advisor: post-repair care advice
//!
//! Once the heel tap is nailed down, the workshop can ask a generative-text
//! service for a few care tips. This crate owns that single request:
//!
//! - `config`: API key, model and endpoint from the environment
//! - `gemini`: the HTTP client for the `generateContent` call
//! - `requester`: fixed prompt in, user-facing text out; failures become
//!   fixed messages and are only logged
//! - `lifecycle`: the one-shot `NotAsked → Pending → Done | Failed` latch
//! - `tips`: line-by-line styling of the returned text

pub mod config;
pub mod error;
pub mod gemini;
pub mod generator;
pub mod lifecycle;
pub mod requester;
pub mod tips;

pub use config::AdvisorConfig;
pub use error::{AdviceError, AdviceResult, LifecycleError};
pub use gemini::{parse_response_text, GeminiClient};
pub use generator::TextGenerator;
pub use lifecycle::AdviceState;
pub use requester::{
    AdviceReply, AdviceRequester, FailureReason, ADVICE_PROMPT, NOT_CONFIGURED_MESSAGE,
    NO_TIPS_MESSAGE, SERVICE_ERROR_MESSAGE,
};
pub use tips::{render_tips, LineKind, TipLine};
