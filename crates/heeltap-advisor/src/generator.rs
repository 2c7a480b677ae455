//! Text-generation seam.
//!
//! The requester only needs "prompt in, text out". The Gemini client is the
//! production implementation; tests plug in their own.

use async_trait::async_trait;

use crate::error::AdviceResult;

/// Something that turns a prompt into free text.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    /// Issue one generation request. No retries.
    async fn generate(&self, prompt: &str) -> AdviceResult<String>;
}
