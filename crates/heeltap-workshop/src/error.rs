//! Error types for the workshop controller.

use heeltap_advisor::LifecycleError;

/// Errors produced by the workshop controller.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum WorkshopError {
    #[error("advice is only available once the repair is finished and the hammer is back")]
    NotFinished,

    #[error("advice lifecycle: {0}")]
    Advice(#[from] LifecycleError),
}

/// Result type for workshop operations.
pub type WorkshopResult<T> = std::result::Result<T, WorkshopError>;
