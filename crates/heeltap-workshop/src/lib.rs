//! Heeltap Workshop: the controller a presentation layer drives
//!
//! Wraps a [`heeltap_core::RepairSession`] together with the one-shot advice
//! request from [`heeltap_advisor`], and provides tracing setup for
//! applications embedding it.

pub mod error;
pub mod telemetry;
pub mod workshop;

pub use error::{WorkshopError, WorkshopResult};
pub use telemetry::{init_tracing, init_tracing_from_env};
pub use workshop::{AdviceTicket, TicketReply, Workshop, WorkshopView};
