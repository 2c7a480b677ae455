//! Heeltap Core Library
//!
//! The repair state machine behind the heel-tap workshop: which step the
//! repair is at, which tool is in hand, which way the shoe faces, and how
//! many nails are in. The presentation layer calls one [`RepairSession`]
//! method per user action and renders the returned snapshot.

pub mod obs;
pub mod outcome;
pub mod session;
pub mod status;
pub mod step;
pub mod tool;
pub mod toolbox;
pub mod view;

pub use obs::SessionSpan;
pub use outcome::{Outcome, Rejection};
pub use session::{RepairSession, SessionSnapshot};
pub use status::{Status, NAILS_REQUIRED};
pub use step::RepairStep;
pub use tool::Tool;
pub use toolbox::{SlotState, ToolSlot};
pub use view::ViewOrientation;
