//! Domain logic for the staff directory: the pure refinement pipeline,
//! clipboard payload formatting, and session-scoped state.

pub mod payload;
pub mod pipeline;
pub mod session;

pub use payload::{CopyField, clipboard_payload, contact_card};
pub use pipeline::{NameCollator, RefineError, refine};
pub use session::{FetchTicket, Session};
