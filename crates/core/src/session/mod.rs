//! Session module - identity snapshot and the action gate.

mod action_gate;
mod session_model;

pub use action_gate::{ensure_allowed, evaluate, ActionKind, Decision};
pub use session_model::{SessionIdentity, SessionState};
