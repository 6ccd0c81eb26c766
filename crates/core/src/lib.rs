//! Finsight Core - Domain entities, metrics, services, and traits.
//!
//! This crate contains the personal-finance logic behind the accounts, budgets,
//! debts, goals, portfolio, income, transactions and analytics pages: pure
//! metric functions, the action gate that decides whether a mutation may
//! proceed, and the page services that tie both to a data service. It performs no I/O itself; the
//! repository traits are implemented by the `data-service` crate.

pub mod accounts;
pub mod analytics;
pub mod budgets;
pub mod constants;
pub mod debts;
pub mod errors;
pub mod goals;
pub mod income;
pub mod portfolio;
pub mod session;
pub mod transactions;
pub mod utils;

pub use session::{evaluate, ActionKind, Decision, SessionIdentity, SessionState};

// Re-export error types
pub use errors::Error;
pub use errors::Result;
