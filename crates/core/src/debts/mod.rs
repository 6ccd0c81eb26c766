//! Debts module - domain models, metrics, services, and traits.

mod debts_metrics;
mod debts_model;
mod debts_service;
mod debts_traits;

pub use debts_metrics::{
    apply_payment, build_debt_overview, classify_due, days_until_due, debt_payoff_progress,
    debt_summary, DebtOverview, DebtSummary, DebtView, DueStatus,
};
pub use debts_model::{Debt, DebtInput, DebtType};
pub use debts_service::{DebtService, DEBT_ACTION};
pub use debts_traits::{DebtRepositoryTrait, DebtServiceTrait};
