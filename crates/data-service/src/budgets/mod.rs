//! Data service storage for budgets.

mod model;
mod repository;

pub use model::{budget_from_record, BudgetPayload, BudgetUpdatePayload};
pub use repository::BudgetRepository;
