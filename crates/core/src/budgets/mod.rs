//! Budgets module - domain models, metrics, services, and traits.

mod budgets_metrics;
mod budgets_model;
mod budgets_service;
mod budgets_traits;

pub use budgets_metrics::{
    budget_status, budget_totals, budget_utilization, build_budget_overview, filter_by_period,
    BudgetOverview, BudgetStatus, BudgetTotals, BudgetView,
};
pub use budgets_model::{Budget, BudgetInput, BudgetPeriod};
pub use budgets_service::{BudgetService, BUDGET_ACTION};
pub use budgets_traits::{BudgetRepositoryTrait, BudgetServiceTrait};
