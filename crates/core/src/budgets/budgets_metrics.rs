//! Derived budget metrics.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::budgets_model::{Budget, BudgetPeriod};
use crate::constants::{BUDGET_OVER_PERCENT, BUDGET_WARNING_PERCENT};
use crate::utils::decimal_utils::{percent_of, sum_by};

/// Health band of a budget's utilization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BudgetStatus {
    Good,
    Warning,
    Over,
}

/// Spent as a percentage of the limit. Zero when the limit is not positive.
///
/// The value is unrounded; formatting belongs to the presentation layer.
pub fn budget_utilization(spent: Decimal, limit: Decimal) -> Decimal {
    percent_of(spent, limit)
}

pub fn budget_status(utilization: Decimal) -> BudgetStatus {
    if utilization >= BUDGET_OVER_PERCENT {
        BudgetStatus::Over
    } else if utilization >= BUDGET_WARNING_PERCENT {
        BudgetStatus::Warning
    } else {
        BudgetStatus::Good
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct BudgetTotals {
    pub total_budget: Decimal,
    pub total_spent: Decimal,
    pub total_remaining: Decimal,
}

pub fn budget_totals(budgets: &[Budget]) -> BudgetTotals {
    let total_budget = sum_by(budgets, |b| b.limit);
    let total_spent = sum_by(budgets, |b| b.spent);
    BudgetTotals {
        total_budget,
        total_spent,
        total_remaining: total_budget.saturating_sub(total_spent),
    }
}

pub fn filter_by_period(budgets: &[Budget], period: BudgetPeriod) -> Vec<Budget> {
    budgets
        .iter()
        .filter(|b| b.period == period)
        .cloned()
        .collect()
}

/// A budget together with its display metrics.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BudgetView {
    pub budget: Budget,
    pub utilization: Decimal,
    pub status: BudgetStatus,
    pub remaining: Decimal,
}

impl BudgetView {
    pub fn from_budget(budget: &Budget) -> Self {
        let utilization = budget_utilization(budget.spent, budget.limit);
        BudgetView {
            budget: budget.clone(),
            utilization,
            status: budget_status(utilization),
            remaining: budget.limit.saturating_sub(budget.spent),
        }
    }
}

/// Everything the budgets page renders for one period.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BudgetOverview {
    pub period: BudgetPeriod,
    pub budgets: Vec<BudgetView>,
    pub totals: BudgetTotals,
}

impl BudgetOverview {
    pub fn empty(period: BudgetPeriod) -> Self {
        BudgetOverview {
            period,
            budgets: Vec::new(),
            totals: BudgetTotals::default(),
        }
    }
}

/// Restricts the snapshot to `period` and derives the page's metrics.
pub fn build_budget_overview(budgets: &[Budget], period: BudgetPeriod) -> BudgetOverview {
    let in_period = filter_by_period(budgets, period);
    BudgetOverview {
        period,
        budgets: in_period.iter().map(BudgetView::from_budget).collect(),
        totals: budget_totals(&in_period),
    }
}
