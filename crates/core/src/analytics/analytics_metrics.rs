//! Cross-page figures for the analytics dashboard.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::analytics_model::AnalyticsRange;
use crate::goals::{goal_insights, Goal, GoalInsight};
use crate::transactions::{
    average_monthly_savings, category_spend, monthly_series, transaction_totals, CategorySpend,
    MonthlyFlow, Transaction, TransactionTotals,
};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyticsOverview {
    pub range: AnalyticsRange,
    pub totals: TransactionTotals,
    pub active_budgets: usize,
    pub goals_count: usize,
    pub category_spend: CategorySpend,
    pub monthly_series: Vec<MonthlyFlow>,
    pub average_monthly_savings: Decimal,
    pub goal_insights: Vec<GoalInsight>,
}

impl AnalyticsOverview {
    pub fn empty(range: AnalyticsRange) -> Self {
        AnalyticsOverview {
            range,
            totals: TransactionTotals::default(),
            active_budgets: 0,
            goals_count: 0,
            category_spend: CategorySpend::default(),
            monthly_series: Vec::new(),
            average_monthly_savings: Decimal::ZERO,
            goal_insights: Vec::new(),
        }
    }
}

/// Transactions dated inside `range`. Undated ones are dropped.
pub fn transactions_in_range(
    transactions: &[Transaction],
    range: &AnalyticsRange,
) -> Vec<Transaction> {
    transactions
        .iter()
        .filter(|t| t.date.is_some_and(|date| range.contains(date)))
        .cloned()
        .collect()
}

pub fn build_analytics_overview(
    transactions: &[Transaction],
    active_budgets: usize,
    goals: &[Goal],
    range: AnalyticsRange,
    now: DateTime<Utc>,
) -> AnalyticsOverview {
    let in_range = transactions_in_range(transactions, &range);
    let series = monthly_series(&in_range, range.start, range.end);
    let pace = average_monthly_savings(&series);

    AnalyticsOverview {
        range,
        totals: transaction_totals(&in_range),
        active_budgets,
        goals_count: goals.len(),
        category_spend: category_spend(&in_range),
        monthly_series: series,
        average_monthly_savings: pace,
        goal_insights: goal_insights(goals, pace, now),
    }
}
