//! Derived debt metrics: payoff progress, due dates and portfolio-wide totals.

use chrono::{DateTime, NaiveDate, Utc};
use num_traits::Zero;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::debts_model::Debt;
use crate::constants::{DUE_SOON_DAYS, ONE_HUNDRED};
use crate::errors::{Result, ValidationError};
use crate::utils::decimal_utils::{mean_by, percent_of, sum_by};
use crate::utils::time_utils::days_until;

/// Share of the principal already repaid, clamped to `[0, 100]`.
pub fn debt_payoff_progress(remaining: Decimal, total: Decimal) -> Decimal {
    percent_of(total.saturating_sub(remaining), total).clamp(Decimal::zero(), ONE_HUNDRED)
}

/// Whole days until the due date, rounded up. `None` when there is no due date.
pub fn days_until_due(due_date: Option<NaiveDate>, now: DateTime<Utc>) -> Option<i64> {
    due_date.map(|date| days_until(date, now))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum DueStatus {
    Overdue,
    DueSoon,
    OnTrack,
    Unknown,
}

pub fn classify_due(days: Option<i64>) -> DueStatus {
    match days {
        None => DueStatus::Unknown,
        Some(d) if d < 0 => DueStatus::Overdue,
        Some(d) if d <= DUE_SOON_DAYS => DueStatus::DueSoon,
        Some(_) => DueStatus::OnTrack,
    }
}

/// Remaining balance after a payment, floored at zero.
pub fn apply_payment(debt: &Debt, amount: Decimal) -> Result<Decimal> {
    if amount <= Decimal::zero() {
        return Err(ValidationError::InvalidInput(
            "Payment amount must be greater than zero".to_string(),
        )
        .into());
    }
    Ok(debt
        .remaining_amount
        .saturating_sub(amount)
        .max(Decimal::zero()))
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct DebtSummary {
    pub count: usize,
    pub total_outstanding: Decimal,
    pub total_minimum_payments: Decimal,
    pub average_interest_rate: Decimal,
}

pub fn debt_summary(debts: &[Debt]) -> DebtSummary {
    DebtSummary {
        count: debts.len(),
        total_outstanding: sum_by(debts, |d| d.remaining_amount),
        total_minimum_payments: sum_by(debts, |d| d.minimum_payment),
        average_interest_rate: mean_by(debts, |d| d.interest_rate),
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DebtView {
    pub debt: Debt,
    pub progress: Decimal,
    pub days_until_due: Option<i64>,
    pub due_status: DueStatus,
}

impl DebtView {
    pub fn from_debt(debt: &Debt, now: DateTime<Utc>) -> Self {
        let days = days_until_due(debt.due_date, now);
        DebtView {
            debt: debt.clone(),
            progress: debt_payoff_progress(debt.remaining_amount, debt.total_amount),
            days_until_due: days,
            due_status: classify_due(days),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct DebtOverview {
    pub debts: Vec<DebtView>,
    pub summary: DebtSummary,
}

pub fn build_debt_overview(debts: &[Debt], now: DateTime<Utc>) -> DebtOverview {
    DebtOverview {
        debts: debts.iter().map(|d| DebtView::from_debt(d, now)).collect(),
        summary: debt_summary(debts),
    }
}
