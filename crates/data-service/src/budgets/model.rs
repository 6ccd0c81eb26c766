//! Wire models for budgets.

use chrono::NaiveDate;
use finsight_core::budgets::{Budget, BudgetInput, BudgetPeriod};
use rust_decimal::Decimal;
use serde::Serialize;
use serde_json::Value;

use crate::normalize::Record;

/// Request body for creating or replacing a budget.
#[derive(Debug, Clone, Serialize)]
pub struct BudgetPayload<'a> {
    pub user_id: &'a str,
    pub account_id: &'a str,
    pub name: &'a str,
    pub limit: Decimal,
    pub spent: Decimal,
    #[serde(rename = "type")]
    pub period: BudgetPeriod,
    pub date: NaiveDate,
    pub toggle: bool,
}

impl<'a> BudgetPayload<'a> {
    /// New budgets always start with nothing spent.
    pub fn new(user_id: &'a str, account_id: &'a str, input: &'a BudgetInput) -> Self {
        Self {
            user_id,
            account_id,
            name: &input.name,
            limit: input.limit,
            spent: Decimal::ZERO,
            period: input.period,
            date: input.date,
            toggle: false,
        }
    }
}

/// Partial update body; `spent` is left to the service.
#[derive(Debug, Clone, Serialize)]
pub struct BudgetUpdatePayload<'a> {
    pub name: &'a str,
    pub limit: Decimal,
    #[serde(rename = "type")]
    pub period: BudgetPeriod,
    pub date: NaiveDate,
}

impl<'a> From<&'a BudgetInput> for BudgetUpdatePayload<'a> {
    fn from(input: &'a BudgetInput) -> Self {
        Self {
            name: &input.name,
            limit: input.limit,
            period: input.period,
            date: input.date,
        }
    }
}

pub fn budget_from_record(raw: &Value) -> Budget {
    let record = Record(raw);
    let account_id = record.string(&["account_id", "accountId", "account"]);
    Budget {
        id: record.id(),
        name: record.string(&["name", "category"]),
        limit: record.decimal(&["limit", "amount"]),
        spent: record.decimal(&["spent"]),
        period: BudgetPeriod::parse(&record.string(&["type", "period"])).unwrap_or_default(),
        date: record.date(&["date", "start_date", "startDate"]),
        account_id: Some(account_id).filter(|id| !id.is_empty()),
    }
}
