//! Wire models for debts. The debts endpoint speaks snake_case.

use chrono::NaiveDate;
use finsight_core::debts::{Debt, DebtInput, DebtType};
use rust_decimal::Decimal;
use serde::Serialize;
use serde_json::Value;

use crate::normalize::Record;

#[derive(Debug, Clone, Serialize)]
pub struct DebtPayload<'a> {
    pub user_id: &'a str,
    pub name: &'a str,
    #[serde(rename = "type")]
    pub debt_type: DebtType,
    pub total_amount: Decimal,
    pub remaining_amount: Decimal,
    pub interest_rate: Decimal,
    pub minimum_payment: Decimal,
    pub due_date: Option<NaiveDate>,
}

impl<'a> DebtPayload<'a> {
    pub fn new(user_id: &'a str, input: &'a DebtInput) -> Self {
        Self {
            user_id,
            name: &input.name,
            debt_type: input.debt_type,
            total_amount: input.total_amount,
            remaining_amount: input.remaining_amount,
            interest_rate: input.interest_rate,
            minimum_payment: input.minimum_payment,
            due_date: input.due_date,
        }
    }
}

pub fn debt_from_record(raw: &Value) -> Debt {
    let record = Record(raw);
    Debt {
        id: record.id(),
        name: record.string(&["name"]),
        debt_type: DebtType::parse(&record.string(&["type", "debt_type", "debtType"]))
            .unwrap_or(DebtType::Other),
        total_amount: record.decimal(&["total_amount", "totalAmount"]),
        remaining_amount: record.decimal(&["remaining_amount", "remainingAmount"]),
        interest_rate: record.decimal(&["interest_rate", "interestRate"]),
        minimum_payment: record.decimal(&["minimum_payment", "minimumPayment"]),
        due_date: record.date(&["due_date", "dueDate"]),
    }
}
