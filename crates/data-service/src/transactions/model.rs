//! Wire models for transactions.

use finsight_core::transactions::{Transaction, TransactionInput, TransactionType};
use rust_decimal::Decimal;
use serde::Serialize;
use serde_json::Value;

use crate::normalize::Record;

/// Transaction dates are sent as local midnight timestamps.
const WIRE_DATE_FORMAT: &str = "%Y-%m-%dT00:00:00";

#[derive(Debug, Clone, Serialize)]
pub struct TransactionPayload<'a> {
    pub user_id: &'a str,
    pub account_id: &'a str,
    #[serde(rename = "type")]
    pub transaction_type: TransactionType,
    pub amount: Decimal,
    pub category: &'a str,
    pub description: &'a str,
    pub date: String,
    pub is_recurring: bool,
}

impl<'a> TransactionPayload<'a> {
    pub fn new(user_id: &'a str, account_id: &'a str, input: &'a TransactionInput) -> Self {
        Self {
            user_id,
            account_id,
            transaction_type: input.transaction_type,
            amount: input.amount,
            category: &input.category,
            description: &input.description,
            date: input.date.format(WIRE_DATE_FORMAT).to_string(),
            is_recurring: input.is_recurring,
        }
    }
}

pub fn transaction_from_record(raw: &Value) -> Transaction {
    let record = Record(raw);
    Transaction {
        id: record.id(),
        transaction_type: TransactionType::parse(&record.string(&["type", "transaction_type"]))
            .unwrap_or_default(),
        amount: record.decimal(&["amount"]),
        category: record.string(&["category"]),
        description: record.string(&["description"]),
        date: record.date(&["date"]),
        is_recurring: record.boolean(&["is_recurring", "isRecurring"]),
    }
}
