//! Wire models for accounts. The accounts endpoint speaks snake_case.

use finsight_core::accounts::{Account, AccountInput, AccountType};
use rust_decimal::Decimal;
use serde::Serialize;
use serde_json::Value;

use crate::normalize::Record;

#[derive(Debug, Clone, Serialize)]
pub struct AccountPayload<'a> {
    pub user_id: &'a str,
    pub account_name: &'a str,
    pub account_type: AccountType,
    /// Only set when opening an account
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_balance: Option<Decimal>,
    pub description: &'a str,
}

impl<'a> AccountPayload<'a> {
    pub fn for_create(user_id: &'a str, input: &'a AccountInput) -> Self {
        Self {
            total_balance: Some(input.total_balance),
            ..Self::for_update(user_id, input)
        }
    }

    pub fn for_update(user_id: &'a str, input: &'a AccountInput) -> Self {
        Self {
            user_id,
            account_name: &input.account_name,
            account_type: input.account_type,
            total_balance: None,
            description: &input.description,
        }
    }
}

pub fn account_from_record(raw: &Value) -> Account {
    let record = Record(raw);
    Account {
        id: record.id(),
        account_name: record.string(&["account_name", "accountName", "name"]),
        account_type: AccountType::parse(&record.string(&["account_type", "accountType"]))
            .unwrap_or_default(),
        description: record.string(&["description"]),
        total_income: record.decimal(&["total_income", "totalIncome"]),
        total_expenses: record.decimal(&["total_expenses", "totalExpenses"]),
        total_balance: record.decimal(&["total_balance", "totalBalance"]),
        savings_rate: record.decimal(&["savings_rate", "savingsRate"]),
    }
}
