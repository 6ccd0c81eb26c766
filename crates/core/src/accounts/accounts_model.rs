//! Account domain models.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::errors::{Result, ValidationError};

/// Kind of account money is held in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum AccountType {
    #[default]
    Bank,
    Wallet,
    CreditCard,
    Cash,
}

impl AccountType {
    pub const ALL: [AccountType; 4] = [
        AccountType::Bank,
        AccountType::Wallet,
        AccountType::CreditCard,
        AccountType::Cash,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            AccountType::Bank => "bank",
            AccountType::Wallet => "wallet",
            AccountType::CreditCard => "credit_card",
            AccountType::Cash => "cash",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        let value = value.trim();
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str().eq_ignore_ascii_case(value))
    }
}

/// Domain model representing an account.
///
/// Income, expense, balance and savings rate are maintained by the data
/// service from the account's transactions.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct Account {
    pub id: String,
    pub account_name: String,
    #[serde(default)]
    pub account_type: AccountType,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub total_income: Decimal,
    #[serde(default)]
    pub total_expenses: Decimal,
    #[serde(default)]
    pub total_balance: Decimal,
    #[serde(default)]
    pub savings_rate: Decimal,
}

/// Input model for opening or editing an account.
///
/// The opening balance is only sent on creation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AccountInput {
    pub account_name: String,
    pub account_type: AccountType,
    #[serde(default)]
    pub total_balance: Decimal,
    #[serde(default)]
    pub description: String,
}

impl AccountInput {
    pub fn validate(&self) -> Result<()> {
        if self.account_name.trim().is_empty() {
            return Err(
                ValidationError::InvalidInput("Account name cannot be empty".to_string()).into(),
            );
        }
        Ok(())
    }
}
