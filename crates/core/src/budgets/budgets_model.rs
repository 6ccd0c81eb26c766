//! Budget domain models.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::errors::{Result, ValidationError};

/// Period a budget limit applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum BudgetPeriod {
    Daily,
    Weekly,
    #[default]
    Monthly,
    Yearly,
}

impl BudgetPeriod {
    pub const ALL: [BudgetPeriod; 4] = [
        BudgetPeriod::Daily,
        BudgetPeriod::Weekly,
        BudgetPeriod::Monthly,
        BudgetPeriod::Yearly,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            BudgetPeriod::Daily => "Daily",
            BudgetPeriod::Weekly => "Weekly",
            BudgetPeriod::Monthly => "Monthly",
            BudgetPeriod::Yearly => "Yearly",
        }
    }

    /// Case-insensitive lookup (`"monthly"` and `"Monthly"` both match).
    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|period| period.as_str().eq_ignore_ascii_case(value.trim()))
    }
}

/// Domain model representing a spending budget for one category.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct Budget {
    pub id: String,
    /// Category name, e.g. `groceries`
    pub name: String,
    #[serde(default)]
    pub limit: Decimal,
    #[serde(default)]
    pub spent: Decimal,
    #[serde(default)]
    pub period: BudgetPeriod,
    pub date: Option<NaiveDate>,
    pub account_id: Option<String>,
}

/// Input model for creating or editing a budget.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BudgetInput {
    pub name: String,
    pub limit: Decimal,
    pub period: BudgetPeriod,
    pub date: NaiveDate,
}

impl BudgetInput {
    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(ValidationError::InvalidInput(
                "Budget category cannot be empty".to_string(),
            )
            .into());
        }
        if self.limit < Decimal::ZERO {
            return Err(ValidationError::InvalidInput(
                "Budget amount cannot be negative".to_string(),
            )
            .into());
        }
        Ok(())
    }
}
