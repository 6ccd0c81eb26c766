//! Debt domain models.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::errors::{Result, ValidationError};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum DebtType {
    #[default]
    #[serde(rename = "Credit Card")]
    CreditCard,
    #[serde(rename = "Personal Loan")]
    PersonalLoan,
    #[serde(rename = "Auto Loan")]
    AutoLoan,
    #[serde(rename = "Home Loan")]
    HomeLoan,
    #[serde(rename = "Student Loan")]
    StudentLoan,
    Other,
}

impl DebtType {
    pub const ALL: [DebtType; 6] = [
        DebtType::CreditCard,
        DebtType::PersonalLoan,
        DebtType::AutoLoan,
        DebtType::HomeLoan,
        DebtType::StudentLoan,
        DebtType::Other,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            DebtType::CreditCard => "Credit Card",
            DebtType::PersonalLoan => "Personal Loan",
            DebtType::AutoLoan => "Auto Loan",
            DebtType::HomeLoan => "Home Loan",
            DebtType::StudentLoan => "Student Loan",
            DebtType::Other => "Other",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str().eq_ignore_ascii_case(value.trim()))
    }
}

/// Domain model representing a debt being paid down.
///
/// `remaining_amount` is expected to lie within `[0, total_amount]` but the
/// metrics tolerate records that violate it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct Debt {
    pub id: String,
    pub name: String,
    #[serde(rename = "type", default)]
    pub debt_type: DebtType,
    #[serde(default)]
    pub total_amount: Decimal,
    #[serde(default)]
    pub remaining_amount: Decimal,
    /// Annual rate, in percent
    #[serde(default)]
    pub interest_rate: Decimal,
    #[serde(default)]
    pub minimum_payment: Decimal,
    pub due_date: Option<NaiveDate>,
}

/// Input model for creating or editing a debt.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DebtInput {
    pub name: String,
    #[serde(rename = "type")]
    pub debt_type: DebtType,
    pub total_amount: Decimal,
    pub remaining_amount: Decimal,
    pub interest_rate: Decimal,
    pub minimum_payment: Decimal,
    pub due_date: Option<NaiveDate>,
}

impl DebtInput {
    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(
                ValidationError::InvalidInput("Debt name cannot be empty".to_string()).into(),
            );
        }
        let amounts = [
            ("totalAmount", self.total_amount),
            ("remainingAmount", self.remaining_amount),
            ("interestRate", self.interest_rate),
            ("minimumPayment", self.minimum_payment),
        ];
        if let Some((field, _)) = amounts.iter().find(|(_, value)| *value < Decimal::ZERO) {
            return Err(
                ValidationError::InvalidInput(format!("{} cannot be negative", field)).into(),
            );
        }
        Ok(())
    }
}

impl From<&Debt> for DebtInput {
    fn from(debt: &Debt) -> Self {
        DebtInput {
            name: debt.name.clone(),
            debt_type: debt.debt_type,
            total_amount: debt.total_amount,
            remaining_amount: debt.remaining_amount,
            interest_rate: debt.interest_rate,
            minimum_payment: debt.minimum_payment,
            due_date: debt.due_date,
        }
    }
}
