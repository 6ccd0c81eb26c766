//! Income source and collection models.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::errors::{Result, ValidationError};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum IncomeType {
    #[default]
    #[serde(rename = "Property Rent")]
    PropertyRent,
    Other,
}

impl IncomeType {
    pub const ALL: [IncomeType; 2] = [IncomeType::PropertyRent, IncomeType::Other];

    pub fn as_str(&self) -> &'static str {
        match self {
            IncomeType::PropertyRent => "Property Rent",
            IncomeType::Other => "Other",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str().eq_ignore_ascii_case(value.trim()))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum IncomeFrequency {
    Daily,
    Weekly,
    #[default]
    Monthly,
    Yearly,
}

impl IncomeFrequency {
    pub const ALL: [IncomeFrequency; 4] = [
        IncomeFrequency::Daily,
        IncomeFrequency::Weekly,
        IncomeFrequency::Monthly,
        IncomeFrequency::Yearly,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            IncomeFrequency::Daily => "Daily",
            IncomeFrequency::Weekly => "Weekly",
            IncomeFrequency::Monthly => "Monthly",
            IncomeFrequency::Yearly => "Yearly",
        }
    }

    /// Suffix shown after an amount, e.g. "per month".
    pub fn label(&self) -> &'static str {
        match self {
            IncomeFrequency::Daily => "per day",
            IncomeFrequency::Weekly => "per week",
            IncomeFrequency::Monthly => "per month",
            IncomeFrequency::Yearly => "per year",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|f| f.as_str().eq_ignore_ascii_case(value.trim()))
    }
}

/// A recurring source of income such as a rented property.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct IncomeSource {
    pub id: String,
    pub name: String,
    #[serde(rename = "type", default)]
    pub income_type: IncomeType,
    #[serde(default)]
    pub amount: Decimal,
    #[serde(default)]
    pub frequency: IncomeFrequency,
    pub start_date: Option<NaiveDate>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct IncomeSourceInput {
    pub name: String,
    #[serde(rename = "type")]
    pub income_type: IncomeType,
    pub amount: Decimal,
    pub frequency: IncomeFrequency,
    pub start_date: NaiveDate,
}

impl IncomeSourceInput {
    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(ValidationError::InvalidInput(
                "Income source name cannot be empty".to_string(),
            )
            .into());
        }
        if self.amount < Decimal::ZERO {
            return Err(
                ValidationError::InvalidInput("Amount cannot be negative".to_string()).into(),
            );
        }
        Ok(())
    }
}

/// A single receipt of income against a source.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct IncomeCollection {
    pub id: String,
    pub income_source_id: String,
    #[serde(default)]
    pub amount: Decimal,
    pub collection_date: Option<NaiveDate>,
    #[serde(default)]
    pub notes: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct NewIncomeCollection {
    pub income_source_id: String,
    pub amount: Decimal,
    pub collection_date: NaiveDate,
    #[serde(default)]
    pub notes: String,
}
