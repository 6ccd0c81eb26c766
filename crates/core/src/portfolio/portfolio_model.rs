//! Portfolio holding models.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::errors::{Result, ValidationError};

/// A single investment position.
///
/// `total_value`, `gain_loss` and `gain_loss_percent` are computed by the
/// data service (`quantity * current_price` and the difference to cost).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct Holding {
    pub id: String,
    pub name: String,
    pub symbol: String,
    #[serde(rename = "type", default)]
    pub holding_type: String,
    #[serde(default)]
    pub quantity: Decimal,
    #[serde(default)]
    pub buy_price: Decimal,
    #[serde(default)]
    pub current_price: Decimal,
    #[serde(default)]
    pub total_value: Decimal,
    #[serde(default)]
    pub gain_loss: Decimal,
    #[serde(default)]
    pub gain_loss_percent: Decimal,
}

impl Holding {
    /// Original cost of the position.
    pub fn cost_basis(&self) -> Decimal {
        self.total_value.saturating_sub(self.gain_loss)
    }
}

/// Input model for adding or editing a holding.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct HoldingInput {
    pub name: String,
    pub symbol: String,
    #[serde(rename = "type")]
    pub holding_type: String,
    pub quantity: Decimal,
    pub buy_price: Decimal,
    pub current_price: Decimal,
}

impl HoldingInput {
    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(
                ValidationError::InvalidInput("Investment name cannot be empty".to_string()).into(),
            );
        }
        if self.symbol.trim().is_empty() {
            return Err(ValidationError::MissingField("symbol".to_string()).into());
        }
        if self.quantity < Decimal::ZERO
            || self.buy_price < Decimal::ZERO
            || self.current_price < Decimal::ZERO
        {
            return Err(ValidationError::InvalidInput(
                "Quantity and prices cannot be negative".to_string(),
            )
            .into());
        }
        Ok(())
    }

    /// Symbols are stored upper-cased.
    pub fn normalized(mut self) -> Self {
        self.symbol = self.symbol.trim().to_uppercase();
        self.name = self.name.trim().to_string();
        self
    }
}
