//! Wire models for portfolio holdings.

use finsight_core::portfolio::{Holding, HoldingInput};
use rust_decimal::Decimal;
use serde::Serialize;
use serde_json::Value;

use crate::normalize::Record;

/// Derived values (`totalValue`, `gainLoss`) are computed server-side.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HoldingPayload<'a> {
    #[serde(rename = "user_id")]
    pub user_id: &'a str,
    pub name: &'a str,
    pub symbol: String,
    #[serde(rename = "type")]
    pub holding_type: &'a str,
    pub quantity: Decimal,
    pub buy_price: Decimal,
    pub current_price: Decimal,
}

impl<'a> HoldingPayload<'a> {
    pub fn new(user_id: &'a str, input: &'a HoldingInput) -> Self {
        Self {
            user_id,
            name: &input.name,
            symbol: input.symbol.to_uppercase(),
            holding_type: &input.holding_type,
            quantity: input.quantity,
            buy_price: input.buy_price,
            current_price: input.current_price,
        }
    }
}

pub fn holding_from_record(raw: &Value) -> Holding {
    let record = Record(raw);
    Holding {
        id: record.id(),
        name: record.string(&["name"]),
        symbol: record.string(&["symbol"]),
        holding_type: record.string(&["type", "holding_type", "holdingType"]),
        quantity: record.decimal(&["quantity"]),
        buy_price: record.decimal(&["buyPrice", "buy_price"]),
        current_price: record.decimal(&["currentPrice", "current_price"]),
        total_value: record.decimal(&["totalValue", "total_value"]),
        gain_loss: record.decimal(&["gainLoss", "gain_loss"]),
        gain_loss_percent: record.decimal(&["gainLossPercent", "gain_loss_percent"]),
    }
}
