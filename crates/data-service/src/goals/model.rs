//! Wire models for goals. The goals endpoint speaks camelCase.

use chrono::NaiveDate;
use finsight_core::goals::{Goal, GoalInput, GoalPriority, GoalStatus};
use rust_decimal::Decimal;
use serde::Serialize;
use serde_json::Value;

use crate::normalize::Record;

/// Status is not sent; the data service derives it from the amounts.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GoalPayload<'a> {
    #[serde(rename = "user_id")]
    pub user_id: &'a str,
    pub title: &'a str,
    pub description: &'a str,
    pub target_amount: Decimal,
    pub current_amount: Decimal,
    pub target_date: Option<NaiveDate>,
    pub category: &'a str,
    pub priority: GoalPriority,
}

impl<'a> GoalPayload<'a> {
    pub fn new(user_id: &'a str, input: &'a GoalInput) -> Self {
        Self {
            user_id,
            title: &input.title,
            description: &input.description,
            target_amount: input.target_amount,
            current_amount: input.current_amount,
            target_date: input.target_date,
            category: &input.category,
            priority: input.priority,
        }
    }
}

pub fn goal_from_record(raw: &Value) -> Goal {
    let record = Record(raw);
    Goal {
        id: record.id(),
        title: record.string(&["title", "name"]),
        description: record.string(&["description"]),
        target_amount: record.decimal(&["targetAmount", "target_amount"]),
        current_amount: record.decimal(&["currentAmount", "current_amount"]),
        target_date: record.date(&["targetDate", "target_date"]),
        category: record.string(&["category"]),
        priority: GoalPriority::parse(&record.string(&["priority"])).unwrap_or_default(),
        status: GoalStatus::parse(&record.string(&["status"])),
    }
}
