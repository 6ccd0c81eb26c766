//! Goals domain models.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::errors::{Result, ValidationError};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum GoalPriority {
    Low,
    #[default]
    Medium,
    High,
}

impl GoalPriority {
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "low" => Some(GoalPriority::Low),
            "medium" => Some(GoalPriority::Medium),
            "high" => Some(GoalPriority::High),
            _ => None,
        }
    }
}

/// Completion state maintained by the data service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum GoalStatus {
    #[default]
    #[serde(rename = "In Progress")]
    InProgress,
    Completed,
}

impl GoalStatus {
    /// Anything other than `Completed` counts as in progress.
    pub fn parse(value: &str) -> Self {
        if value.trim().eq_ignore_ascii_case("completed") {
            GoalStatus::Completed
        } else {
            GoalStatus::InProgress
        }
    }
}

/// Domain model representing a savings goal
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct Goal {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub target_amount: Decimal,
    #[serde(default)]
    pub current_amount: Decimal,
    pub target_date: Option<NaiveDate>,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub priority: GoalPriority,
    #[serde(default)]
    pub status: GoalStatus,
}

impl Goal {
    pub fn is_completed(&self) -> bool {
        self.status == GoalStatus::Completed
    }
}

/// Input model for creating or editing a goal
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct GoalInput {
    pub title: String,
    pub description: String,
    pub target_amount: Decimal,
    pub current_amount: Decimal,
    pub target_date: Option<NaiveDate>,
    pub category: String,
    pub priority: GoalPriority,
}

impl GoalInput {
    pub fn validate(&self) -> Result<()> {
        if self.title.trim().is_empty() {
            return Err(
                ValidationError::InvalidInput("Goal title cannot be empty".to_string()).into(),
            );
        }
        if self.target_amount < Decimal::ZERO || self.current_amount < Decimal::ZERO {
            return Err(ValidationError::InvalidInput(
                "Goal amounts cannot be negative".to_string(),
            )
            .into());
        }
        if self.target_date.is_none() {
            return Err(ValidationError::MissingField("targetDate".to_string()).into());
        }
        Ok(())
    }
}

impl From<&Goal> for GoalInput {
    fn from(goal: &Goal) -> Self {
        GoalInput {
            title: goal.title.clone(),
            description: goal.description.clone(),
            target_amount: goal.target_amount,
            current_amount: goal.current_amount,
            target_date: goal.target_date,
            category: goal.category.clone(),
            priority: goal.priority,
        }
    }
}
