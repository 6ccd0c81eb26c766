//! Derived goal metrics.

use chrono::{DateTime, NaiveDate, Utc};
use num_traits::Zero;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::goals_model::{Goal, GoalStatus};
use crate::constants::{DAYS_PER_MONTH, ONE_HUNDRED};
use crate::errors::{Result, ValidationError};
use crate::utils::decimal_utils::{percent_of, sum_by};
use crate::utils::time_utils::days_until;

/// Funded share of the target. Zero while the target is not positive.
///
/// Not clamped: an over-funded goal reports more than 100.
pub fn goal_progress(current: Decimal, target: Decimal) -> Decimal {
    percent_of(current, target)
}

/// Fill level for a progress bar, `progress` limited to `[0, 100]`.
pub fn progress_bar_fill(progress: Decimal) -> Decimal {
    progress.clamp(Decimal::zero(), ONE_HUNDRED)
}

pub fn days_remaining(target_date: NaiveDate, now: DateTime<Utc>) -> i64 {
    days_until(target_date, now)
}

pub fn is_goal_overdue(days_remaining: i64, status: GoalStatus) -> bool {
    days_remaining < 0 && status != GoalStatus::Completed
}

/// New current amount after a contribution. Over-funding is kept as is.
pub fn add_contribution(goal: &Goal, amount: Decimal) -> Result<Decimal> {
    if amount <= Decimal::zero() {
        return Err(ValidationError::InvalidInput(
            "Contribution amount must be greater than zero".to_string(),
        )
        .into());
    }
    Ok(goal.current_amount.saturating_add(amount))
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct GoalSummary {
    pub total_goals: usize,
    pub completed_goals: usize,
    pub total_target_amount: Decimal,
    pub total_current_amount: Decimal,
}

pub fn goal_summary(goals: &[Goal]) -> GoalSummary {
    GoalSummary {
        total_goals: goals.len(),
        completed_goals: goals.iter().filter(|g| g.is_completed()).count(),
        total_target_amount: sum_by(goals, |g| g.target_amount),
        total_current_amount: sum_by(goals, |g| g.current_amount),
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GoalView {
    pub goal: Goal,
    /// True percentage, shown as text
    pub progress: Decimal,
    /// Clamped percentage, used for the bar
    pub progress_bar: Decimal,
    pub days_remaining: Option<i64>,
    pub is_overdue: bool,
}

impl GoalView {
    pub fn from_goal(goal: &Goal, now: DateTime<Utc>) -> Self {
        let progress = goal_progress(goal.current_amount, goal.target_amount);
        let days = goal.target_date.map(|date| days_remaining(date, now));
        GoalView {
            goal: goal.clone(),
            progress,
            progress_bar: progress_bar_fill(progress),
            days_remaining: days,
            is_overdue: days.is_some_and(|d| is_goal_overdue(d, goal.status)),
        }
    }
}

/// Whether a goal is reachable by its deadline at the current savings pace.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GoalInsight {
    pub goal_id: String,
    pub title: String,
    pub target: Decimal,
    pub saved: Decimal,
    /// Amount still missing, never negative
    pub remaining: Decimal,
    /// Progress capped at 100
    pub progress: Decimal,
    pub days_remaining: Option<i64>,
    pub months_to_go: Option<i64>,
    /// Gap between `remaining` and what the pace saves before the deadline
    pub projected_shortfall: Decimal,
    /// `None` when the goal has no deadline
    pub on_track: Option<bool>,
}

/// Whole months left for a goal, counting 30 days per month and rounding up.
pub fn months_to_go(days_remaining: i64) -> i64 {
    if days_remaining <= 0 {
        0
    } else {
        (days_remaining + DAYS_PER_MONTH - 1) / DAYS_PER_MONTH
    }
}

/// Projects `avg_monthly_savings` (negative pace counts as zero) up to the
/// goal's target date.
pub fn goal_insight(goal: &Goal, avg_monthly_savings: Decimal, now: DateTime<Utc>) -> GoalInsight {
    let remaining = goal
        .target_amount
        .saturating_sub(goal.current_amount)
        .max(Decimal::zero());
    let days = goal.target_date.map(|date| days_remaining(date, now));
    let months = days.map(months_to_go);

    let (on_track, projected_shortfall) = match months {
        Some(months) => {
            let projected =
                Decimal::from(months).saturating_mul(avg_monthly_savings.max(Decimal::zero()));
            if projected >= remaining {
                (Some(true), Decimal::zero())
            } else {
                (Some(false), remaining.saturating_sub(projected))
            }
        }
        None => (None, Decimal::zero()),
    };

    GoalInsight {
        goal_id: goal.id.clone(),
        title: goal.title.clone(),
        target: goal.target_amount,
        saved: goal.current_amount,
        remaining,
        progress: goal_progress(goal.current_amount, goal.target_amount).min(ONE_HUNDRED),
        days_remaining: days,
        months_to_go: months,
        projected_shortfall,
        on_track,
    }
}

pub fn goal_insights(
    goals: &[Goal],
    avg_monthly_savings: Decimal,
    now: DateTime<Utc>,
) -> Vec<GoalInsight> {
    goals
        .iter()
        .map(|g| goal_insight(g, avg_monthly_savings, now))
        .collect()
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct GoalOverview {
    pub goals: Vec<GoalView>,
    pub summary: GoalSummary,
}

pub fn build_goal_overview(goals: &[Goal], now: DateTime<Utc>) -> GoalOverview {
    GoalOverview {
        goals: goals.iter().map(|g| GoalView::from_goal(g, now)).collect(),
        summary: goal_summary(goals),
    }
}
