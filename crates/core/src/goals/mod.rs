//! Goals module - domain models, metrics, services, and traits.

mod goals_metrics;
mod goals_model;
mod goals_service;
mod goals_traits;

pub use goals_metrics::{
    add_contribution, build_goal_overview, days_remaining, goal_insight, goal_insights,
    goal_progress, goal_summary, is_goal_overdue, months_to_go, progress_bar_fill, GoalInsight,
    GoalOverview, GoalSummary, GoalView,
};
pub use goals_model::{Goal, GoalInput, GoalPriority, GoalStatus};
pub use goals_service::{GoalService, GOAL_ACTION};
pub use goals_traits::{GoalRepositoryTrait, GoalServiceTrait};
