use async_trait::async_trait;
use rust_decimal::Decimal;

use super::goals_metrics::GoalOverview;
use super::goals_model::{Goal, GoalInput};
use crate::errors::Result;
use crate::session::SessionIdentity;

/// Trait for goal persistence in the data service
#[async_trait]
pub trait GoalRepositoryTrait: Send + Sync {
    async fn list(&self, user_id: &str) -> Result<Vec<Goal>>;
    async fn create(&self, user_id: &str, input: &GoalInput) -> Result<Goal>;
    async fn update(&self, user_id: &str, goal_id: &str, input: &GoalInput) -> Result<Goal>;
    async fn delete(&self, goal_id: &str) -> Result<()>;
}

/// Trait for the goals page workflow
#[async_trait]
pub trait GoalServiceTrait: Send + Sync {
    async fn get_overview(&self, identity: &SessionIdentity) -> Result<GoalOverview>;
    async fn create_goal(&self, identity: &SessionIdentity, input: GoalInput)
        -> Result<GoalOverview>;
    async fn update_goal(
        &self,
        identity: &SessionIdentity,
        goal_id: &str,
        input: GoalInput,
    ) -> Result<GoalOverview>;
    async fn delete_goal(&self, identity: &SessionIdentity, goal_id: &str) -> Result<GoalOverview>;
    async fn add_contribution(
        &self,
        identity: &SessionIdentity,
        goal_id: &str,
        amount: Decimal,
    ) -> Result<GoalOverview>;
}
