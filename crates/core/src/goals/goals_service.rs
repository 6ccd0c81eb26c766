use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use log::{debug, info};
use rust_decimal::Decimal;

use super::goals_metrics::{add_contribution, build_goal_overview, GoalOverview};
use super::goals_model::{Goal, GoalInput};
use super::goals_traits::{GoalRepositoryTrait, GoalServiceTrait};
use crate::errors::{Error, Result};
use crate::session::{ensure_allowed, ActionKind, SessionIdentity};

pub const GOAL_ACTION: ActionKind = ActionKind::RequiresLogin;

pub struct GoalService {
    goal_repo: Arc<dyn GoalRepositoryTrait>,
}

impl GoalService {
    pub fn new(goal_repo: Arc<dyn GoalRepositoryTrait>) -> Self {
        GoalService { goal_repo }
    }

    async fn find_goal(&self, user_id: &str, goal_id: &str) -> Result<Goal> {
        self.goal_repo
            .list(user_id)
            .await?
            .into_iter()
            .find(|g| g.id == goal_id)
            .ok_or_else(|| Error::NotFound(format!("Goal {}", goal_id)))
    }
}

#[async_trait]
impl GoalServiceTrait for GoalService {
    async fn get_overview(&self, identity: &SessionIdentity) -> Result<GoalOverview> {
        let Some(user_id) = identity.user_id() else {
            debug!("No user logged in, returning empty goal overview");
            return Ok(GoalOverview::default());
        };
        let goals = self.goal_repo.list(user_id).await?;
        Ok(build_goal_overview(&goals, Utc::now()))
    }

    async fn create_goal(
        &self,
        identity: &SessionIdentity,
        input: GoalInput,
    ) -> Result<GoalOverview> {
        ensure_allowed(GOAL_ACTION, &identity.state())?;
        input.validate()?;
        let user_id = identity.require_user_id()?;

        let created = self.goal_repo.create(user_id, &input).await?;
        info!("Created goal {} '{}'", created.id, created.title);

        self.get_overview(identity).await
    }

    async fn update_goal(
        &self,
        identity: &SessionIdentity,
        goal_id: &str,
        input: GoalInput,
    ) -> Result<GoalOverview> {
        ensure_allowed(GOAL_ACTION, &identity.state())?;
        input.validate()?;
        let user_id = identity.require_user_id()?;

        self.goal_repo.update(user_id, goal_id, &input).await?;
        self.get_overview(identity).await
    }

    async fn delete_goal(&self, identity: &SessionIdentity, goal_id: &str) -> Result<GoalOverview> {
        ensure_allowed(GOAL_ACTION, &identity.state())?;

        self.goal_repo.delete(goal_id).await?;
        debug!("Deleted goal {}", goal_id);
        self.get_overview(identity).await
    }

    async fn add_contribution(
        &self,
        identity: &SessionIdentity,
        goal_id: &str,
        amount: Decimal,
    ) -> Result<GoalOverview> {
        ensure_allowed(GOAL_ACTION, &identity.state())?;
        let user_id = identity.require_user_id()?;

        let goal = self.find_goal(user_id, goal_id).await?;
        let mut payload = GoalInput::from(&goal);
        payload.current_amount = add_contribution(&goal, amount)?;

        self.goal_repo.update(user_id, goal_id, &payload).await?;
        info!(
            "Added contribution of {} to goal {}, now {}",
            amount, goal_id, payload.current_amount
        );

        self.get_overview(identity).await
    }
}
