use std::sync::Arc;

use async_trait::async_trait;
use finsight_core::goals::{Goal, GoalInput, GoalRepositoryTrait};
use finsight_core::Result;
use log::debug;

use super::model::{goal_from_record, GoalPayload};
use crate::client::DataServiceClient;
use crate::normalize::into_records;

pub struct GoalRepository {
    client: Arc<DataServiceClient>,
}

impl GoalRepository {
    pub fn new(client: Arc<DataServiceClient>) -> Self {
        GoalRepository { client }
    }
}

#[async_trait]
impl GoalRepositoryTrait for GoalRepository {
    async fn list(&self, user_id: &str) -> Result<Vec<Goal>> {
        let body = self.client.get("goals/", &[("user_id", user_id)]).await?;
        let goals: Vec<Goal> = into_records(body)?.iter().map(goal_from_record).collect();
        debug!("Fetched {} goals for user {}", goals.len(), user_id);
        Ok(goals)
    }

    async fn create(&self, user_id: &str, input: &GoalInput) -> Result<Goal> {
        let body = self
            .client
            .post("goals/", &GoalPayload::new(user_id, input))
            .await?;
        Ok(goal_from_record(&body))
    }

    async fn update(&self, user_id: &str, goal_id: &str, input: &GoalInput) -> Result<Goal> {
        let body = self
            .client
            .put(&format!("goals/{}/", goal_id), &GoalPayload::new(user_id, input))
            .await?;
        Ok(goal_from_record(&body))
    }

    async fn delete(&self, goal_id: &str) -> Result<()> {
        self.client.delete(&format!("goals/{}/", goal_id)).await?;
        Ok(())
    }
}
