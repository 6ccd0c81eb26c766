use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use log::debug;

use super::analytics_metrics::{build_analytics_overview, AnalyticsOverview};
use super::analytics_model::AnalyticsRange;
use super::analytics_traits::AnalyticsServiceTrait;
use crate::budgets::BudgetRepositoryTrait;
use crate::errors::Result;
use crate::goals::GoalRepositoryTrait;
use crate::session::SessionIdentity;
use crate::transactions::TransactionRepositoryTrait;

pub struct AnalyticsService {
    transaction_repo: Arc<dyn TransactionRepositoryTrait>,
    budget_repo: Arc<dyn BudgetRepositoryTrait>,
    goal_repo: Arc<dyn GoalRepositoryTrait>,
}

impl AnalyticsService {
    pub fn new(
        transaction_repo: Arc<dyn TransactionRepositoryTrait>,
        budget_repo: Arc<dyn BudgetRepositoryTrait>,
        goal_repo: Arc<dyn GoalRepositoryTrait>,
    ) -> Self {
        AnalyticsService {
            transaction_repo,
            budget_repo,
            goal_repo,
        }
    }
}

#[async_trait]
impl AnalyticsServiceTrait for AnalyticsService {
    async fn get_overview(
        &self,
        identity: &SessionIdentity,
        range: AnalyticsRange,
    ) -> Result<AnalyticsOverview> {
        let Some(user_id) = identity.user_id() else {
            debug!("No user logged in, returning empty analytics");
            return Ok(AnalyticsOverview::empty(range));
        };
        let goals = self.goal_repo.list(user_id).await?;

        // Cash flow and budgets are per account
        let (transactions, active_budgets) = match identity.account_id() {
            Some(account_id) => {
                let transactions = self.transaction_repo.list(account_id).await?;
                let budgets = self.budget_repo.list(user_id, account_id).await?;
                (transactions, budgets.len())
            }
            None => (Vec::new(), 0),
        };

        debug!(
            "Analytics for {} to {}: {} transactions, {} goals",
            range.start,
            range.end,
            transactions.len(),
            goals.len()
        );
        Ok(build_analytics_overview(
            &transactions,
            active_budgets,
            &goals,
            range,
            Utc::now(),
        ))
    }
}
