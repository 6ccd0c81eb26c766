use async_trait::async_trait;

use super::budgets_metrics::BudgetOverview;
use super::budgets_model::{Budget, BudgetInput, BudgetPeriod};
use crate::errors::Result;
use crate::session::SessionIdentity;

/// Trait for budget persistence in the data service.
#[async_trait]
pub trait BudgetRepositoryTrait: Send + Sync {
    /// Budgets of one account, across all periods.
    async fn list(&self, user_id: &str, account_id: &str) -> Result<Vec<Budget>>;
    async fn create(&self, user_id: &str, account_id: &str, input: &BudgetInput)
        -> Result<Budget>;
    async fn update(&self, budget_id: &str, input: &BudgetInput) -> Result<Budget>;
    async fn delete(&self, budget_id: &str) -> Result<()>;
}

/// Trait for the budgets page workflow.
#[async_trait]
pub trait BudgetServiceTrait: Send + Sync {
    async fn get_overview(
        &self,
        identity: &SessionIdentity,
        period: BudgetPeriod,
    ) -> Result<BudgetOverview>;
    async fn create_budget(
        &self,
        identity: &SessionIdentity,
        input: BudgetInput,
    ) -> Result<BudgetOverview>;
    async fn update_budget(
        &self,
        identity: &SessionIdentity,
        budget_id: &str,
        input: BudgetInput,
    ) -> Result<BudgetOverview>;
    async fn delete_budget(
        &self,
        identity: &SessionIdentity,
        budget_id: &str,
        period: BudgetPeriod,
    ) -> Result<BudgetOverview>;
}
