use std::sync::Arc;

use async_trait::async_trait;
use log::{debug, info};

use super::budgets_metrics::{build_budget_overview, BudgetOverview};
use super::budgets_model::{BudgetInput, BudgetPeriod};
use super::budgets_traits::{BudgetRepositoryTrait, BudgetServiceTrait};
use crate::errors::Result;
use crate::session::{ensure_allowed, ActionKind, SessionIdentity};

/// Budgets only require a selected account before mutating.
pub const BUDGET_ACTION: ActionKind = ActionKind::RequiresAccount;

pub struct BudgetService {
    repository: Arc<dyn BudgetRepositoryTrait>,
}

impl BudgetService {
    pub fn new(repository: Arc<dyn BudgetRepositoryTrait>) -> Self {
        BudgetService { repository }
    }
}

#[async_trait]
impl BudgetServiceTrait for BudgetService {
    async fn get_overview(
        &self,
        identity: &SessionIdentity,
        period: BudgetPeriod,
    ) -> Result<BudgetOverview> {
        let (Some(user_id), Some(account_id)) = (identity.user_id(), identity.account_id()) else {
            debug!("No user or account selected, returning empty budget overview");
            return Ok(BudgetOverview::empty(period));
        };

        let budgets = self.repository.list(user_id, account_id).await?;
        Ok(build_budget_overview(&budgets, period))
    }

    async fn create_budget(
        &self,
        identity: &SessionIdentity,
        input: BudgetInput,
    ) -> Result<BudgetOverview> {
        ensure_allowed(BUDGET_ACTION, &identity.state())?;
        input.validate()?;
        let user_id = identity.require_user_id()?;
        let account_id = identity.require_account_id()?;

        let created = self.repository.create(user_id, account_id, &input).await?;
        info!("Created budget {} for account {}", created.id, account_id);

        self.get_overview(identity, input.period).await
    }

    async fn update_budget(
        &self,
        identity: &SessionIdentity,
        budget_id: &str,
        input: BudgetInput,
    ) -> Result<BudgetOverview> {
        ensure_allowed(BUDGET_ACTION, &identity.state())?;
        input.validate()?;

        self.repository.update(budget_id, &input).await?;
        debug!("Updated budget {}", budget_id);

        self.get_overview(identity, input.period).await
    }

    async fn delete_budget(
        &self,
        identity: &SessionIdentity,
        budget_id: &str,
        period: BudgetPeriod,
    ) -> Result<BudgetOverview> {
        ensure_allowed(BUDGET_ACTION, &identity.state())?;

        self.repository.delete(budget_id).await?;
        debug!("Deleted budget {}", budget_id);

        self.get_overview(identity, period).await
    }
}
