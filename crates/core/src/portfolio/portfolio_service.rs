use std::sync::Arc;

use async_trait::async_trait;
use log::{debug, info};

use super::portfolio_metrics::{build_portfolio_overview, PortfolioOverview};
use super::portfolio_model::HoldingInput;
use super::portfolio_traits::{PortfolioRepositoryTrait, PortfolioServiceTrait};
use crate::errors::Result;
use crate::session::{ensure_allowed, ActionKind, SessionIdentity};

pub const PORTFOLIO_ACTION: ActionKind = ActionKind::RequiresLogin;

pub struct PortfolioService {
    holding_repo: Arc<dyn PortfolioRepositoryTrait>,
}

impl PortfolioService {
    pub fn new(holding_repo: Arc<dyn PortfolioRepositoryTrait>) -> Self {
        PortfolioService { holding_repo }
    }
}

#[async_trait]
impl PortfolioServiceTrait for PortfolioService {
    async fn get_overview(&self, identity: &SessionIdentity) -> Result<PortfolioOverview> {
        let Some(user_id) = identity.user_id() else {
            debug!("No user logged in, returning empty portfolio");
            return Ok(PortfolioOverview::default());
        };
        let holdings = self.holding_repo.list(user_id).await?;
        debug!("Loaded {} holdings for user {}", holdings.len(), user_id);
        Ok(build_portfolio_overview(holdings))
    }

    async fn add_holding(
        &self,
        identity: &SessionIdentity,
        input: HoldingInput,
    ) -> Result<PortfolioOverview> {
        ensure_allowed(PORTFOLIO_ACTION, &identity.state())?;
        input.validate()?;
        let user_id = identity.require_user_id()?;

        let created = self
            .holding_repo
            .create(user_id, &input.normalized())
            .await?;
        info!("Added holding {} ({})", created.id, created.symbol);

        self.get_overview(identity).await
    }

    async fn update_holding(
        &self,
        identity: &SessionIdentity,
        holding_id: &str,
        input: HoldingInput,
    ) -> Result<PortfolioOverview> {
        ensure_allowed(PORTFOLIO_ACTION, &identity.state())?;
        input.validate()?;
        let user_id = identity.require_user_id()?;

        self.holding_repo
            .update(user_id, holding_id, &input.normalized())
            .await?;
        self.get_overview(identity).await
    }

    async fn delete_holding(
        &self,
        identity: &SessionIdentity,
        holding_id: &str,
    ) -> Result<PortfolioOverview> {
        ensure_allowed(PORTFOLIO_ACTION, &identity.state())?;

        self.holding_repo.delete(holding_id).await?;
        debug!("Deleted holding {}", holding_id);
        self.get_overview(identity).await
    }
}
