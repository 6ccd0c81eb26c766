use async_trait::async_trait;

use super::portfolio_metrics::PortfolioOverview;
use super::portfolio_model::{Holding, HoldingInput};
use crate::errors::Result;
use crate::session::SessionIdentity;

/// Trait for holding persistence in the data service
#[async_trait]
pub trait PortfolioRepositoryTrait: Send + Sync {
    async fn list(&self, user_id: &str) -> Result<Vec<Holding>>;
    async fn create(&self, user_id: &str, input: &HoldingInput) -> Result<Holding>;
    async fn update(
        &self,
        user_id: &str,
        holding_id: &str,
        input: &HoldingInput,
    ) -> Result<Holding>;
    async fn delete(&self, holding_id: &str) -> Result<()>;
}

/// Trait for the portfolio page workflow
#[async_trait]
pub trait PortfolioServiceTrait: Send + Sync {
    async fn get_overview(&self, identity: &SessionIdentity) -> Result<PortfolioOverview>;
    async fn add_holding(
        &self,
        identity: &SessionIdentity,
        input: HoldingInput,
    ) -> Result<PortfolioOverview>;
    async fn update_holding(
        &self,
        identity: &SessionIdentity,
        holding_id: &str,
        input: HoldingInput,
    ) -> Result<PortfolioOverview>;
    async fn delete_holding(
        &self,
        identity: &SessionIdentity,
        holding_id: &str,
    ) -> Result<PortfolioOverview>;
}
