use std::sync::Arc;

use async_trait::async_trait;
use finsight_core::portfolio::{Holding, HoldingInput, PortfolioRepositoryTrait};
use finsight_core::Result;
use log::debug;

use super::model::{holding_from_record, HoldingPayload};
use crate::client::DataServiceClient;
use crate::normalize::into_records;

pub struct PortfolioRepository {
    client: Arc<DataServiceClient>,
}

impl PortfolioRepository {
    pub fn new(client: Arc<DataServiceClient>) -> Self {
        PortfolioRepository { client }
    }
}

#[async_trait]
impl PortfolioRepositoryTrait for PortfolioRepository {
    async fn list(&self, user_id: &str) -> Result<Vec<Holding>> {
        let body = self
            .client
            .get("portfolios/", &[("user_id", user_id)])
            .await?;
        let holdings: Vec<Holding> = into_records(body)?
            .iter()
            .map(holding_from_record)
            .collect();
        debug!("Fetched {} holdings for user {}", holdings.len(), user_id);
        Ok(holdings)
    }

    async fn create(&self, user_id: &str, input: &HoldingInput) -> Result<Holding> {
        let body = self
            .client
            .post("portfolios/", &HoldingPayload::new(user_id, input))
            .await?;
        Ok(holding_from_record(&body))
    }

    async fn update(
        &self,
        user_id: &str,
        holding_id: &str,
        input: &HoldingInput,
    ) -> Result<Holding> {
        let body = self
            .client
            .put(
                &format!("portfolios/{}/", holding_id),
                &HoldingPayload::new(user_id, input),
            )
            .await?;
        Ok(holding_from_record(&body))
    }

    async fn delete(&self, holding_id: &str) -> Result<()> {
        self.client
            .delete(&format!("portfolios/{}/", holding_id))
            .await?;
        Ok(())
    }
}
