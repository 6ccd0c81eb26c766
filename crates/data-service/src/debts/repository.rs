use std::sync::Arc;

use async_trait::async_trait;
use finsight_core::debts::{Debt, DebtInput, DebtRepositoryTrait};
use finsight_core::Result;
use log::debug;

use super::model::{debt_from_record, DebtPayload};
use crate::client::DataServiceClient;
use crate::normalize::into_records;

pub struct DebtRepository {
    client: Arc<DataServiceClient>,
}

impl DebtRepository {
    pub fn new(client: Arc<DataServiceClient>) -> Self {
        DebtRepository { client }
    }
}

#[async_trait]
impl DebtRepositoryTrait for DebtRepository {
    async fn list(&self, user_id: &str) -> Result<Vec<Debt>> {
        let body = self.client.get("debts/", &[("user_id", user_id)]).await?;
        let debts: Vec<Debt> = into_records(body)?.iter().map(debt_from_record).collect();
        debug!("Fetched {} debts for user {}", debts.len(), user_id);
        Ok(debts)
    }

    async fn create(&self, user_id: &str, input: &DebtInput) -> Result<Debt> {
        let body = self
            .client
            .post("debts/", &DebtPayload::new(user_id, input))
            .await?;
        Ok(debt_from_record(&body))
    }

    async fn update(&self, user_id: &str, debt_id: &str, input: &DebtInput) -> Result<Debt> {
        let body = self
            .client
            .put(&format!("debts/{}/", debt_id), &DebtPayload::new(user_id, input))
            .await?;
        Ok(debt_from_record(&body))
    }

    async fn delete(&self, debt_id: &str) -> Result<()> {
        self.client.delete(&format!("debts/{}/", debt_id)).await?;
        Ok(())
    }
}
