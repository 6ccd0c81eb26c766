use std::sync::Arc;

use async_trait::async_trait;
use finsight_core::budgets::{Budget, BudgetInput, BudgetRepositoryTrait};
use finsight_core::Result;
use log::debug;

use super::model::{budget_from_record, BudgetPayload, BudgetUpdatePayload};
use crate::client::DataServiceClient;
use crate::normalize::into_records;

pub struct BudgetRepository {
    client: Arc<DataServiceClient>,
}

impl BudgetRepository {
    pub fn new(client: Arc<DataServiceClient>) -> Self {
        BudgetRepository { client }
    }
}

#[async_trait]
impl BudgetRepositoryTrait for BudgetRepository {
    async fn list(&self, user_id: &str, account_id: &str) -> Result<Vec<Budget>> {
        let path = format!("budgets/accounts/{}/", account_id);
        let body = self.client.get(&path, &[("user_id", user_id)]).await?;
        let budgets: Vec<Budget> = into_records(body)?
            .iter()
            .map(budget_from_record)
            .collect();
        debug!("Fetched {} budgets for account {}", budgets.len(), account_id);
        Ok(budgets)
    }

    async fn create(
        &self,
        user_id: &str,
        account_id: &str,
        input: &BudgetInput,
    ) -> Result<Budget> {
        let payload = BudgetPayload::new(user_id, account_id, input);
        let body = self.client.post("budgets/", &payload).await?;
        Ok(budget_from_record(&body))
    }

    async fn update(&self, budget_id: &str, input: &BudgetInput) -> Result<Budget> {
        let path = format!("budgets/{}/", budget_id);
        let body = self
            .client
            .put(&path, &BudgetUpdatePayload::from(input))
            .await?;
        Ok(budget_from_record(&body))
    }

    async fn delete(&self, budget_id: &str) -> Result<()> {
        self.client
            .delete(&format!("budgets/{}/", budget_id))
            .await?;
        Ok(())
    }
}
