use std::sync::Arc;

use async_trait::async_trait;
use finsight_core::transactions::{Transaction, TransactionInput, TransactionRepositoryTrait};
use finsight_core::Result;
use log::debug;

use super::model::{transaction_from_record, TransactionPayload};
use crate::client::DataServiceClient;
use crate::normalize::into_records;

pub struct TransactionRepository {
    client: Arc<DataServiceClient>,
}

impl TransactionRepository {
    pub fn new(client: Arc<DataServiceClient>) -> Self {
        TransactionRepository { client }
    }
}

#[async_trait]
impl TransactionRepositoryTrait for TransactionRepository {
    async fn list(&self, account_id: &str) -> Result<Vec<Transaction>> {
        let path = format!("transactions/accounts/{}/", account_id);
        let body = self.client.get(&path, &[]).await?;
        let transactions: Vec<Transaction> = into_records(body)?
            .iter()
            .map(transaction_from_record)
            .collect();
        debug!(
            "Fetched {} transactions for account {}",
            transactions.len(),
            account_id
        );
        Ok(transactions)
    }

    async fn create(
        &self,
        user_id: &str,
        account_id: &str,
        input: &TransactionInput,
    ) -> Result<Transaction> {
        let body = self
            .client
            .post(
                "transactions/",
                &TransactionPayload::new(user_id, account_id, input),
            )
            .await?;
        Ok(transaction_from_record(&body))
    }

    async fn update(
        &self,
        user_id: &str,
        account_id: &str,
        transaction_id: &str,
        input: &TransactionInput,
    ) -> Result<Transaction> {
        let body = self
            .client
            .put(
                &format!("transactions/{}/update/", transaction_id),
                &TransactionPayload::new(user_id, account_id, input),
            )
            .await?;
        Ok(transaction_from_record(&body))
    }

    async fn delete(&self, transaction_id: &str) -> Result<()> {
        self.client
            .delete(&format!("transactions/{}/delete/", transaction_id))
            .await?;
        Ok(())
    }
}
