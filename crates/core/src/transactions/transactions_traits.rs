use async_trait::async_trait;

use super::transactions_metrics::TransactionOverview;
use super::transactions_model::{Transaction, TransactionInput};
use crate::errors::Result;
use crate::session::SessionIdentity;

/// Trait for transaction persistence in the data service
#[async_trait]
pub trait TransactionRepositoryTrait: Send + Sync {
    async fn list(&self, account_id: &str) -> Result<Vec<Transaction>>;
    async fn create(
        &self,
        user_id: &str,
        account_id: &str,
        input: &TransactionInput,
    ) -> Result<Transaction>;
    async fn update(
        &self,
        user_id: &str,
        account_id: &str,
        transaction_id: &str,
        input: &TransactionInput,
    ) -> Result<Transaction>;
    async fn delete(&self, transaction_id: &str) -> Result<()>;
}

/// Trait for the transactions page workflow
#[async_trait]
pub trait TransactionServiceTrait: Send + Sync {
    async fn get_overview(&self, identity: &SessionIdentity) -> Result<TransactionOverview>;
    async fn create_transaction(
        &self,
        identity: &SessionIdentity,
        input: TransactionInput,
    ) -> Result<TransactionOverview>;
    async fn update_transaction(
        &self,
        identity: &SessionIdentity,
        transaction_id: &str,
        input: TransactionInput,
    ) -> Result<TransactionOverview>;
    async fn delete_transaction(
        &self,
        identity: &SessionIdentity,
        transaction_id: &str,
    ) -> Result<TransactionOverview>;
}
