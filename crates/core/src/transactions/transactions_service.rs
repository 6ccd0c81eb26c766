use std::sync::Arc;

use async_trait::async_trait;
use log::{debug, info};

use super::transactions_metrics::{build_transaction_overview, TransactionOverview};
use super::transactions_model::TransactionInput;
use super::transactions_traits::{TransactionRepositoryTrait, TransactionServiceTrait};
use crate::errors::Result;
use crate::session::{ensure_allowed, ActionKind, SessionIdentity};

/// Transactions belong to an account, like budgets.
pub const TRANSACTION_ACTION: ActionKind = ActionKind::RequiresAccount;

pub struct TransactionService {
    transaction_repo: Arc<dyn TransactionRepositoryTrait>,
}

impl TransactionService {
    pub fn new(transaction_repo: Arc<dyn TransactionRepositoryTrait>) -> Self {
        TransactionService { transaction_repo }
    }
}

#[async_trait]
impl TransactionServiceTrait for TransactionService {
    async fn get_overview(&self, identity: &SessionIdentity) -> Result<TransactionOverview> {
        let Some(account_id) = identity.account_id() else {
            debug!("No account selected, returning empty transaction overview");
            return Ok(TransactionOverview::default());
        };
        let transactions = self.transaction_repo.list(account_id).await?;
        debug!(
            "Loaded {} transactions for account {}",
            transactions.len(),
            account_id
        );
        Ok(build_transaction_overview(transactions))
    }

    async fn create_transaction(
        &self,
        identity: &SessionIdentity,
        input: TransactionInput,
    ) -> Result<TransactionOverview> {
        ensure_allowed(TRANSACTION_ACTION, &identity.state())?;
        input.validate()?;
        let user_id = identity.require_user_id()?;
        let account_id = identity.require_account_id()?;

        let created = self
            .transaction_repo
            .create(user_id, account_id, &input)
            .await?;
        info!(
            "Created {} transaction {} of {} in '{}'",
            created.transaction_type.as_str(),
            created.id,
            created.amount,
            created.category
        );

        self.get_overview(identity).await
    }

    async fn update_transaction(
        &self,
        identity: &SessionIdentity,
        transaction_id: &str,
        input: TransactionInput,
    ) -> Result<TransactionOverview> {
        ensure_allowed(TRANSACTION_ACTION, &identity.state())?;
        input.validate()?;
        let user_id = identity.require_user_id()?;
        let account_id = identity.require_account_id()?;

        self.transaction_repo
            .update(user_id, account_id, transaction_id, &input)
            .await?;
        self.get_overview(identity).await
    }

    async fn delete_transaction(
        &self,
        identity: &SessionIdentity,
        transaction_id: &str,
    ) -> Result<TransactionOverview> {
        ensure_allowed(TRANSACTION_ACTION, &identity.state())?;

        self.transaction_repo.delete(transaction_id).await?;
        debug!("Deleted transaction {}", transaction_id);
        self.get_overview(identity).await
    }
}
