use async_trait::async_trait;

use super::accounts_metrics::AccountOverview;
use super::accounts_model::{Account, AccountInput};
use crate::errors::Result;
use crate::session::SessionIdentity;

/// Trait for account persistence in the data service
#[async_trait]
pub trait AccountRepositoryTrait: Send + Sync {
    async fn list(&self, user_id: &str) -> Result<Vec<Account>>;
    async fn create(&self, user_id: &str, input: &AccountInput) -> Result<Account>;
    async fn update(&self, user_id: &str, account_id: &str, input: &AccountInput)
        -> Result<Account>;
    async fn delete(&self, account_id: &str) -> Result<()>;
}

/// Trait for the accounts page workflow
#[async_trait]
pub trait AccountServiceTrait: Send + Sync {
    async fn get_overview(&self, identity: &SessionIdentity) -> Result<AccountOverview>;
    async fn create_account(
        &self,
        identity: &SessionIdentity,
        input: AccountInput,
    ) -> Result<AccountOverview>;
    async fn update_account(
        &self,
        identity: &SessionIdentity,
        account_id: &str,
        input: AccountInput,
    ) -> Result<AccountOverview>;
    async fn delete_account(
        &self,
        identity: &SessionIdentity,
        account_id: &str,
    ) -> Result<AccountOverview>;
    /// Makes `account_id` the active account. The caller stores the returned
    /// `selected_account_id`.
    async fn select_account(
        &self,
        identity: &SessionIdentity,
        account_id: &str,
    ) -> Result<AccountOverview>;
}
