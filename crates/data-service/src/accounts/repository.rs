use std::sync::Arc;

use async_trait::async_trait;
use finsight_core::accounts::{Account, AccountInput, AccountRepositoryTrait};
use finsight_core::Result;
use log::debug;

use super::model::{account_from_record, AccountPayload};
use crate::client::DataServiceClient;
use crate::normalize::into_records;

pub struct AccountRepository {
    client: Arc<DataServiceClient>,
}

impl AccountRepository {
    pub fn new(client: Arc<DataServiceClient>) -> Self {
        AccountRepository { client }
    }
}

#[async_trait]
impl AccountRepositoryTrait for AccountRepository {
    async fn list(&self, user_id: &str) -> Result<Vec<Account>> {
        let body = self.client.get("accounts/", &[("user_id", user_id)]).await?;
        let accounts: Vec<Account> = into_records(body)?
            .iter()
            .map(account_from_record)
            .collect();
        debug!("Fetched {} accounts for user {}", accounts.len(), user_id);
        Ok(accounts)
    }

    async fn create(&self, user_id: &str, input: &AccountInput) -> Result<Account> {
        let body = self
            .client
            .post("accounts/", &AccountPayload::for_create(user_id, input))
            .await?;
        Ok(account_from_record(&body))
    }

    async fn update(
        &self,
        user_id: &str,
        account_id: &str,
        input: &AccountInput,
    ) -> Result<Account> {
        let body = self
            .client
            .put(
                &format!("accounts/{}/update/", account_id),
                &AccountPayload::for_update(user_id, input),
            )
            .await?;
        Ok(account_from_record(&body))
    }

    async fn delete(&self, account_id: &str) -> Result<()> {
        self.client
            .delete(&format!("accounts/{}/delete/", account_id))
            .await?;
        Ok(())
    }
}
