use std::sync::Arc;

use async_trait::async_trait;
use log::{debug, info};

use super::accounts_metrics::{
    build_account_overview, resolve_selected_account, selection_after_delete, AccountOverview,
};
use super::accounts_model::AccountInput;
use super::accounts_traits::{AccountRepositoryTrait, AccountServiceTrait};
use crate::errors::{Error, Result};
use crate::session::{ensure_allowed, ActionKind, SessionIdentity};

pub const ACCOUNT_ACTION: ActionKind = ActionKind::RequiresLogin;

pub struct AccountService {
    account_repo: Arc<dyn AccountRepositoryTrait>,
}

impl AccountService {
    pub fn new(account_repo: Arc<dyn AccountRepositoryTrait>) -> Self {
        AccountService { account_repo }
    }
}

#[async_trait]
impl AccountServiceTrait for AccountService {
    async fn get_overview(&self, identity: &SessionIdentity) -> Result<AccountOverview> {
        let Some(user_id) = identity.user_id() else {
            debug!("No user logged in, returning empty account overview");
            return Ok(AccountOverview::default());
        };
        let accounts = self.account_repo.list(user_id).await?;
        let selected = resolve_selected_account(&accounts, identity.account_id());
        Ok(build_account_overview(accounts, selected))
    }

    async fn create_account(
        &self,
        identity: &SessionIdentity,
        input: AccountInput,
    ) -> Result<AccountOverview> {
        ensure_allowed(ACCOUNT_ACTION, &identity.state())?;
        input.validate()?;
        let user_id = identity.require_user_id()?;

        let created = self.account_repo.create(user_id, &input).await?;
        info!(
            "Created {} account {} '{}'",
            created.account_type.as_str(),
            created.id,
            created.account_name
        );

        self.get_overview(identity).await
    }

    async fn update_account(
        &self,
        identity: &SessionIdentity,
        account_id: &str,
        input: AccountInput,
    ) -> Result<AccountOverview> {
        ensure_allowed(ACCOUNT_ACTION, &identity.state())?;
        input.validate()?;
        let user_id = identity.require_user_id()?;

        self.account_repo.update(user_id, account_id, &input).await?;
        self.get_overview(identity).await
    }

    async fn delete_account(
        &self,
        identity: &SessionIdentity,
        account_id: &str,
    ) -> Result<AccountOverview> {
        ensure_allowed(ACCOUNT_ACTION, &identity.state())?;
        let user_id = identity.require_user_id()?;

        self.account_repo.delete(account_id).await?;
        debug!("Deleted account {}", account_id);

        let accounts = self.account_repo.list(user_id).await?;
        let selected = selection_after_delete(&accounts, identity.account_id(), account_id);
        Ok(build_account_overview(accounts, selected))
    }

    async fn select_account(
        &self,
        identity: &SessionIdentity,
        account_id: &str,
    ) -> Result<AccountOverview> {
        let user_id = identity.require_user_id()?;
        let accounts = self.account_repo.list(user_id).await?;
        if !accounts.iter().any(|a| a.id == account_id) {
            return Err(Error::NotFound(format!("Account {}", account_id)));
        }
        debug!("Selected account {}", account_id);
        Ok(build_account_overview(accounts, Some(account_id.to_string())))
    }
}
