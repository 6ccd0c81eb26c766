use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use log::{debug, info};
use rust_decimal::Decimal;

use super::debts_metrics::{apply_payment, build_debt_overview, DebtOverview};
use super::debts_model::{Debt, DebtInput};
use super::debts_traits::{DebtRepositoryTrait, DebtServiceTrait};
use crate::errors::{Error, Result};
use crate::session::{ensure_allowed, ActionKind, SessionIdentity};

pub const DEBT_ACTION: ActionKind = ActionKind::RequiresLogin;

pub struct DebtService {
    repository: Arc<dyn DebtRepositoryTrait>,
}

impl DebtService {
    pub fn new(repository: Arc<dyn DebtRepositoryTrait>) -> Self {
        DebtService { repository }
    }

    async fn find_debt(&self, user_id: &str, debt_id: &str) -> Result<Debt> {
        self.repository
            .list(user_id)
            .await?
            .into_iter()
            .find(|d| d.id == debt_id)
            .ok_or_else(|| Error::NotFound(format!("Debt {}", debt_id)))
    }
}

#[async_trait]
impl DebtServiceTrait for DebtService {
    async fn get_overview(&self, identity: &SessionIdentity) -> Result<DebtOverview> {
        let Some(user_id) = identity.user_id() else {
            debug!("No user logged in, returning empty debt overview");
            return Ok(DebtOverview::default());
        };
        let debts = self.repository.list(user_id).await?;
        Ok(build_debt_overview(&debts, Utc::now()))
    }

    async fn create_debt(
        &self,
        identity: &SessionIdentity,
        input: DebtInput,
    ) -> Result<DebtOverview> {
        ensure_allowed(DEBT_ACTION, &identity.state())?;
        input.validate()?;
        let user_id = identity.require_user_id()?;

        let created = self.repository.create(user_id, &input).await?;
        info!("Created debt {} ({})", created.id, created.debt_type.as_str());

        self.get_overview(identity).await
    }

    async fn update_debt(
        &self,
        identity: &SessionIdentity,
        debt_id: &str,
        input: DebtInput,
    ) -> Result<DebtOverview> {
        ensure_allowed(DEBT_ACTION, &identity.state())?;
        input.validate()?;
        let user_id = identity.require_user_id()?;

        self.repository.update(user_id, debt_id, &input).await?;
        self.get_overview(identity).await
    }

    async fn delete_debt(&self, identity: &SessionIdentity, debt_id: &str) -> Result<DebtOverview> {
        ensure_allowed(DEBT_ACTION, &identity.state())?;

        self.repository.delete(debt_id).await?;
        debug!("Deleted debt {}", debt_id);
        self.get_overview(identity).await
    }

    async fn make_payment(
        &self,
        identity: &SessionIdentity,
        debt_id: &str,
        amount: Decimal,
    ) -> Result<DebtOverview> {
        ensure_allowed(DEBT_ACTION, &identity.state())?;
        let user_id = identity.require_user_id()?;

        let debt = self.find_debt(user_id, debt_id).await?;
        let remaining = apply_payment(&debt, amount)?;

        let mut payload = DebtInput::from(&debt);
        payload.remaining_amount = remaining;
        self.repository.update(user_id, debt_id, &payload).await?;
        info!(
            "Recorded payment of {} on debt {}, remaining {}",
            amount, debt_id, remaining
        );

        self.get_overview(identity).await
    }
}
