use std::sync::Arc;

use async_trait::async_trait;
use chrono::NaiveDate;
use log::{debug, info};
use rust_decimal::Decimal;

use super::income_metrics::{build_income_overview, resolve_collection_amount, IncomeOverview};
use super::income_model::{IncomeCollection, IncomeSourceInput, NewIncomeCollection};
use super::income_traits::{IncomeRepositoryTrait, IncomeServiceTrait};
use crate::errors::{Error, Result, ValidationError};
use crate::session::{ensure_allowed, ActionKind, SessionIdentity};

pub const INCOME_ACTION: ActionKind = ActionKind::RequiresLogin;

pub struct IncomeService {
    income_repo: Arc<dyn IncomeRepositoryTrait>,
}

impl IncomeService {
    pub fn new(income_repo: Arc<dyn IncomeRepositoryTrait>) -> Self {
        IncomeService { income_repo }
    }
}

#[async_trait]
impl IncomeServiceTrait for IncomeService {
    async fn get_overview(&self, identity: &SessionIdentity) -> Result<IncomeOverview> {
        let Some(user_id) = identity.user_id() else {
            debug!("No user logged in, returning empty income overview");
            return Ok(IncomeOverview::default());
        };
        let sources = self.income_repo.list(user_id).await?;
        Ok(build_income_overview(sources))
    }

    async fn create_source(
        &self,
        identity: &SessionIdentity,
        input: IncomeSourceInput,
    ) -> Result<IncomeOverview> {
        ensure_allowed(INCOME_ACTION, &identity.state())?;
        input.validate()?;
        let user_id = identity.require_user_id()?;

        let created = self.income_repo.create(user_id, &input).await?;
        info!("Created income source {} '{}'", created.id, created.name);

        self.get_overview(identity).await
    }

    async fn update_source(
        &self,
        identity: &SessionIdentity,
        source_id: &str,
        input: IncomeSourceInput,
    ) -> Result<IncomeOverview> {
        ensure_allowed(INCOME_ACTION, &identity.state())?;
        input.validate()?;
        let user_id = identity.require_user_id()?;

        self.income_repo.update(user_id, source_id, &input).await?;
        self.get_overview(identity).await
    }

    async fn delete_source(
        &self,
        identity: &SessionIdentity,
        source_id: &str,
    ) -> Result<IncomeOverview> {
        ensure_allowed(INCOME_ACTION, &identity.state())?;

        self.income_repo.delete(source_id).await?;
        debug!("Deleted income source {}", source_id);
        self.get_overview(identity).await
    }

    async fn collect_income(
        &self,
        identity: &SessionIdentity,
        source_id: &str,
        amount: Option<Decimal>,
        collection_date: NaiveDate,
    ) -> Result<IncomeCollection> {
        ensure_allowed(INCOME_ACTION, &identity.state())?;
        let user_id = identity.require_user_id()?;

        let source = self
            .income_repo
            .list(user_id)
            .await?
            .into_iter()
            .find(|s| s.id == source_id)
            .ok_or_else(|| Error::NotFound(format!("Income source {}", source_id)))?;

        let amount = resolve_collection_amount(&source, amount);
        if amount < Decimal::ZERO {
            return Err(ValidationError::InvalidInput(
                "Collected amount cannot be negative".to_string(),
            )
            .into());
        }

        let collection = NewIncomeCollection {
            income_source_id: source.id.clone(),
            amount,
            collection_date,
            notes: String::new(),
        };
        let recorded = self.income_repo.collect(user_id, &collection).await?;
        info!("Collected {} from income source '{}'", amount, source.name);
        Ok(recorded)
    }
}
