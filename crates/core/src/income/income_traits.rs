use async_trait::async_trait;
use chrono::NaiveDate;
use rust_decimal::Decimal;

use super::income_metrics::IncomeOverview;
use super::income_model::{IncomeCollection, IncomeSource, IncomeSourceInput, NewIncomeCollection};
use crate::errors::Result;
use crate::session::SessionIdentity;

/// Trait for income source and collection persistence in the data service
#[async_trait]
pub trait IncomeRepositoryTrait: Send + Sync {
    async fn list(&self, user_id: &str) -> Result<Vec<IncomeSource>>;
    async fn create(&self, user_id: &str, input: &IncomeSourceInput) -> Result<IncomeSource>;
    async fn update(
        &self,
        user_id: &str,
        source_id: &str,
        input: &IncomeSourceInput,
    ) -> Result<IncomeSource>;
    async fn delete(&self, source_id: &str) -> Result<()>;
    async fn collect(
        &self,
        user_id: &str,
        collection: &NewIncomeCollection,
    ) -> Result<IncomeCollection>;
}

/// Trait for the income sources page workflow
#[async_trait]
pub trait IncomeServiceTrait: Send + Sync {
    async fn get_overview(&self, identity: &SessionIdentity) -> Result<IncomeOverview>;
    async fn create_source(
        &self,
        identity: &SessionIdentity,
        input: IncomeSourceInput,
    ) -> Result<IncomeOverview>;
    async fn update_source(
        &self,
        identity: &SessionIdentity,
        source_id: &str,
        input: IncomeSourceInput,
    ) -> Result<IncomeOverview>;
    async fn delete_source(
        &self,
        identity: &SessionIdentity,
        source_id: &str,
    ) -> Result<IncomeOverview>;
    /// Records income received from a source. `amount` falls back to the
    /// source's amount when absent or zero.
    async fn collect_income(
        &self,
        identity: &SessionIdentity,
        source_id: &str,
        amount: Option<Decimal>,
        collection_date: NaiveDate,
    ) -> Result<IncomeCollection>;
}
