use async_trait::async_trait;
use rust_decimal::Decimal;

use super::debts_metrics::DebtOverview;
use super::debts_model::{Debt, DebtInput};
use crate::errors::Result;
use crate::session::SessionIdentity;

/// Trait for debt persistence in the data service.
#[async_trait]
pub trait DebtRepositoryTrait: Send + Sync {
    async fn list(&self, user_id: &str) -> Result<Vec<Debt>>;
    async fn create(&self, user_id: &str, input: &DebtInput) -> Result<Debt>;
    async fn update(&self, user_id: &str, debt_id: &str, input: &DebtInput) -> Result<Debt>;
    async fn delete(&self, debt_id: &str) -> Result<()>;
}

/// Trait for the debt tracker page workflow.
#[async_trait]
pub trait DebtServiceTrait: Send + Sync {
    async fn get_overview(&self, identity: &SessionIdentity) -> Result<DebtOverview>;
    async fn create_debt(&self, identity: &SessionIdentity, input: DebtInput)
        -> Result<DebtOverview>;
    async fn update_debt(
        &self,
        identity: &SessionIdentity,
        debt_id: &str,
        input: DebtInput,
    ) -> Result<DebtOverview>;
    async fn delete_debt(&self, identity: &SessionIdentity, debt_id: &str) -> Result<DebtOverview>;
    /// Records a payment against the remaining balance.
    async fn make_payment(
        &self,
        identity: &SessionIdentity,
        debt_id: &str,
        amount: Decimal,
    ) -> Result<DebtOverview>;
}
