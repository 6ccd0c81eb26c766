//! Wiring of page services onto the REST repositories.

use std::sync::Arc;

use finsight_core::accounts::{AccountService, AccountServiceTrait};
use finsight_core::analytics::{AnalyticsService, AnalyticsServiceTrait};
use finsight_core::budgets::{BudgetService, BudgetServiceTrait};
use finsight_core::debts::{DebtService, DebtServiceTrait};
use finsight_core::goals::{GoalService, GoalServiceTrait};
use finsight_core::income::{IncomeService, IncomeServiceTrait};
use finsight_core::portfolio::{PortfolioService, PortfolioServiceTrait};
use finsight_core::transactions::{TransactionService, TransactionServiceTrait};
use finsight_core::{Result, SessionIdentity};
use log::info;

use crate::accounts::AccountRepository;
use crate::budgets::BudgetRepository;
use crate::client::DataServiceClient;
use crate::config::DataServiceConfig;
use crate::debts::DebtRepository;
use crate::goals::GoalRepository;
use crate::income::IncomeRepository;
use crate::portfolio::PortfolioRepository;
use crate::transactions::TransactionRepository;

/// One service per page, all sharing a single HTTP client.
#[derive(Clone)]
pub struct ServiceContext {
    pub account_service: Arc<dyn AccountServiceTrait>,
    pub analytics_service: Arc<dyn AnalyticsServiceTrait>,
    pub budget_service: Arc<dyn BudgetServiceTrait>,
    pub debt_service: Arc<dyn DebtServiceTrait>,
    pub goal_service: Arc<dyn GoalServiceTrait>,
    pub portfolio_service: Arc<dyn PortfolioServiceTrait>,
    pub income_service: Arc<dyn IncomeServiceTrait>,
    pub transaction_service: Arc<dyn TransactionServiceTrait>,
}

impl ServiceContext {
    pub fn new(client: Arc<DataServiceClient>) -> Self {
        let account_repository = Arc::new(AccountRepository::new(client.clone()));
        let budget_repository = Arc::new(BudgetRepository::new(client.clone()));
        let debt_repository = Arc::new(DebtRepository::new(client.clone()));
        let goal_repository = Arc::new(GoalRepository::new(client.clone()));
        let portfolio_repository = Arc::new(PortfolioRepository::new(client.clone()));
        let income_repository = Arc::new(IncomeRepository::new(client.clone()));
        let transaction_repository = Arc::new(TransactionRepository::new(client));

        Self {
            account_service: Arc::new(AccountService::new(account_repository)),
            analytics_service: Arc::new(AnalyticsService::new(
                transaction_repository.clone(),
                budget_repository.clone(),
                goal_repository.clone(),
            )),
            budget_service: Arc::new(BudgetService::new(budget_repository)),
            debt_service: Arc::new(DebtService::new(debt_repository)),
            goal_service: Arc::new(GoalService::new(goal_repository)),
            portfolio_service: Arc::new(PortfolioService::new(portfolio_repository)),
            income_service: Arc::new(IncomeService::new(income_repository)),
            transaction_service: Arc::new(TransactionService::new(transaction_repository)),
        }
    }

    pub fn from_config(config: &DataServiceConfig) -> Result<Self> {
        let client = DataServiceClient::new(config)?;
        info!("Using data service at {}", client.base_url());
        Ok(Self::new(Arc::new(client)))
    }

    /// Services acting for `identity`. Its access token, when present,
    /// replaces the configured one on every request.
    pub fn for_identity(client: &DataServiceClient, identity: &SessionIdentity) -> Result<Self> {
        let client = match identity.access_token() {
            Some(token) => client.with_access_token(token)?,
            None => client.clone(),
        };
        Ok(Self::new(Arc::new(client)))
    }

    /// Loads `DataServiceConfig` from the environment and builds every service.
    pub fn from_env() -> Result<Self> {
        Self::from_config(&DataServiceConfig::from_env()?)
    }
}
