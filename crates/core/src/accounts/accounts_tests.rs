//! Tests for account metrics and the account service.

use super::*;
use crate::errors::{Error, Result};
use crate::session::{Decision, SessionIdentity};
use async_trait::async_trait;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use std::sync::{Arc, Mutex};

fn account(id: &str, balance: Decimal, savings_rate: Decimal) -> Account {
    Account {
        id: id.to_string(),
        account_name: format!("Account {}", id),
        total_balance: balance,
        savings_rate,
        ..Default::default()
    }
}

// ==================== Summary ====================

#[test]
fn test_summary_totals_and_average_rate() {
    let accounts = vec![
        account("a1", dec!(1500), dec!(20)),
        account("a2", dec!(500), dec!(10)),
    ];
    let summary = account_summary(&accounts);
    assert_eq!(summary.total_accounts, 2);
    assert_eq!(summary.total_balance, dec!(2000));
    assert_eq!(summary.average_savings_rate, dec!(15));
}

#[test]
fn test_summary_empty() {
    assert_eq!(account_summary(&[]), AccountSummary::default());
}

// ==================== Selection ====================

#[test]
fn test_first_account_selected_when_nothing_stored() {
    let accounts = vec![account("a1", dec!(0), dec!(0)), account("a2", dec!(0), dec!(0))];
    assert_eq!(
        resolve_selected_account(&accounts, None),
        Some("a1".to_string())
    );
    assert_eq!(
        resolve_selected_account(&accounts, Some("a2")),
        Some("a2".to_string())
    );
    assert_eq!(resolve_selected_account(&[], None), None);
}

#[test]
fn test_deleting_selected_account_moves_selection() {
    let accounts = vec![account("a1", dec!(0), dec!(0)), account("a2", dec!(0), dec!(0))];
    assert_eq!(
        selection_after_delete(&accounts, Some("a1"), "a1"),
        Some("a2".to_string())
    );
    assert_eq!(
        selection_after_delete(&accounts, Some("a2"), "a1"),
        Some("a2".to_string())
    );
    let last = vec![account("a1", dec!(0), dec!(0))];
    assert_eq!(selection_after_delete(&last, Some("a1"), "a1"), None);
}

#[test]
fn test_account_type_parsing() {
    assert_eq!(AccountType::parse("credit_card"), Some(AccountType::CreditCard));
    assert_eq!(AccountType::parse(" Wallet "), Some(AccountType::Wallet));
    assert_eq!(AccountType::parse("brokerage"), None);
    assert_eq!(
        serde_json::to_string(&AccountType::CreditCard).unwrap(),
        "\"credit_card\""
    );
}

#[test]
fn test_input_requires_name() {
    let input = AccountInput {
        account_name: "  ".to_string(),
        account_type: AccountType::Cash,
        total_balance: dec!(0),
        description: String::new(),
    };
    assert!(matches!(input.validate(), Err(Error::Validation(_))));
}

// ============================================================================
// Service
// ============================================================================

#[derive(Default)]
struct MockAccountRepository {
    accounts: Mutex<Vec<Account>>,
    writes: Mutex<usize>,
}

#[async_trait]
impl AccountRepositoryTrait for MockAccountRepository {
    async fn list(&self, _user_id: &str) -> Result<Vec<Account>> {
        Ok(self.accounts.lock().unwrap().clone())
    }

    async fn create(&self, _user_id: &str, input: &AccountInput) -> Result<Account> {
        *self.writes.lock().unwrap() += 1;
        let mut accounts = self.accounts.lock().unwrap();
        let created = Account {
            id: format!("a{}", accounts.len() + 1),
            account_name: input.account_name.clone(),
            account_type: input.account_type,
            description: input.description.clone(),
            total_balance: input.total_balance,
            ..Default::default()
        };
        accounts.push(created.clone());
        Ok(created)
    }

    async fn update(
        &self,
        _user_id: &str,
        account_id: &str,
        input: &AccountInput,
    ) -> Result<Account> {
        *self.writes.lock().unwrap() += 1;
        let mut accounts = self.accounts.lock().unwrap();
        let existing = accounts
            .iter_mut()
            .find(|a| a.id == account_id)
            .ok_or_else(|| Error::NotFound(account_id.to_string()))?;
        existing.account_name = input.account_name.clone();
        existing.account_type = input.account_type;
        Ok(existing.clone())
    }

    async fn delete(&self, account_id: &str) -> Result<()> {
        *self.writes.lock().unwrap() += 1;
        self.accounts.lock().unwrap().retain(|a| a.id != account_id);
        Ok(())
    }
}

fn identity(account: Option<&str>) -> SessionIdentity {
    SessionIdentity::new(Some("u1".to_string()), None, account.map(str::to_string))
}

fn savings() -> AccountInput {
    AccountInput {
        account_name: "Savings".to_string(),
        account_type: AccountType::Bank,
        total_balance: dec!(2500),
        description: "Rainy day".to_string(),
    }
}

#[tokio::test]
async fn test_create_requires_login() {
    let repo = Arc::new(MockAccountRepository::default());
    let service = AccountService::new(repo.clone());

    let err = service
        .create_account(&SessionIdentity::anonymous(), savings())
        .await
        .unwrap_err();

    assert_eq!(err.gate_decision(), Some(Decision::PromptLogin));
    assert_eq!(*repo.writes.lock().unwrap(), 0);
}

#[tokio::test]
async fn test_first_account_becomes_selected() {
    let repo = Arc::new(MockAccountRepository::default());
    let service = AccountService::new(repo);

    let overview = service.create_account(&identity(None), savings()).await.unwrap();

    assert_eq!(overview.accounts.len(), 1);
    assert_eq!(overview.summary.total_balance, dec!(2500));
    assert_eq!(overview.selected_account_id, Some("a1".to_string()));
}

#[tokio::test]
async fn test_delete_selected_account_falls_back_to_next() {
    let repo = Arc::new(MockAccountRepository::default());
    repo.accounts.lock().unwrap().extend([
        account("a1", dec!(100), dec!(0)),
        account("a2", dec!(200), dec!(0)),
    ]);
    let service = AccountService::new(repo);

    let overview = service
        .delete_account(&identity(Some("a1")), "a1")
        .await
        .unwrap();
    assert_eq!(overview.selected_account_id, Some("a2".to_string()));

    let overview = service
        .delete_account(&identity(Some("a2")), "a2")
        .await
        .unwrap();
    assert!(overview.accounts.is_empty());
    assert_eq!(overview.selected_account_id, None);
}

#[tokio::test]
async fn test_select_account_checks_ownership() {
    let repo = Arc::new(MockAccountRepository::default());
    repo.accounts
        .lock()
        .unwrap()
        .push(account("a1", dec!(100), dec!(0)));
    let service = AccountService::new(repo.clone());

    let overview = service.select_account(&identity(None), "a1").await.unwrap();
    assert_eq!(overview.selected_account_id, Some("a1".to_string()));

    let err = service
        .select_account(&identity(None), "missing")
        .await
        .unwrap_err();
    assert!(matches!(err, Error::NotFound(_)));
    assert_eq!(*repo.writes.lock().unwrap(), 0);
}

#[tokio::test]
async fn test_overview_without_user_is_empty() {
    let service = AccountService::new(Arc::new(MockAccountRepository::default()));
    let overview = service
        .get_overview(&SessionIdentity::anonymous())
        .await
        .unwrap();
    assert_eq!(overview, AccountOverview::default());
}
