//! Account totals and the choice of the active account.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::accounts_model::Account;
use crate::utils::decimal_utils::{mean_by, sum_by};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct AccountSummary {
    pub total_accounts: usize,
    pub total_balance: Decimal,
    pub average_savings_rate: Decimal,
}

pub fn account_summary(accounts: &[Account]) -> AccountSummary {
    AccountSummary {
        total_accounts: accounts.len(),
        total_balance: sum_by(accounts, |a| a.total_balance),
        average_savings_rate: mean_by(accounts, |a| a.savings_rate),
    }
}

/// The stored selection when there is one, otherwise the first account.
pub fn resolve_selected_account(accounts: &[Account], stored: Option<&str>) -> Option<String> {
    match stored {
        Some(id) => Some(id.to_string()),
        None => accounts.first().map(|a| a.id.clone()),
    }
}

/// Selection once `deleted_id` is gone. Deleting the active account moves the
/// selection to the first remaining one, or clears it.
pub fn selection_after_delete(
    accounts: &[Account],
    selected: Option<&str>,
    deleted_id: &str,
) -> Option<String> {
    match selected {
        Some(id) if id != deleted_id => Some(id.to_string()),
        _ => accounts
            .iter()
            .find(|a| a.id != deleted_id)
            .map(|a| a.id.clone()),
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct AccountOverview {
    pub accounts: Vec<Account>,
    pub summary: AccountSummary,
    /// Account the caller should store as selected; `None` when there are none
    pub selected_account_id: Option<String>,
}

pub fn build_account_overview(
    accounts: Vec<Account>,
    selected_account_id: Option<String>,
) -> AccountOverview {
    let summary = account_summary(&accounts);
    AccountOverview {
        accounts,
        summary,
        selected_account_id,
    }
}
