//! Accounts module - the accounts a user keeps money in and the active selection.

mod accounts_metrics;
mod accounts_model;
mod accounts_service;
mod accounts_traits;

pub use accounts_metrics::{
    account_summary, build_account_overview, resolve_selected_account, selection_after_delete,
    AccountOverview, AccountSummary,
};
pub use accounts_model::{Account, AccountInput, AccountType};
pub use accounts_service::{AccountService, ACCOUNT_ACTION};
pub use accounts_traits::{AccountRepositoryTrait, AccountServiceTrait};

#[cfg(test)]
mod accounts_tests;
