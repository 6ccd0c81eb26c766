//! Transactions module - income and expense records with their totals.

mod transactions_metrics;
mod transactions_model;
mod transactions_service;
mod transactions_traits;

pub use transactions_metrics::{
    amount_by_category, average_monthly_savings, build_transaction_overview, category_spend,
    monthly_series, transaction_totals, CategoryAmount, CategorySpend, CategorySpendItem,
    MonthlyFlow, TransactionOverview, TransactionTotals,
};
pub use transactions_model::{Transaction, TransactionInput, TransactionType};
pub use transactions_service::{TransactionService, TRANSACTION_ACTION};
pub use transactions_traits::{TransactionRepositoryTrait, TransactionServiceTrait};
