//! Cash-flow totals and category breakdowns over transactions.

use chrono::{Datelike, Months, NaiveDate};
use num_traits::Zero;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::transactions_model::{Transaction, TransactionType};
use crate::constants::MAX_SERIES_MONTHS;
use crate::utils::decimal_utils::{percent_of, sum_by};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct TransactionTotals {
    pub total_income: Decimal,
    pub total_expenses: Decimal,
    pub net_balance: Decimal,
    /// Share of income kept, zero when there is no income
    pub savings_rate: Decimal,
}

pub fn transaction_totals(transactions: &[Transaction]) -> TransactionTotals {
    let (total_income, total_expenses) = transactions.iter().fold(
        (Decimal::zero(), Decimal::zero()),
        |(income, expenses), t| match t.transaction_type {
            TransactionType::Income => (income.saturating_add(t.amount), expenses),
            TransactionType::Expense => (income, expenses.saturating_add(t.amount)),
        },
    );
    let net_balance = total_income.saturating_sub(total_expenses);

    TransactionTotals {
        total_income,
        total_expenses,
        net_balance,
        savings_rate: percent_of(net_balance, total_income),
    }
}

/// Amount moved within one category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryAmount {
    pub category: String,
    /// Sum of all transactions in the category regardless of direction
    pub amount: Decimal,
    pub income: Decimal,
    pub expense: Decimal,
    pub dominant_flow: TransactionType,
}

/// Per-category sums in the order categories first appear.
pub fn amount_by_category(transactions: &[Transaction]) -> Vec<CategoryAmount> {
    let mut categories: Vec<CategoryAmount> = Vec::new();
    for t in transactions {
        let index = match categories.iter().position(|c| c.category == t.category) {
            Some(index) => index,
            None => {
                categories.push(CategoryAmount {
                    category: t.category.clone(),
                    amount: Decimal::zero(),
                    income: Decimal::zero(),
                    expense: Decimal::zero(),
                    dominant_flow: TransactionType::Income,
                });
                categories.len() - 1
            }
        };
        let entry = &mut categories[index];
        entry.amount = entry.amount.saturating_add(t.amount);
        match t.transaction_type {
            TransactionType::Income => entry.income = entry.income.saturating_add(t.amount),
            TransactionType::Expense => entry.expense = entry.expense.saturating_add(t.amount),
        }
    }

    for entry in &mut categories {
        entry.dominant_flow = if entry.income >= entry.expense {
            TransactionType::Income
        } else {
            TransactionType::Expense
        };
    }
    categories
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategorySpendItem {
    pub category: String,
    pub amount: Decimal,
}

/// Expense totals per category, largest first.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct CategorySpend {
    pub total: Decimal,
    pub items: Vec<CategorySpendItem>,
}

/// Groups expenses by category. Income is ignored; equal amounts keep the
/// order their categories first appear in.
pub fn category_spend(transactions: &[Transaction]) -> CategorySpend {
    let mut items: Vec<CategorySpendItem> = Vec::new();
    for t in transactions
        .iter()
        .filter(|t| t.transaction_type == TransactionType::Expense)
    {
        match items.iter_mut().find(|item| item.category == t.category) {
            Some(item) => item.amount = item.amount.saturating_add(t.amount),
            None => items.push(CategorySpendItem {
                category: t.category.clone(),
                amount: t.amount,
            }),
        }
    }
    items.sort_by(|a, b| b.amount.cmp(&a.amount));

    CategorySpend {
        total: sum_by(&items, |item| item.amount),
        items,
    }
}

/// Income and expenses booked in one calendar month.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthlyFlow {
    /// First day of the month
    pub month: NaiveDate,
    /// Short month name, e.g. `Jan`
    pub label: String,
    pub income: Decimal,
    pub expenses: Decimal,
}

/// One bucket per month from `start` through `end`, at most
/// `MAX_SERIES_MONTHS` of them. Undated transactions and transactions outside
/// the buckets are left out.
pub fn monthly_series(
    transactions: &[Transaction],
    start: NaiveDate,
    end: NaiveDate,
) -> Vec<MonthlyFlow> {
    let mut series = Vec::new();
    let mut month = first_of_month(start);
    while month <= end && series.len() < MAX_SERIES_MONTHS {
        series.push(MonthlyFlow {
            month,
            label: month.format("%b").to_string(),
            income: Decimal::zero(),
            expenses: Decimal::zero(),
        });
        match month.checked_add_months(Months::new(1)) {
            Some(next) => month = next,
            None => break,
        }
    }

    for t in transactions {
        let Some(date) = t.date else { continue };
        let key = first_of_month(date);
        if let Some(bucket) = series.iter_mut().find(|b| b.month == key) {
            match t.transaction_type {
                TransactionType::Income => bucket.income = bucket.income.saturating_add(t.amount),
                TransactionType::Expense => {
                    bucket.expenses = bucket.expenses.saturating_add(t.amount)
                }
            }
        }
    }
    series
}

/// Net savings per month over the series, zero for an empty series.
pub fn average_monthly_savings(series: &[MonthlyFlow]) -> Decimal {
    if series.is_empty() {
        return Decimal::zero();
    }
    let net = sum_by(series, |m| m.income).saturating_sub(sum_by(series, |m| m.expenses));
    net.checked_div(Decimal::from(series.len())).unwrap_or(net)
}

fn first_of_month(date: NaiveDate) -> NaiveDate {
    date.with_day(1).unwrap_or(date)
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct TransactionOverview {
    pub transactions: Vec<Transaction>,
    pub totals: TransactionTotals,
    pub by_category: Vec<CategoryAmount>,
}

pub fn build_transaction_overview(transactions: Vec<Transaction>) -> TransactionOverview {
    let totals = transaction_totals(&transactions);
    let by_category = amount_by_category(&transactions);
    TransactionOverview {
        transactions,
        totals,
        by_category,
    }
}
