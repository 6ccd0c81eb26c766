//! Income totals and collection amounts.

use std::collections::HashMap;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::income_model::{IncomeSource, IncomeType};
use crate::utils::decimal_utils::sum_by;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct IncomeAggregates {
    /// Plain sum of source amounts; frequencies are not normalized
    pub total_amount: Decimal,
    pub count_by_type: HashMap<IncomeType, usize>,
}

impl IncomeAggregates {
    pub fn count_of(&self, income_type: IncomeType) -> usize {
        self.count_by_type.get(&income_type).copied().unwrap_or(0)
    }
}

pub fn income_aggregates(sources: &[IncomeSource]) -> IncomeAggregates {
    let mut count_by_type = HashMap::new();
    for source in sources {
        *count_by_type.entry(source.income_type).or_insert(0) += 1;
    }
    IncomeAggregates {
        total_amount: sum_by(sources, |s| s.amount),
        count_by_type,
    }
}

/// Amount recorded for a collection: the requested amount, or the source's
/// configured amount when none (or zero) was given.
pub fn resolve_collection_amount(source: &IncomeSource, requested: Option<Decimal>) -> Decimal {
    match requested {
        Some(amount) if !amount.is_zero() => amount,
        _ => source.amount,
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct IncomeOverview {
    pub sources: Vec<IncomeSource>,
    pub aggregates: IncomeAggregates,
}

pub fn build_income_overview(sources: Vec<IncomeSource>) -> IncomeOverview {
    let aggregates = income_aggregates(&sources);
    IncomeOverview {
        sources,
        aggregates,
    }
}
