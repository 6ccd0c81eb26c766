//! Income module - income sources, collections and aggregates.

mod income_metrics;
mod income_model;
mod income_service;
mod income_traits;

pub use income_metrics::{
    build_income_overview, income_aggregates, resolve_collection_amount, IncomeAggregates,
    IncomeOverview,
};
pub use income_model::{
    IncomeCollection, IncomeFrequency, IncomeSource, IncomeSourceInput, IncomeType,
    NewIncomeCollection,
};
pub use income_service::{IncomeService, INCOME_ACTION};
pub use income_traits::{IncomeRepositoryTrait, IncomeServiceTrait};

#[cfg(test)]
mod income_tests;
