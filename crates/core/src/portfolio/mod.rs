//! Portfolio module - holdings, aggregates, allocation and top performers.

mod portfolio_metrics;
mod portfolio_model;
mod portfolio_service;
mod portfolio_traits;

pub use portfolio_metrics::{
    allocation_by_type, build_portfolio_overview, portfolio_aggregates, top_performers,
    PortfolioAggregates, PortfolioOverview, TypeAllocation,
};
pub use portfolio_model::{Holding, HoldingInput};
pub use portfolio_service::{PortfolioService, PORTFOLIO_ACTION};
pub use portfolio_traits::{PortfolioRepositoryTrait, PortfolioServiceTrait};

#[cfg(test)]
mod portfolio_tests;
