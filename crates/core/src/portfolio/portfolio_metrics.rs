//! Portfolio aggregates, allocation and ranking.

use num_traits::Zero;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::portfolio_model::Holding;
use crate::constants::DEFAULT_TOP_PERFORMERS;
use crate::utils::decimal_utils::{percent_of, sum_by};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioAggregates {
    pub total_value: Decimal,
    pub total_gain_loss: Decimal,
    /// Gain relative to the reconstructed cost basis, zero when the basis is not positive
    pub total_gain_loss_percent: Decimal,
}

pub fn portfolio_aggregates(holdings: &[Holding]) -> PortfolioAggregates {
    let total_value = sum_by(holdings, |h| h.total_value);
    let total_gain_loss = sum_by(holdings, |h| h.gain_loss);
    let cost_basis = sum_by(holdings, Holding::cost_basis);

    let total_gain_loss_percent = if cost_basis <= Decimal::zero() {
        Decimal::zero()
    } else {
        percent_of(total_gain_loss, cost_basis)
    };

    PortfolioAggregates {
        total_value,
        total_gain_loss,
        total_gain_loss_percent,
    }
}

/// Value held in one holding type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TypeAllocation {
    pub holding_type: String,
    pub value: Decimal,
    /// Share of the portfolio's total value (0-100)
    pub percentage: Decimal,
}

/// Sums `total_value` per holding type, in the order types first appear.
pub fn allocation_by_type(holdings: &[Holding]) -> Vec<TypeAllocation> {
    let mut allocations: Vec<TypeAllocation> = Vec::new();
    for holding in holdings {
        match allocations
            .iter_mut()
            .find(|a| a.holding_type == holding.holding_type)
        {
            Some(existing) => existing.value = existing.value.saturating_add(holding.total_value),
            None => allocations.push(TypeAllocation {
                holding_type: holding.holding_type.clone(),
                value: holding.total_value,
                percentage: Decimal::zero(),
            }),
        }
    }

    let total = sum_by(&allocations, |a| a.value);
    for allocation in &mut allocations {
        allocation.percentage = percent_of(allocation.value, total);
    }
    allocations
}

/// Holdings ranked by `gain_loss_percent`, best first, at most `n` of them.
///
/// Ties keep their input order.
pub fn top_performers(holdings: &[Holding], n: usize) -> Vec<&Holding> {
    let mut ranked: Vec<&Holding> = holdings.iter().collect();
    ranked.sort_by(|a, b| b.gain_loss_percent.cmp(&a.gain_loss_percent));
    ranked.truncate(n);
    ranked
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioOverview {
    pub holdings: Vec<Holding>,
    pub aggregates: PortfolioAggregates,
    pub allocation: Vec<TypeAllocation>,
    pub top_performers: Vec<Holding>,
}

pub fn build_portfolio_overview(holdings: Vec<Holding>) -> PortfolioOverview {
    let aggregates = portfolio_aggregates(&holdings);
    let allocation = allocation_by_type(&holdings);
    let top = top_performers(&holdings, DEFAULT_TOP_PERFORMERS)
        .into_iter()
        .cloned()
        .collect();
    PortfolioOverview {
        holdings,
        aggregates,
        allocation,
        top_performers: top,
    }
}
