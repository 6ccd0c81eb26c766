//! Tests for portfolio metrics and the portfolio service.

use super::*;
use crate::errors::{Error, Result};
use crate::session::{Decision, SessionIdentity};
use async_trait::async_trait;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use std::sync::{Arc, Mutex};

fn holding(id: &str, holding_type: &str, value: Decimal, gain: Decimal, pct: Decimal) -> Holding {
    Holding {
        id: id.to_string(),
        name: format!("Holding {}", id),
        symbol: id.to_uppercase(),
        holding_type: holding_type.to_string(),
        total_value: value,
        gain_loss: gain,
        gain_loss_percent: pct,
        ..Default::default()
    }
}

// ==================== Aggregates ====================

#[test]
fn test_aggregates_use_reconstructed_cost_basis() {
    let holdings = vec![
        holding("a", "Stock", dec!(100), dec!(20), dec!(25)),
        holding("b", "Crypto", dec!(50), dec!(-10), dec!(-16.67)),
    ];
    let aggregates = portfolio_aggregates(&holdings);

    assert_eq!(aggregates.total_value, dec!(150));
    assert_eq!(aggregates.total_gain_loss, dec!(10));
    assert_eq!(aggregates.total_gain_loss_percent.round_dp(2), dec!(7.14));
}

#[test]
fn test_aggregates_empty_portfolio() {
    let aggregates = portfolio_aggregates(&[]);
    assert_eq!(aggregates, PortfolioAggregates::default());
}

#[test]
fn test_aggregates_non_positive_cost_basis_yields_zero_percent() {
    // Value entirely made of gains
    let holdings = vec![holding("a", "Stock", dec!(40), dec!(40), dec!(0))];
    assert_eq!(
        portfolio_aggregates(&holdings).total_gain_loss_percent,
        Decimal::ZERO
    );
}

#[test]
fn test_aggregates_with_extreme_values_do_not_overflow() {
    let holdings = vec![
        holding("a", "Stock", Decimal::MAX, Decimal::MIN, dec!(0)),
        holding("b", "Stock", Decimal::MAX, dec!(1), dec!(0)),
    ];
    let aggregates = portfolio_aggregates(&holdings);
    assert_eq!(aggregates.total_value, Decimal::MAX);
    assert!(aggregates.total_gain_loss_percent < dec!(0));

    let allocation = allocation_by_type(&holdings);
    assert_eq!(allocation[0].value, Decimal::MAX);
    assert_eq!(allocation[0].percentage, dec!(100));
}

#[test]
fn test_cost_basis_is_value_minus_gain() {
    let h = holding("a", "Stock", dec!(120), dec!(20), dec!(20));
    assert_eq!(h.cost_basis(), dec!(100));
}

// ==================== Allocation ====================

#[test]
fn test_allocation_groups_in_first_seen_order() {
    let holdings = vec![
        holding("a", "ETF", dec!(100), dec!(0), dec!(0)),
        holding("b", "Stock", dec!(30), dec!(0), dec!(0)),
        holding("c", "ETF", dec!(20), dec!(0), dec!(0)),
    ];
    let allocation = allocation_by_type(&holdings);

    assert_eq!(allocation.len(), 2);
    assert_eq!(allocation[0].holding_type, "ETF");
    assert_eq!(allocation[0].value, dec!(120));
    assert_eq!(allocation[0].percentage, dec!(80));
    assert_eq!(allocation[1].holding_type, "Stock");
    assert_eq!(allocation[1].value, dec!(30));
    assert_eq!(allocation[1].percentage, dec!(20));
}

#[test]
fn test_allocation_of_zero_value_portfolio() {
    let holdings = vec![holding("a", "Stock", dec!(0), dec!(0), dec!(0))];
    let allocation = allocation_by_type(&holdings);
    assert_eq!(allocation.len(), 1);
    assert_eq!(allocation[0].percentage, Decimal::ZERO);
}

// ==================== Top performers ====================

#[test]
fn test_top_performers_descending() {
    let holdings = vec![
        holding("a", "Stock", dec!(10), dec!(0), dec!(5)),
        holding("b", "Stock", dec!(10), dec!(0), dec!(20)),
        holding("c", "Stock", dec!(10), dec!(0), dec!(-3)),
    ];
    let top = top_performers(&holdings, 2);

    assert_eq!(top.len(), 2);
    assert_eq!(top[0].gain_loss_percent, dec!(20));
    assert_eq!(top[1].gain_loss_percent, dec!(5));
}

#[test]
fn test_top_performers_ties_keep_input_order() {
    let holdings = vec![
        holding("first", "Stock", dec!(10), dec!(0), dec!(7)),
        holding("second", "Stock", dec!(10), dec!(0), dec!(7)),
    ];
    let top = top_performers(&holdings, 3);
    assert_eq!(top[0].id, "first");
    assert_eq!(top[1].id, "second");
}

#[test]
fn test_overview_limits_top_performers_to_three() {
    let holdings: Vec<Holding> = (0..5)
        .map(|i| holding(&format!("h{}", i), "Stock", dec!(10), dec!(1), Decimal::from(i)))
        .collect();
    let overview = build_portfolio_overview(holdings);
    assert_eq!(overview.top_performers.len(), 3);
    assert_eq!(overview.top_performers[0].id, "h4");
    assert_eq!(overview.holdings.len(), 5);
}

#[test]
fn test_holding_input_normalizes_symbol() {
    let input = HoldingInput {
        name: " Apple ".to_string(),
        symbol: " aapl ".to_string(),
        holding_type: "Stock".to_string(),
        quantity: dec!(10),
        buy_price: dec!(150),
        current_price: dec!(180),
    };
    assert!(input.validate().is_ok());
    let normalized = input.normalized();
    assert_eq!(normalized.symbol, "AAPL");
    assert_eq!(normalized.name, "Apple");
}

// ============================================================================
// Service
// ============================================================================

#[derive(Default)]
struct MockPortfolioRepository {
    holdings: Mutex<Vec<Holding>>,
    writes: Mutex<usize>,
}

#[async_trait]
impl PortfolioRepositoryTrait for MockPortfolioRepository {
    async fn list(&self, _user_id: &str) -> Result<Vec<Holding>> {
        Ok(self.holdings.lock().unwrap().clone())
    }

    async fn create(&self, _user_id: &str, input: &HoldingInput) -> Result<Holding> {
        *self.writes.lock().unwrap() += 1;
        let total_value = input.quantity * input.current_price;
        let cost = input.quantity * input.buy_price;
        let created = Holding {
            id: format!("h{}", self.holdings.lock().unwrap().len() + 1),
            name: input.name.clone(),
            symbol: input.symbol.clone(),
            holding_type: input.holding_type.clone(),
            quantity: input.quantity,
            buy_price: input.buy_price,
            current_price: input.current_price,
            total_value,
            gain_loss: total_value - cost,
            gain_loss_percent: Decimal::ZERO,
        };
        self.holdings.lock().unwrap().push(created.clone());
        Ok(created)
    }

    async fn update(
        &self,
        _user_id: &str,
        holding_id: &str,
        input: &HoldingInput,
    ) -> Result<Holding> {
        *self.writes.lock().unwrap() += 1;
        let mut holdings = self.holdings.lock().unwrap();
        let existing = holdings
            .iter_mut()
            .find(|h| h.id == holding_id)
            .ok_or_else(|| Error::NotFound(holding_id.to_string()))?;
        existing.quantity = input.quantity;
        Ok(existing.clone())
    }

    async fn delete(&self, holding_id: &str) -> Result<()> {
        *self.writes.lock().unwrap() += 1;
        self.holdings.lock().unwrap().retain(|h| h.id != holding_id);
        Ok(())
    }
}

fn apple() -> HoldingInput {
    HoldingInput {
        name: "Apple".to_string(),
        symbol: "aapl".to_string(),
        holding_type: "Stock".to_string(),
        quantity: dec!(10),
        buy_price: dec!(100),
        current_price: dec!(120),
    }
}

#[tokio::test]
async fn test_add_holding_requires_login() {
    let repo = Arc::new(MockPortfolioRepository::default());
    let service = PortfolioService::new(repo.clone());

    let err = service
        .add_holding(&SessionIdentity::anonymous(), apple())
        .await
        .unwrap_err();

    assert_eq!(err.gate_decision(), Some(Decision::PromptLogin));
    assert_eq!(*repo.writes.lock().unwrap(), 0);
}

#[tokio::test]
async fn test_add_holding_refreshes_overview() {
    let repo = Arc::new(MockPortfolioRepository::default());
    let service = PortfolioService::new(repo.clone());
    let identity = SessionIdentity::new(Some("u1".to_string()), None, None);

    let overview = service.add_holding(&identity, apple()).await.unwrap();

    assert_eq!(overview.holdings.len(), 1);
    assert_eq!(overview.holdings[0].symbol, "AAPL");
    assert_eq!(overview.aggregates.total_value, dec!(1200));
    assert_eq!(overview.aggregates.total_gain_loss, dec!(200));
    assert_eq!(overview.aggregates.total_gain_loss_percent, dec!(20));
}

#[tokio::test]
async fn test_overview_without_login_is_empty() {
    let repo = Arc::new(MockPortfolioRepository::default());
    repo.holdings
        .lock()
        .unwrap()
        .push(holding("a", "Stock", dec!(10), dec!(1), dec!(1)));
    let service = PortfolioService::new(repo);

    let overview = service
        .get_overview(&SessionIdentity::anonymous())
        .await
        .unwrap();
    assert!(overview.holdings.is_empty());
}
