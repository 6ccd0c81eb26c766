//! Property-based integration tests for the metrics engine and action gate.
//!
//! These tests verify that universal properties hold across all valid inputs,
//! using the `proptest` crate for random test case generation.

use finsight_core::budgets::{budget_status, budget_utilization, BudgetStatus};
use finsight_core::debts::debt_payoff_progress;
use finsight_core::portfolio::{portfolio_aggregates, top_performers, Holding};
use finsight_core::{evaluate, ActionKind, Decision, SessionState};
use proptest::prelude::*;
use rust_decimal::Decimal;

// =============================================================================
// Generators
// =============================================================================

/// Generates a money amount with two decimal places, possibly negative.
fn arb_amount() -> impl Strategy<Value = Decimal> {
    (-100_000_000i64..100_000_000i64).prop_map(|cents| Decimal::new(cents, 2))
}

/// Generates any decimal, including values near `Decimal::MAX` and tiny scales.
fn arb_extreme_decimal() -> impl Strategy<Value = Decimal> {
    (any::<i64>(), any::<i64>(), 0u32..=28).prop_map(|(hi, lo, scale)| {
        let mantissa = (i128::from(hi) << 32) ^ i128::from(lo);
        Decimal::try_from_i128_with_scale(mantissa, scale).unwrap_or(Decimal::MAX)
    })
}

fn arb_action_kind() -> impl Strategy<Value = ActionKind> {
    prop_oneof![
        Just(ActionKind::RequiresLogin),
        Just(ActionKind::RequiresAccount),
        Just(ActionKind::RequiresLoginAndAccount),
    ]
}

fn arb_holding() -> impl Strategy<Value = Holding> {
    ("[a-z]{3,8}", arb_amount(), arb_amount(), -10_000i64..10_000i64).prop_map(
        |(symbol, value, gain, pct)| Holding {
            id: symbol.clone(),
            name: symbol.clone(),
            symbol,
            holding_type: "Stock".to_string(),
            total_value: value,
            gain_loss: gain,
            gain_loss_percent: Decimal::new(pct, 2),
            ..Default::default()
        },
    )
}

// =============================================================================
// Property Tests
// =============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// Extreme amounts never panic and clamped metrics stay clamped.
    #[test]
    fn prop_extreme_amounts_do_not_panic(
        a in arb_extreme_decimal(),
        b in arb_extreme_decimal(),
    ) {
        let _ = budget_status(budget_utilization(a, b));
        let progress = debt_payoff_progress(a, b);
        prop_assert!(progress >= Decimal::ZERO && progress <= Decimal::ONE_HUNDRED);
    }

    /// Utilization is zero whenever the limit is not positive.
    #[test]
    fn prop_utilization_zero_for_non_positive_limit(
        spent in arb_amount(),
        limit in arb_amount(),
    ) {
        let utilization = budget_utilization(spent, limit);
        if limit <= Decimal::ZERO {
            prop_assert_eq!(utilization, Decimal::ZERO);
        }
    }

    /// Status thresholds partition utilization at 80 and 100.
    #[test]
    fn prop_status_matches_thresholds(utilization in arb_amount()) {
        let expected = if utilization >= Decimal::ONE_HUNDRED {
            BudgetStatus::Over
        } else if utilization >= Decimal::from(80) {
            BudgetStatus::Warning
        } else {
            BudgetStatus::Good
        };
        prop_assert_eq!(budget_status(utilization), expected);
    }

    /// Payoff progress always lies within [0, 100].
    #[test]
    fn prop_payoff_progress_is_bounded(
        remaining in arb_amount(),
        total in arb_amount(),
    ) {
        let progress = debt_payoff_progress(remaining, total);
        prop_assert!(progress >= Decimal::ZERO);
        prop_assert!(progress <= Decimal::ONE_HUNDRED);
    }

    /// Top performers are sorted descending and never exceed `n`.
    #[test]
    fn prop_top_performers_sorted_and_truncated(
        holdings in proptest::collection::vec(arb_holding(), 0..20),
        n in 0usize..6,
    ) {
        let top = top_performers(&holdings, n);

        prop_assert!(top.len() <= n);
        prop_assert_eq!(top.len(), n.min(holdings.len()));
        for pair in top.windows(2) {
            prop_assert!(pair[0].gain_loss_percent >= pair[1].gain_loss_percent);
        }
    }

    /// Aggregate value and gain are plain sums of the holdings.
    #[test]
    fn prop_aggregates_are_sums(
        holdings in proptest::collection::vec(arb_holding(), 0..20),
    ) {
        let aggregates = portfolio_aggregates(&holdings);
        let value: Decimal = holdings.iter().map(|h| h.total_value).sum();
        let gain: Decimal = holdings.iter().map(|h| h.gain_loss).sum();

        prop_assert_eq!(aggregates.total_value, value);
        prop_assert_eq!(aggregates.total_gain_loss, gain);
        if value - gain <= Decimal::ZERO {
            prop_assert_eq!(aggregates.total_gain_loss_percent, Decimal::ZERO);
        }
    }

    /// The gate is a pure function of its inputs and checks login first.
    #[test]
    fn prop_gate_is_idempotent(
        kind in arb_action_kind(),
        logged_in in any::<bool>(),
        has_account in any::<bool>(),
    ) {
        let session = SessionState::new(logged_in, has_account);
        let first = evaluate(kind, &session);
        prop_assert_eq!(first, evaluate(kind, &session));

        if kind.requires_login() && !logged_in {
            prop_assert_eq!(first, Decision::PromptLogin);
        }
        if logged_in && has_account {
            prop_assert_eq!(first, Decision::Proceed);
        }
    }
}
