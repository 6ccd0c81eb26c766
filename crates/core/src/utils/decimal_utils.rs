//! Overflow-safe decimal helpers shared by the metric modules.

use num_traits::Zero;
use rust_decimal::Decimal;

use crate::constants::ONE_HUNDRED;

/// `part / whole` as a percentage, or zero when `whole` is not positive.
///
/// A ratio too large for `Decimal` saturates at `Decimal::MAX` (or `MIN` for a
/// negative `part`) instead of panicking.
pub fn percent_of(part: Decimal, whole: Decimal) -> Decimal {
    if whole <= Decimal::zero() {
        return Decimal::zero();
    }
    part.checked_div(whole)
        .and_then(|ratio| ratio.checked_mul(ONE_HUNDRED))
        .unwrap_or_else(|| saturated(part.is_sign_negative()))
}

/// Sums a projected decimal field over a collection, saturating on overflow.
pub fn sum_by<T>(items: &[T], field: impl Fn(&T) -> Decimal) -> Decimal {
    items
        .iter()
        .map(field)
        .fold(Decimal::zero(), Decimal::saturating_add)
}

/// Arithmetic mean of a projected field, zero for an empty collection.
pub fn mean_by<T>(items: &[T], field: impl Fn(&T) -> Decimal) -> Decimal {
    if items.is_empty() {
        return Decimal::zero();
    }
    let sum = sum_by(items, field);
    sum.checked_div(Decimal::from(items.len())).unwrap_or(sum)
}

fn saturated(negative: bool) -> Decimal {
    if negative {
        Decimal::MIN
    } else {
        Decimal::MAX
    }
}
