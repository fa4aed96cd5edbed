//! Implied probability, margin and minimum-stake arithmetic.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::core::domain::{Odds, Probability, Stake};

/// Decimal places the total implied probability is normalized to.
///
/// `1 / odds` is rounded at the 28th significant digit, so an exactly fair
/// book such as `[3, 3, 3]` sums to `0.9999…9`. Rounding the total well
/// above that noise floor reports it as exactly 1.
pub const TOTAL_PROBABILITY_SCALE: u32 = 26;

/// `1 / odds`.
#[must_use]
pub fn implied_probability(odds: Odds) -> Probability {
    Decimal::ONE / odds
}

/// Sum of implied probabilities, normalized to [`TOTAL_PROBABILITY_SCALE`].
#[must_use]
pub fn total_implied_probability(probabilities: &[Probability]) -> Probability {
    probabilities
        .iter()
        .sum::<Decimal>()
        .round_dp(TOTAL_PROBABILITY_SCALE)
}

/// True iff a stake split can guarantee a positive return.
///
/// Equality with 1 is a zero-profit book and does not count.
#[must_use]
pub fn has_arbitrage(total: Probability) -> bool {
    total < Decimal::ONE
}

/// `(1 - total) × 100`, at full precision.
#[must_use]
pub fn profit_margin_percent(total: Probability) -> Decimal {
    (Decimal::ONE - total) * dec!(100)
}

/// `reference_stake / (1 - total)`.
///
/// `None` when there is no arbitrage; the division is never attempted on a
/// non-positive denominator. Saturates at `Decimal::MAX` when the margin is
/// too thin for the quotient to be representable.
#[must_use]
pub fn minimum_required_stake(reference_stake: Stake, total: Probability) -> Option<Stake> {
    if !has_arbitrage(total) {
        return None;
    }
    let margin = Decimal::ONE - total;
    Some(
        reference_stake
            .checked_div(margin)
            .unwrap_or(Decimal::MAX),
    )
}
