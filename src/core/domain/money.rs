//! Numeric types for odds, probabilities and stakes.

use std::str::FromStr;

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// Decimal (European) odds. A fair coin flip is quoted at 2.00.
pub type Odds = Decimal;

/// Implied probability, `1 / odds`.
pub type Probability = Decimal;

/// Monetary amount staked or paid out.
pub type Stake = Decimal;

/// Largest odds value a market may quote.
///
/// Keeps `stake × odds` and `budget / total_probability` inside the range
/// of `Decimal` for every budget the market accepts.
pub const MAX_DECIMAL_ODDS: Decimal = dec!(1000000);

/// Hard ceiling on a market's stake budget.
pub const MAX_STAKE_BUDGET: Decimal = dec!(1000000000000);

/// Parse a textual odds entry.
///
/// Accepts plain decimals (`"2.10"`) and scientific notation (`"2.1e0"`),
/// surrounding whitespace ignored. Returns `None` for anything else; an
/// unparsable entry is never treated as zero.
#[must_use]
pub fn parse_odds(raw: &str) -> Option<Odds> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    Decimal::from_str(trimmed)
        .or_else(|_| Decimal::from_scientific(trimmed))
        .ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn odds_and_stake_are_decimal() {
        let odds: Odds = dec!(2.10);
        let stake: Stake = dec!(100);

        assert_eq!(odds * stake, dec!(210.00));
    }

    #[test]
    fn parse_odds_accepts_plain_and_padded_decimals() {
        assert_eq!(parse_odds("2.10"), Some(dec!(2.10)));
        assert_eq!(parse_odds("  1.75 "), Some(dec!(1.75)));
        assert_eq!(parse_odds("3"), Some(dec!(3)));
    }

    #[test]
    fn parse_odds_accepts_scientific_notation() {
        assert_eq!(parse_odds("2.5e0"), Some(dec!(2.5)));
    }

    #[test]
    fn parse_odds_rejects_garbage() {
        assert_eq!(parse_odds(""), None);
        assert_eq!(parse_odds("   "), None);
        assert_eq!(parse_odds("abc"), None);
        assert_eq!(parse_odds("2,10"), None);
        assert_eq!(parse_odds("NaN"), None);
    }
}
