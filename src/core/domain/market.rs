//! Market snapshot: the quotes of several bookmakers for one event.
//!
//! A [`Market`] is an immutable value built by the caller for a single
//! evaluation. It is only constructible through [`Market::try_new`] (or
//! [`Market::try_new_with_limit`]), so every `Market` in existence satisfies
//! the input invariants the engine relies on:
//!
//! - at least two outcomes, none with a blank label
//! - at least one quote, with unique non-blank bookmaker names
//! - every quote prices every outcome, with odds in `(1.0, MAX_DECIMAL_ODDS]`
//! - a stake budget in `(0, limit]`

use std::collections::HashSet;

use rust_decimal::Decimal;
use serde::Serialize;

use super::error::InvalidMarketError;
use super::id::BookmakerId;
use super::money::{Stake, MAX_DECIMAL_ODDS, MAX_STAKE_BUDGET};
use super::outcome::OutcomeSet;
use super::quote::BookmakerQuote;

/// A validated set of bookmaker quotes for one event's outcomes.
///
/// # Example
///
/// ```
/// use surebet::core::domain::{BookmakerQuote, Market, MatchType, OutcomeSet};
/// use rust_decimal_macros::dec;
///
/// let market = Market::try_new(
///     OutcomeSet::from(MatchType::WinLose),
///     vec![
///         BookmakerQuote::new("A", vec![dec!(2.20), dec!(1.80)]),
///         BookmakerQuote::new("B", vec![dec!(1.90), dec!(2.30)]),
///     ],
///     dec!(100),
/// )
/// .unwrap();
///
/// assert_eq!(market.outcome_count(), 2);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Market {
    outcomes: OutcomeSet,
    quotes: Vec<BookmakerQuote>,
    stake_budget: Stake,
}

impl Market {
    /// Create a market, enforcing every input invariant.
    ///
    /// The stake budget is capped at [`MAX_STAKE_BUDGET`].
    ///
    /// # Errors
    ///
    /// Returns the first [`InvalidMarketError`] found, checking outcomes,
    /// then quotes in market order, then the budget.
    pub fn try_new(
        outcomes: OutcomeSet,
        quotes: Vec<BookmakerQuote>,
        stake_budget: Stake,
    ) -> Result<Self, InvalidMarketError> {
        Self::try_new_with_limit(outcomes, quotes, stake_budget, MAX_STAKE_BUDGET)
    }

    /// Create a market with a caller-chosen stake budget ceiling.
    ///
    /// `budget_limit` is clamped to [`MAX_STAKE_BUDGET`].
    ///
    /// # Errors
    ///
    /// Same as [`Market::try_new`].
    pub fn try_new_with_limit(
        outcomes: OutcomeSet,
        quotes: Vec<BookmakerQuote>,
        stake_budget: Stake,
        budget_limit: Stake,
    ) -> Result<Self, InvalidMarketError> {
        validate_outcomes(&outcomes)?;
        validate_quotes(&outcomes, &quotes)?;
        validate_budget(stake_budget, budget_limit.min(MAX_STAKE_BUDGET))?;

        Ok(Self {
            outcomes,
            quotes,
            stake_budget,
        })
    }

    /// Get the outcome set.
    #[must_use]
    pub const fn outcomes(&self) -> &OutcomeSet {
        &self.outcomes
    }

    /// Get all quotes in market order.
    #[must_use]
    pub fn quotes(&self) -> &[BookmakerQuote] {
        &self.quotes
    }

    /// Get the stake budget.
    #[must_use]
    pub const fn stake_budget(&self) -> Stake {
        self.stake_budget
    }

    /// Get the number of outcomes.
    #[must_use]
    pub fn outcome_count(&self) -> usize {
        self.outcomes.len()
    }

    /// Get the number of bookmakers.
    #[must_use]
    pub fn bookmaker_count(&self) -> usize {
        self.quotes.len()
    }

    /// Find a quote by bookmaker identifier.
    #[must_use]
    pub fn quote(&self, bookmaker: &BookmakerId) -> Option<&BookmakerQuote> {
        self.quotes.iter().find(|q| q.bookmaker() == bookmaker)
    }
}

fn validate_outcomes(outcomes: &OutcomeSet) -> Result<(), InvalidMarketError> {
    if outcomes.len() < 2 {
        return Err(InvalidMarketError::TooFewOutcomes {
            count: outcomes.len(),
        });
    }
    if let Some(index) = outcomes.labels().iter().position(|l| l.trim().is_empty()) {
        return Err(InvalidMarketError::BlankOutcome { index });
    }
    Ok(())
}

fn validate_quotes(
    outcomes: &OutcomeSet,
    quotes: &[BookmakerQuote],
) -> Result<(), InvalidMarketError> {
    if quotes.is_empty() {
        return Err(InvalidMarketError::NoQuotes);
    }

    let mut seen = HashSet::with_capacity(quotes.len());
    for (index, quote) in quotes.iter().enumerate() {
        let bookmaker = quote.bookmaker();
        if bookmaker.is_blank() {
            return Err(InvalidMarketError::BlankBookmaker { index });
        }
        if !seen.insert(bookmaker) {
            return Err(InvalidMarketError::DuplicateBookmaker {
                bookmaker: bookmaker.to_string(),
            });
        }
        if quote.odds().len() != outcomes.len() {
            return Err(InvalidMarketError::OddsLengthMismatch {
                bookmaker: bookmaker.to_string(),
                expected: outcomes.len(),
                actual: quote.odds().len(),
            });
        }

        for (label, &value) in outcomes.labels().iter().zip(quote.odds()) {
            if value <= Decimal::ONE {
                return Err(InvalidMarketError::OddsNotAboveOne {
                    bookmaker: bookmaker.to_string(),
                    outcome: label.clone(),
                    value,
                });
            }
            if value > MAX_DECIMAL_ODDS {
                return Err(InvalidMarketError::OddsOutOfRange {
                    bookmaker: bookmaker.to_string(),
                    outcome: label.clone(),
                    value: value.to_string(),
                    max: MAX_DECIMAL_ODDS,
                });
            }
        }
    }
    Ok(())
}

fn validate_budget(budget: Stake, limit: Stake) -> Result<(), InvalidMarketError> {
    if budget <= Decimal::ZERO {
        return Err(InvalidMarketError::NonPositiveStakeBudget { budget });
    }
    if budget > limit {
        return Err(InvalidMarketError::StakeBudgetAboveLimit { budget, limit });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::domain::MatchType;
    use rust_decimal_macros::dec;

    fn two_way() -> OutcomeSet {
        OutcomeSet::from(MatchType::WinLose)
    }

    fn quote(name: &str, odds: &[Decimal]) -> BookmakerQuote {
        BookmakerQuote::new(name, odds.to_vec())
    }

    #[test]
    fn valid_market_builds() {
        let market = Market::try_new(
            two_way(),
            vec![
                quote("A", &[dec!(2.20), dec!(1.80)]),
                quote("B", &[dec!(1.90), dec!(2.30)]),
            ],
            dec!(100),
        )
        .unwrap();

        assert_eq!(market.outcome_count(), 2);
        assert_eq!(market.bookmaker_count(), 2);
        assert_eq!(market.stake_budget(), dec!(100));
        assert!(market.quote(&BookmakerId::new("B")).is_some());
        assert!(market.quote(&BookmakerId::new("C")).is_none());
    }

    #[test]
    fn rejects_empty_quotes() {
        let result = Market::try_new(two_way(), vec![], dec!(100));
        assert_eq!(result, Err(InvalidMarketError::NoQuotes));
    }

    #[test]
    fn rejects_single_outcome() {
        let result = Market::try_new(
            OutcomeSet::custom(["Only"]),
            vec![quote("A", &[dec!(2.0)])],
            dec!(100),
        );
        assert_eq!(result, Err(InvalidMarketError::TooFewOutcomes { count: 1 }));
    }

    #[test]
    fn rejects_blank_outcome_label() {
        let result = Market::try_new(
            OutcomeSet::custom(["Home", " "]),
            vec![quote("A", &[dec!(2.0), dec!(2.0)])],
            dec!(100),
        );
        assert_eq!(result, Err(InvalidMarketError::BlankOutcome { index: 1 }));
    }

    #[test]
    fn rejects_odds_of_exactly_one() {
        let result = Market::try_new(
            two_way(),
            vec![quote("A", &[dec!(1.0), dec!(1.80)])],
            dec!(100),
        );
        assert_eq!(
            result,
            Err(InvalidMarketError::OddsNotAboveOne {
                bookmaker: "A".into(),
                outcome: "Home win".into(),
                value: dec!(1.0),
            })
        );
    }

    #[test]
    fn rejects_odds_below_one() {
        let result = Market::try_new(
            two_way(),
            vec![
                quote("A", &[dec!(2.0), dec!(1.80)]),
                quote("B", &[dec!(2.0), dec!(0.9)]),
            ],
            dec!(100),
        );
        match result {
            Err(InvalidMarketError::OddsNotAboveOne {
                bookmaker,
                outcome,
                value,
            }) => {
                assert_eq!(bookmaker, "B");
                assert_eq!(outcome, "Away win");
                assert_eq!(value, dec!(0.9));
            }
            other => panic!("expected OddsNotAboveOne, got {other:?}"),
        }
    }

    #[test]
    fn rejects_odds_above_ceiling() {
        let result = Market::try_new(
            two_way(),
            vec![quote("A", &[dec!(2000000), dec!(1.80)])],
            dec!(100),
        );
        assert!(matches!(
            result,
            Err(InvalidMarketError::OddsOutOfRange { .. })
        ));
    }

    #[test]
    fn rejects_length_mismatch() {
        let result = Market::try_new(
            two_way(),
            vec![quote("A", &[dec!(2.05), dec!(3.40), dec!(1.80)])],
            dec!(100),
        );
        assert_eq!(
            result,
            Err(InvalidMarketError::OddsLengthMismatch {
                bookmaker: "A".into(),
                expected: 2,
                actual: 3,
            })
        );
    }

    #[test]
    fn rejects_duplicate_bookmaker() {
        let result = Market::try_new(
            two_way(),
            vec![
                quote("A", &[dec!(2.0), dec!(2.0)]),
                quote("A", &[dec!(2.1), dec!(1.9)]),
            ],
            dec!(100),
        );
        assert_eq!(
            result,
            Err(InvalidMarketError::DuplicateBookmaker {
                bookmaker: "A".into()
            })
        );
    }

    #[test]
    fn rejects_blank_bookmaker() {
        let result = Market::try_new(
            two_way(),
            vec![quote("", &[dec!(2.0), dec!(2.0)])],
            dec!(100),
        );
        assert_eq!(result, Err(InvalidMarketError::BlankBookmaker { index: 0 }));
    }

    #[test]
    fn rejects_non_positive_budget() {
        for budget in [dec!(0), dec!(-5)] {
            let result = Market::try_new(
                two_way(),
                vec![quote("A", &[dec!(2.0), dec!(2.0)])],
                budget,
            );
            assert_eq!(
                result,
                Err(InvalidMarketError::NonPositiveStakeBudget { budget })
            );
        }
    }

    #[test]
    fn budget_limit_is_enforced() {
        let result = Market::try_new_with_limit(
            two_way(),
            vec![quote("A", &[dec!(2.0), dec!(2.0)])],
            dec!(10000001),
            dec!(10000000),
        );
        assert_eq!(
            result,
            Err(InvalidMarketError::StakeBudgetAboveLimit {
                budget: dec!(10000001),
                limit: dec!(10000000),
            })
        );
    }

    #[test]
    fn budget_limit_is_clamped_to_hard_ceiling() {
        let result = Market::try_new_with_limit(
            two_way(),
            vec![quote("A", &[dec!(2.0), dec!(2.0)])],
            MAX_STAKE_BUDGET + dec!(1),
            Decimal::MAX,
        );
        assert!(matches!(
            result,
            Err(InvalidMarketError::StakeBudgetAboveLimit { .. })
        ));
    }
}
