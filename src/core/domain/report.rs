//! Engine output for one market evaluation.

use rust_decimal::Decimal;
use serde::Serialize;

use super::id::BookmakerId;
use super::money::{Odds, Probability, Stake};

/// How a stake budget is split across outcomes when an arbitrage exists.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StakeAllocation {
    pub(crate) stakes: Vec<Stake>,
    pub(crate) payout: Stake,
    pub(crate) expected_profit: Stake,
    pub(crate) below_minimum_stake: bool,
}

impl StakeAllocation {
    /// Stake per outcome, in market order.
    #[must_use]
    pub fn stakes(&self) -> &[Stake] {
        &self.stakes
    }

    /// Amount returned whichever outcome wins.
    #[must_use]
    pub const fn payout(&self) -> Stake {
        self.payout
    }

    /// `payout - budget`.
    #[must_use]
    pub const fn expected_profit(&self) -> Stake {
        self.expected_profit
    }

    /// True when the budget is below the minimum required stake.
    ///
    /// Advisory only; the allocation is valid at any budget.
    #[must_use]
    pub const fn below_minimum_stake(&self) -> bool {
        self.below_minimum_stake
    }
}

/// A bookmaker's payout rate over its own full odds vector.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BookmakerPayoutRate {
    pub(crate) bookmaker: BookmakerId,
    pub(crate) payout_rate_percent: Decimal,
}

impl BookmakerPayoutRate {
    /// Get the bookmaker identifier.
    #[must_use]
    pub const fn bookmaker(&self) -> &BookmakerId {
        &self.bookmaker
    }

    /// `100 / Σ(1 / odds)`; 100 means a margin-free book.
    #[must_use]
    pub const fn payout_rate_percent(&self) -> Decimal {
        self.payout_rate_percent
    }
}

/// Result of evaluating one market snapshot.
///
/// All values are kept at full decimal precision; rounding for display is
/// done by [`DisplayReport`](crate::core::presentation::DisplayReport).
/// Vectors indexed by outcome follow the market's outcome order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ArbitrageReport {
    pub(crate) outcomes: Vec<String>,
    pub(crate) best_odds: Vec<Odds>,
    pub(crate) best_bookmakers: Vec<BookmakerId>,
    pub(crate) implied_probabilities: Vec<Probability>,
    pub(crate) total_implied_probability: Probability,
    pub(crate) has_arbitrage: bool,
    pub(crate) profit_margin_percent: Decimal,
    pub(crate) reference_stake: Stake,
    pub(crate) minimum_required_stake: Option<Stake>,
    pub(crate) stake_budget: Stake,
    pub(crate) allocation: Option<StakeAllocation>,
    pub(crate) payout_rates: Vec<BookmakerPayoutRate>,
}

impl ArbitrageReport {
    /// Outcome labels.
    #[must_use]
    pub fn outcomes(&self) -> &[String] {
        &self.outcomes
    }

    /// Best available odds per outcome.
    #[must_use]
    pub fn best_odds(&self) -> &[Odds] {
        &self.best_odds
    }

    /// Bookmaker offering the best odds per outcome.
    #[must_use]
    pub fn best_bookmakers(&self) -> &[BookmakerId] {
        &self.best_bookmakers
    }

    /// `1 / best_odds[i]` per outcome.
    #[must_use]
    pub fn implied_probabilities(&self) -> &[Probability] {
        &self.implied_probabilities
    }

    /// Sum of the implied probabilities.
    #[must_use]
    pub const fn total_implied_probability(&self) -> Probability {
        self.total_implied_probability
    }

    /// True iff the total implied probability is strictly below 1.
    #[must_use]
    pub const fn has_arbitrage(&self) -> bool {
        self.has_arbitrage
    }

    /// `(1 - total) × 100`; negative for a book with a margin.
    #[must_use]
    pub const fn profit_margin_percent(&self) -> Decimal {
        self.profit_margin_percent
    }

    /// Reference stake the minimum is expressed against.
    #[must_use]
    pub const fn reference_stake(&self) -> Stake {
        self.reference_stake
    }

    /// `reference_stake / (1 - total)`, only when an arbitrage exists.
    #[must_use]
    pub const fn minimum_required_stake(&self) -> Option<Stake> {
        self.minimum_required_stake
    }

    /// Budget the allocation was sized for.
    #[must_use]
    pub const fn stake_budget(&self) -> Stake {
        self.stake_budget
    }

    /// Stake allocation, only when an arbitrage exists.
    #[must_use]
    pub const fn allocation(&self) -> Option<&StakeAllocation> {
        self.allocation.as_ref()
    }

    /// Stake per outcome; empty when there is no arbitrage.
    #[must_use]
    pub fn stakes(&self) -> &[Stake] {
        match &self.allocation {
            Some(allocation) => allocation.stakes(),
            None => &[],
        }
    }

    /// Guaranteed profit, only when an arbitrage exists.
    #[must_use]
    pub fn expected_profit(&self) -> Option<Stake> {
        self.allocation.as_ref().map(StakeAllocation::expected_profit)
    }

    /// Guaranteed payout, only when an arbitrage exists.
    #[must_use]
    pub fn payout(&self) -> Option<Stake> {
        self.allocation.as_ref().map(StakeAllocation::payout)
    }

    /// True when an arbitrage exists but the budget is below the minimum.
    #[must_use]
    pub fn is_below_minimum_stake(&self) -> bool {
        self.allocation
            .as_ref()
            .is_some_and(StakeAllocation::below_minimum_stake)
    }

    /// Payout rate of every bookmaker, in market order.
    #[must_use]
    pub fn payout_rates(&self) -> &[BookmakerPayoutRate] {
        &self.payout_rates
    }

    /// Payout rate of one bookmaker.
    #[must_use]
    pub fn payout_rate(&self, bookmaker: &BookmakerId) -> Option<Decimal> {
        self.payout_rates
            .iter()
            .find(|r| &r.bookmaker == bookmaker)
            .map(BookmakerPayoutRate::payout_rate_percent)
    }
}
