//! Arbitrage detection and stake allocation.
//!
//! [`ArbitrageEngine::evaluate`] is a pure function of a [`Market`]: it
//! retains nothing between calls, performs no I/O and returns the same
//! report for the same market. The work is split by concern:
//!
//! - [`selection`] - best price per outcome, first bookmaker wins ties
//! - [`probability`] - implied probabilities, margin, minimum stake
//! - [`allocation`] - proportional, equal-payout stake split
//! - [`payout`] - each bookmaker's own payout rate

pub mod allocation;
pub mod payout;
pub mod probability;
pub mod selection;

use rust_decimal_macros::dec;
use serde::Deserialize;
use tracing::debug;

use crate::core::domain::{
    ArbitrageReport, BookmakerQuote, InvalidMarketError, Market, OutcomeSet, Stake,
};

use self::allocation::allocate_stakes;
use self::payout::payout_rates;
use self::probability::{
    has_arbitrage, implied_probability, minimum_required_stake, profit_margin_percent,
    total_implied_probability,
};
use self::selection::select_best_prices;

/// Parameters of the engine's arithmetic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct EngineSettings {
    /// Stake the minimum required investment is expressed against.
    #[serde(default = "default_reference_stake")]
    pub reference_stake: Stake,
}

fn default_reference_stake() -> Stake {
    dec!(100)
}

impl Default for EngineSettings {
    fn default() -> Self {
        Self {
            reference_stake: default_reference_stake(),
        }
    }
}

/// Stateless arbitrage evaluator.
///
/// Cheap to copy and safe to share between threads; every call is
/// independent.
#[derive(Debug, Clone, Copy, Default)]
pub struct ArbitrageEngine {
    settings: EngineSettings,
}

impl ArbitrageEngine {
    /// Create an engine with the given settings.
    #[must_use]
    pub const fn new(settings: EngineSettings) -> Self {
        Self { settings }
    }

    /// Get the engine settings.
    #[must_use]
    pub const fn settings(&self) -> &EngineSettings {
        &self.settings
    }

    /// Evaluate a validated market.
    #[must_use]
    pub fn evaluate(&self, market: &Market) -> ArbitrageReport {
        let best = select_best_prices(market);
        let implied: Vec<_> = best.iter().map(|b| implied_probability(b.odds)).collect();
        let total = total_implied_probability(&implied);
        let arbitrage = has_arbitrage(total);
        let minimum = minimum_required_stake(self.settings.reference_stake, total);
        let budget = market.stake_budget();

        let allocation =
            arbitrage.then(|| allocate_stakes(budget, &implied, total, minimum));

        debug!(
            outcomes = market.outcome_count(),
            bookmakers = market.bookmaker_count(),
            total_implied_probability = %total,
            has_arbitrage = arbitrage,
            "Market evaluated"
        );

        let (best_bookmakers, best_odds) = best.into_iter().map(|b| (b.bookmaker, b.odds)).unzip();

        ArbitrageReport {
            outcomes: market.outcomes().labels().to_vec(),
            best_odds,
            best_bookmakers,
            implied_probabilities: implied,
            total_implied_probability: total,
            has_arbitrage: arbitrage,
            profit_margin_percent: profit_margin_percent(total),
            reference_stake: self.settings.reference_stake,
            minimum_required_stake: minimum,
            stake_budget: budget,
            allocation,
            payout_rates: payout_rates(market),
        }
    }

    /// Validate raw quotes into a market and evaluate it.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidMarketError`] if the input violates any market
    /// invariant. No partial report is produced.
    pub fn evaluate_quotes(
        &self,
        outcomes: OutcomeSet,
        quotes: Vec<BookmakerQuote>,
        stake_budget: Stake,
    ) -> Result<ArbitrageReport, InvalidMarketError> {
        let market = Market::try_new(outcomes, quotes, stake_budget)?;
        Ok(self.evaluate(&market))
    }
}

/// Evaluate a market with default engine settings.
#[must_use]
pub fn evaluate(market: &Market) -> ArbitrageReport {
    ArbitrageEngine::default().evaluate(market)
}
