//! Rounded, display-ready view of an [`ArbitrageReport`].
//!
//! The engine works at full decimal precision. This module rounds for
//! presentation only and never feeds rounded values back into arithmetic.

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

use crate::core::domain::{ArbitrageReport, BookmakerId};

/// Largest supported display precision.
pub const MAX_PRECISION: u32 = 10;

/// Presentation parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplaySettings {
    /// Decimal places shown for money, odds and percentages.
    #[serde(default = "default_precision")]
    pub precision: u32,

    /// Move rounding residue onto the largest stakes so displayed stakes sum
    /// exactly to the displayed budget.
    #[serde(default = "default_reconcile_stakes")]
    pub reconcile_stakes: bool,
}

fn default_precision() -> u32 {
    2
}

fn default_reconcile_stakes() -> bool {
    true
}

impl Default for DisplaySettings {
    fn default() -> Self {
        Self {
            precision: default_precision(),
            reconcile_stakes: default_reconcile_stakes(),
        }
    }
}

impl DisplaySettings {
    /// Round a value to the configured precision, halves away from zero.
    #[must_use]
    pub fn round(&self, value: Decimal) -> Decimal {
        value.round_dp_with_strategy(self.precision, RoundingStrategy::MidpointAwayFromZero)
    }

    /// Smallest displayable unit, `10^-precision`.
    #[must_use]
    pub fn unit(&self) -> Decimal {
        Decimal::new(1, self.precision)
    }
}

/// One outcome row of a display report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OutcomeRow {
    /// Outcome label.
    pub outcome: String,
    /// Bookmaker with the best price.
    pub bookmaker: BookmakerId,
    /// Best price, rounded.
    pub odds: Decimal,
    /// Implied probability in percent, rounded.
    pub implied_probability_percent: Decimal,
    /// Stake, rounded; absent without arbitrage.
    pub stake: Option<Decimal>,
    /// `stake × odds` from the unrounded stake; absent without arbitrage.
    pub payout: Option<Decimal>,
}

/// A bookmaker's rounded payout rate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PayoutRateRow {
    /// Bookmaker identifier.
    pub bookmaker: BookmakerId,
    /// Payout rate in percent, rounded.
    pub payout_rate_percent: Decimal,
}

/// Rounded view of a report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DisplayReport {
    /// Decimal places used.
    pub precision: u32,
    /// Copied from the report.
    pub has_arbitrage: bool,
    /// Per-outcome rows in market order.
    pub outcomes: Vec<OutcomeRow>,
    /// Total implied probability in percent.
    pub total_implied_probability_percent: Decimal,
    /// Profit margin in percent.
    pub profit_margin_percent: Decimal,
    /// Stake budget.
    pub stake_budget: Decimal,
    /// Minimum required stake, when an arbitrage exists.
    pub minimum_required_stake: Option<Decimal>,
    /// Guaranteed payout, when an arbitrage exists.
    pub payout: Option<Decimal>,
    /// Guaranteed profit, when an arbitrage exists.
    pub expected_profit: Option<Decimal>,
    /// Budget is below the minimum required stake.
    pub below_minimum_stake: bool,
    /// Payout rate per bookmaker in market order.
    pub payout_rates: Vec<PayoutRateRow>,
}

impl DisplayReport {
    /// Round a report for display.
    #[must_use]
    pub fn new(report: &ArbitrageReport, settings: &DisplaySettings) -> Self {
        let hundred = Decimal::ONE_HUNDRED;
        let stakes = round_stakes(report.stakes(), report.stake_budget(), settings);

        let outcomes = report
            .outcomes()
            .iter()
            .enumerate()
            .map(|(i, outcome)| {
                let odds = report.best_odds()[i];
                let stake = stakes.get(i).copied();
                let payout = report.stakes().get(i).map(|s| settings.round(s * odds));
                OutcomeRow {
                    outcome: outcome.clone(),
                    bookmaker: report.best_bookmakers()[i].clone(),
                    odds: settings.round(odds),
                    implied_probability_percent: settings
                        .round(report.implied_probabilities()[i] * hundred),
                    stake,
                    payout,
                }
            })
            .collect();

        Self {
            precision: settings.precision,
            has_arbitrage: report.has_arbitrage(),
            outcomes,
            total_implied_probability_percent: settings
                .round(report.total_implied_probability() * hundred),
            profit_margin_percent: settings.round(report.profit_margin_percent()),
            stake_budget: settings.round(report.stake_budget()),
            minimum_required_stake: report.minimum_required_stake().map(|m| settings.round(m)),
            payout: report.payout().map(|p| settings.round(p)),
            expected_profit: report.expected_profit().map(|p| settings.round(p)),
            below_minimum_stake: report.is_below_minimum_stake(),
            payout_rates: report
                .payout_rates()
                .iter()
                .map(|rate| PayoutRateRow {
                    bookmaker: rate.bookmaker().clone(),
                    payout_rate_percent: settings.round(rate.payout_rate_percent()),
                })
                .collect(),
        }
    }

    /// Sum of the displayed stakes.
    #[must_use]
    pub fn stake_total(&self) -> Decimal {
        self.outcomes.iter().filter_map(|row| row.stake).sum()
    }
}

/// Round every stake; with reconciliation the residue `round(budget) - Σ rounded`
/// goes to the largest stakes first, never pushing one below zero.
fn round_stakes(stakes: &[Decimal], budget: Decimal, settings: &DisplaySettings) -> Vec<Decimal> {
    let mut rounded: Vec<Decimal> = stakes.iter().map(|&s| settings.round(s)).collect();
    if !settings.reconcile_stakes || rounded.is_empty() {
        return rounded;
    }

    let mut residue = settings.round(budget) - rounded.iter().sum::<Decimal>();
    let mut order: Vec<usize> = (0..stakes.len()).collect();
    order.sort_by(|&a, &b| stakes[b].cmp(&stakes[a]));

    for i in order {
        if residue.is_zero() {
            break;
        }
        let adjusted = (rounded[i] + residue).max(Decimal::ZERO);
        residue -= adjusted - rounded[i];
        rounded[i] = adjusted;
    }

    rounded
}
