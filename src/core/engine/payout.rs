//! Per-bookmaker payout rate (the complement of the bookmaker's margin).

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::core::domain::{BookmakerPayoutRate, Market, Odds};

/// `100 / Σ(1 / odds)` over one bookmaker's full odds vector.
///
/// Returns 100 for a margin-free book and less for a book with a margin.
#[must_use]
pub fn payout_rate_percent(odds: &[Odds]) -> Decimal {
    let overround: Decimal = odds.iter().map(|o| Decimal::ONE / o).sum();
    dec!(100) / overround
}

/// Payout rate of every bookmaker in the market, in market order.
///
/// Independent of best-price selection: bookmakers that win no outcome are
/// included.
#[must_use]
pub fn payout_rates(market: &Market) -> Vec<BookmakerPayoutRate> {
    market
        .quotes()
        .iter()
        .map(|quote| BookmakerPayoutRate {
            bookmaker: quote.bookmaker().clone(),
            payout_rate_percent: payout_rate_percent(quote.odds()),
        })
        .collect()
}
