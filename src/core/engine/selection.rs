//! Best-price selection across bookmakers.

use tracing::trace;

use crate::core::domain::{BookmakerId, Market, Odds};

/// Highest odds quoted for one outcome and the bookmaker quoting them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BestPrice {
    /// Bookmaker offering the price.
    pub bookmaker: BookmakerId,
    /// The price.
    pub odds: Odds,
}

/// Pick the best price for every outcome.
///
/// Outcomes are independent, so a different bookmaker may win each one.
/// When several bookmakers quote the same maximum, the one listed first in
/// the market wins.
#[must_use]
pub fn select_best_prices(market: &Market) -> Vec<BestPrice> {
    let best: Vec<BestPrice> = (0..market.outcome_count())
        .filter_map(|index| best_price_for(market, index))
        .collect();
    debug_assert_eq!(best.len(), market.outcome_count());
    best
}

fn best_price_for(market: &Market, index: usize) -> Option<BestPrice> {
    let (bookmaker, odds) = market
        .quotes()
        .iter()
        .filter_map(|quote| quote.odds_at(index).map(|odds| (quote.bookmaker(), odds)))
        // Strict comparison keeps the earliest bookmaker on ties.
        .reduce(|best, candidate| if candidate.1 > best.1 { candidate } else { best })?;

    trace!(outcome = index, bookmaker = %bookmaker, odds = %odds, "Best price selected");

    Some(BestPrice {
        bookmaker: bookmaker.clone(),
        odds,
    })
}
