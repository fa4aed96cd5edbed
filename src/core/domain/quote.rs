//! A single bookmaker's prices for every outcome of a market.

use serde::Serialize;

use super::id::BookmakerId;
use super::money::Odds;

/// One bookmaker's decimal odds, one entry per outcome in market order.
///
/// Construction does not validate; a quote is checked against its outcome
/// set when it becomes part of a [`Market`](super::Market).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BookmakerQuote {
    bookmaker: BookmakerId,
    odds: Vec<Odds>,
}

impl BookmakerQuote {
    /// Create a new quote.
    pub fn new(bookmaker: impl Into<BookmakerId>, odds: Vec<Odds>) -> Self {
        Self {
            bookmaker: bookmaker.into(),
            odds,
        }
    }

    /// Get the bookmaker identifier.
    #[must_use]
    pub const fn bookmaker(&self) -> &BookmakerId {
        &self.bookmaker
    }

    /// Get the odds vector.
    #[must_use]
    pub fn odds(&self) -> &[Odds] {
        &self.odds
    }

    /// Odds for the outcome at `index`.
    #[must_use]
    pub fn odds_at(&self, index: usize) -> Option<Odds> {
        self.odds.get(index).copied()
    }
}
