//! Market validation errors.
//!
//! A [`Market`](super::Market) is only constructible through validating
//! constructors; every rejected input maps to one [`InvalidMarketError`]
//! variant naming the offending bookmaker, outcome and value.
//!
//! # Examples
//!
//! ```
//! use surebet::core::domain::{BookmakerQuote, InvalidMarketError, Market, MatchType, OutcomeSet};
//! use rust_decimal_macros::dec;
//!
//! let result = Market::try_new(
//!     OutcomeSet::from(MatchType::WinLose),
//!     vec![BookmakerQuote::new("stake", vec![dec!(1.00), dec!(1.80)])],
//!     dec!(100),
//! );
//!
//! assert!(matches!(result, Err(InvalidMarketError::OddsNotAboveOne { .. })));
//! ```

use rust_decimal::Decimal;
use thiserror::Error;

/// Errors raised when a market snapshot violates an input invariant.
///
/// This is the only error the arbitrage engine produces. It is never
/// retried and never replaced by a default value.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InvalidMarketError {
    /// A market needs at least one bookmaker quote.
    #[error("market has no bookmaker quotes")]
    NoQuotes,

    /// A market needs at least two outcomes.
    #[error("market needs at least 2 outcomes, got {count}")]
    TooFewOutcomes {
        /// Number of outcomes supplied.
        count: usize,
    },

    /// Outcome labels must not be blank.
    #[error("outcome #{index} has a blank label")]
    BlankOutcome {
        /// Zero-based outcome index.
        index: usize,
    },

    /// Bookmaker identifiers must not be blank.
    #[error("bookmaker #{index} has a blank name")]
    BlankBookmaker {
        /// Zero-based position of the quote in the market.
        index: usize,
    },

    /// Bookmaker identifiers must be unique within a market.
    #[error("bookmaker '{bookmaker}' is quoted more than once")]
    DuplicateBookmaker {
        /// The repeated identifier.
        bookmaker: String,
    },

    /// Every quote must price every outcome.
    #[error("bookmaker '{bookmaker}' quotes {actual} odds, market has {expected} outcomes")]
    OddsLengthMismatch {
        /// Offending bookmaker.
        bookmaker: String,
        /// Number of outcomes in the market.
        expected: usize,
        /// Number of odds the bookmaker supplied.
        actual: usize,
    },

    /// Decimal odds must be strictly greater than 1.0.
    #[error("bookmaker '{bookmaker}' odds for '{outcome}' must be greater than 1.0, got {value}")]
    OddsNotAboveOne {
        /// Offending bookmaker.
        bookmaker: String,
        /// Outcome label.
        outcome: String,
        /// The rejected odds value.
        value: Decimal,
    },

    /// Odds above the supported ceiling.
    #[error("bookmaker '{bookmaker}' odds for '{outcome}' exceed {max}, got {value}")]
    OddsOutOfRange {
        /// Offending bookmaker.
        bookmaker: String,
        /// Outcome label.
        outcome: String,
        /// The rejected odds value as written.
        value: String,
        /// Largest accepted odds value.
        max: Decimal,
    },

    /// An odds entry that is not a number.
    #[error("bookmaker '{bookmaker}' odds for '{outcome}' is not a number: '{raw}'")]
    UnparsableOdds {
        /// Offending bookmaker.
        bookmaker: String,
        /// Outcome label.
        outcome: String,
        /// The raw entry as supplied.
        raw: String,
    },

    /// The stake budget must be positive.
    #[error("stake budget must be positive, got {budget}")]
    NonPositiveStakeBudget {
        /// The rejected budget.
        budget: Decimal,
    },

    /// The stake budget exceeds the accepted ceiling.
    #[error("stake budget {budget} exceeds the limit of {limit}")]
    StakeBudgetAboveLimit {
        /// The rejected budget.
        budget: Decimal,
        /// The ceiling in force.
        limit: Decimal,
    },
}

impl InvalidMarketError {
    /// Name of the market field the error refers to.
    #[must_use]
    pub const fn field(&self) -> &'static str {
        match self {
            Self::NoQuotes
            | Self::BlankBookmaker { .. }
            | Self::DuplicateBookmaker { .. } => "bookmakers",
            Self::TooFewOutcomes { .. } | Self::BlankOutcome { .. } => "outcomes",
            Self::OddsLengthMismatch { .. }
            | Self::OddsNotAboveOne { .. }
            | Self::OddsOutOfRange { .. }
            | Self::UnparsableOdds { .. } => "odds",
            Self::NonPositiveStakeBudget { .. } | Self::StakeBudgetAboveLimit { .. } => {
                "stake_budget"
            }
        }
    }
}
