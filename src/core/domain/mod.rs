//! Core domain types for surebet.
//!
//! ## Market Types
//!
//! - [`Market`] - Validated snapshot of bookmaker quotes for one event
//! - [`BookmakerQuote`] - One bookmaker's odds for every outcome
//! - [`OutcomeSet`] - Ordered outcome labels shared by every quote
//! - [`MatchType`] - Built-in outcome sets (win-lose, 1x2)
//!
//! ## Report Types
//!
//! - [`ArbitrageReport`] - Engine output for one market
//! - [`StakeAllocation`] - Stake split when an arbitrage exists
//! - [`BookmakerPayoutRate`] - A bookmaker's own payout rate
//!
//! ## Identifier Types
//!
//! - [`BookmakerId`] - Bookmaker identifier, unique within a market

mod error;
mod id;
mod market;
mod money;
mod outcome;
mod quote;
mod report;

pub use error::InvalidMarketError;
pub use id::BookmakerId;
pub use market::Market;
pub use money::{parse_odds, Odds, Probability, Stake, MAX_DECIMAL_ODDS, MAX_STAKE_BUDGET};
pub use outcome::{MatchType, OutcomeSet, UnknownMatchType};
pub use quote::BookmakerQuote;
pub use report::{ArbitrageReport, BookmakerPayoutRate, StakeAllocation};
