//! Surebet - cross-bookmaker arbitrage detection and stake allocation.
//!
//! Given the decimal odds several bookmakers quote on the same mutually
//! exclusive outcomes, the engine picks the best price per outcome, decides
//! whether backing every outcome at those prices guarantees a profit, and
//! splits a stake budget so the payout is the same whichever outcome wins.
//!
//! # Architecture
//!
//! - **`core::domain`** - Validated market snapshot, quotes, report types
//! - **`core::engine`** - Pure, stateless arbitrage evaluation
//! - **`core::presentation`** - Rounded, display-ready reports
//! - **`adapter::inbound`** - Command line and market file input
//! - **`infrastructure::config`** - Configuration loading and logging setup
//!
//! # Example
//!
//! ```
//! use rust_decimal_macros::dec;
//! use surebet::{evaluate, BookmakerQuote, Market, MatchType, OutcomeSet};
//!
//! let market = Market::try_new(
//!     OutcomeSet::from(MatchType::WinLose),
//!     vec![
//!         BookmakerQuote::new("A", vec![dec!(2.20), dec!(1.80)]),
//!         BookmakerQuote::new("B", vec![dec!(1.90), dec!(2.30)]),
//!     ],
//!     dec!(100),
//! )?;
//!
//! let report = evaluate(&market);
//! assert!(report.has_arbitrage());
//! assert_eq!(report.best_odds(), &[dec!(2.20), dec!(2.30)]);
//! # Ok::<(), surebet::InvalidMarketError>(())
//! ```

pub mod adapter;
pub mod core;
pub mod error;
pub mod infrastructure;

pub use crate::core::domain::{
    ArbitrageReport, BookmakerId, BookmakerPayoutRate, BookmakerQuote, InvalidMarketError, Market,
    MatchType, OutcomeSet, StakeAllocation,
};
pub use crate::core::engine::{evaluate, ArbitrageEngine, EngineSettings};
pub use crate::core::presentation::{DisplayReport, DisplaySettings};
