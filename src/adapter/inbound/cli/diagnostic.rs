//! Miette-based error diagnostics for CLI error presentation.
//!
//! Maps crate errors to diagnostics with an error code and, where a fix is
//! obvious, a help line.

use miette::Diagnostic;
use thiserror::Error;

use crate::core::domain::InvalidMarketError;
use crate::error::{ConfigError, Error, MarketFileError};

/// Rejected market input.
#[derive(Debug, Error, Diagnostic)]
#[error("invalid market: {message}")]
#[diagnostic(code(surebet::market))]
pub struct MarketError {
    /// Human-readable error message.
    pub message: String,

    /// Market field the error refers to.
    pub field: &'static str,

    /// Suggestion for fixing the input.
    #[help]
    pub help: Option<String>,
}

impl From<&InvalidMarketError> for MarketError {
    fn from(error: &InvalidMarketError) -> Self {
        let help = match error {
            InvalidMarketError::NoQuotes => {
                Some("add a [[bookmakers]] row or pass --bookmaker NAME=ODDS1,ODDS2".to_string())
            }
            InvalidMarketError::TooFewOutcomes { .. } => {
                Some("use --match-type or give at least two --outcome labels".to_string())
            }
            InvalidMarketError::BlankOutcome { .. } | InvalidMarketError::BlankBookmaker { .. } => {
                Some("labels and bookmaker names must contain visible characters".to_string())
            }
            InvalidMarketError::DuplicateBookmaker { .. } => {
                Some("merge the rows or give each bookmaker a distinct name".to_string())
            }
            InvalidMarketError::OddsLengthMismatch { expected, .. } => {
                Some(format!("give exactly {expected} odds per bookmaker, in outcome order"))
            }
            InvalidMarketError::OddsNotAboveOne { .. } => Some(
                "decimal odds include the returned stake, so every price must exceed 1.0"
                    .to_string(),
            ),
            InvalidMarketError::UnparsableOdds { .. } => {
                Some("write odds as decimal numbers such as 2.10".to_string())
            }
            InvalidMarketError::StakeBudgetAboveLimit { .. } => {
                Some("raise [engine].max_stake_budget or lower the budget".to_string())
            }
            InvalidMarketError::OddsOutOfRange { .. }
            | InvalidMarketError::NonPositiveStakeBudget { .. } => None,
        };

        Self {
            message: error.to_string(),
            field: error.field(),
            help,
        }
    }
}

/// Configuration error.
#[derive(Debug, Error, Diagnostic)]
#[error("{message}")]
#[diagnostic(code(surebet::config))]
pub struct ConfigDiagnostic {
    /// Human-readable error message.
    pub message: String,

    /// Suggestion for fixing the configuration.
    #[help]
    pub help: Option<String>,
}

/// Market file or argument error.
#[derive(Debug, Error, Diagnostic)]
#[error("{message}")]
#[diagnostic(code(surebet::input))]
pub struct InputError {
    /// Human-readable error message.
    pub message: String,

    /// Suggestion for fixing the input.
    #[help]
    pub help: Option<String>,
}

/// Build the diagnostic shown for a crate error.
#[must_use]
pub fn for_error(error: &Error) -> miette::Report {
    match error {
        Error::Market(invalid) => miette::Report::new(MarketError::from(invalid)),
        Error::Config(config) => {
            let help = match config {
                ConfigError::Parse(_) => Some("check the TOML syntax of the file".to_string()),
                ConfigError::ReadFile(_) => {
                    Some("create one with `surebet config init`".to_string())
                }
                ConfigError::InvalidValue { .. } | ConfigError::MissingField { .. } => {
                    Some("see `surebet config init` for documented defaults".to_string())
                }
            };
            miette::Report::new(ConfigDiagnostic {
                message: config.to_string(),
                help,
            })
        }
        Error::MarketFile(input) => {
            let help = match input {
                MarketFileError::MissingQuotes | MarketFileError::UnknownFormat { .. } => {
                    Some("create a template with `surebet market init market.toml`".to_string())
                }
                MarketFileError::ConflictingOutcomes => {
                    Some("keep either match_type or outcomes".to_string())
                }
                _ => None,
            };
            miette::Report::new(InputError {
                message: input.to_string(),
                help,
            })
        }
        Error::AlreadyExists { .. } | Error::Json(_) | Error::Io(_) => {
            miette::miette!("{error}")
        }
    }
}
