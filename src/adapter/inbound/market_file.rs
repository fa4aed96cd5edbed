//! Market snapshots read from TOML or JSON files and command-line arguments.
//!
//! The file format mirrors the engine input one to one:
//!
//! ```toml
//! match_type = "win-lose"        # or: outcomes = ["Home", "Draw", "Away"]
//! stake_budget = 100
//!
//! [[bookmakers]]
//! name = "Pinnacle"
//! odds = [2.10, 1.75]            # numbers or numeric strings
//! ```
//!
//! Odds stay raw until the outcome labels are known, so an entry that is not
//! a number is reported against its bookmaker and outcome.

use std::fmt::Write as _;
use std::path::Path;

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use serde::Deserialize;
use tracing::debug;

use crate::core::domain::{
    parse_odds, BookmakerQuote, InvalidMarketError, Market, MatchType, Odds, OutcomeSet, Stake,
    MAX_DECIMAL_ODDS,
};
use crate::error::{MarketFileError, Result};
use crate::infrastructure::config::engine::EngineConfig;

/// One odds entry as written in a market file.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum RawOdds {
    /// Integer literal such as `3`.
    Integer(i64),
    /// Float literal such as `2.10`.
    Number(f64),
    /// Quoted text such as `"2.10"`.
    Text(String),
}

impl RawOdds {
    /// Parse into decimal odds; `None` when the entry is not a finite number.
    #[must_use]
    pub fn to_odds(&self) -> Option<Odds> {
        match self {
            Self::Integer(value) => Some(Decimal::from(*value)),
            // Shortest round-trip form, so 2.1 reads as 2.1 and not its binary expansion.
            Self::Number(value) if value.is_finite() => parse_odds(&value.to_string()),
            Self::Number(_) => None,
            Self::Text(raw) => parse_odds(raw),
        }
    }

    /// A finite number too large for decimal odds, such as `1e30`.
    fn exceeds_odds_range(&self) -> bool {
        let value = match self {
            Self::Integer(_) => return false,
            Self::Number(value) => *value,
            Self::Text(raw) => match raw.trim().parse::<f64>() {
                Ok(value) => value,
                Err(_) => return false,
            },
        };
        let max = MAX_DECIMAL_ODDS.to_f64().unwrap_or(f64::MAX);
        value.is_finite() && value > max
    }

    fn raw(&self) -> String {
        match self {
            Self::Integer(value) => value.to_string(),
            Self::Number(value) => value.to_string(),
            Self::Text(raw) => raw.clone(),
        }
    }
}

/// A `[[bookmakers]]` row.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct BookmakerEntry {
    /// Bookmaker name.
    pub name: String,
    /// Odds in outcome order.
    #[serde(default)]
    pub odds: Vec<RawOdds>,
}

impl BookmakerEntry {
    /// Parse a `NAME=O1,O2,...` command-line argument.
    ///
    /// # Errors
    ///
    /// Returns [`MarketFileError::BadArgument`] when the `=` separator or
    /// the odds list is missing. Individual odds are checked later, against
    /// their outcome labels.
    pub fn parse_argument(argument: &str) -> std::result::Result<Self, MarketFileError> {
        let bad = |reason: &str| MarketFileError::BadArgument {
            argument: argument.to_string(),
            reason: reason.to_string(),
        };

        let (name, odds) = argument
            .rsplit_once('=')
            .ok_or_else(|| bad("expected NAME=ODDS1,ODDS2,..."))?;
        if odds.trim().is_empty() {
            return Err(bad("no odds after '='"));
        }

        Ok(Self {
            name: name.trim().to_string(),
            odds: odds
                .split(',')
                .map(|raw| RawOdds::Text(raw.trim().to_string()))
                .collect(),
        })
    }

    fn into_quote(self, outcomes: &OutcomeSet) -> std::result::Result<BookmakerQuote, InvalidMarketError> {
        let odds = self
            .odds
            .iter()
            .enumerate()
            .map(|(index, raw)| {
                raw.to_odds().ok_or_else(|| {
                    let bookmaker = self.name.clone();
                    let outcome = outcomes
                        .label(index)
                        .map_or_else(|| format!("#{}", index + 1), str::to_string);
                    if raw.exceeds_odds_range() {
                        InvalidMarketError::OddsOutOfRange {
                            bookmaker,
                            outcome,
                            value: raw.raw(),
                            max: MAX_DECIMAL_ODDS,
                        }
                    } else {
                        InvalidMarketError::UnparsableOdds {
                            bookmaker,
                            outcome,
                            raw: raw.raw(),
                        }
                    }
                })
            })
            .collect::<std::result::Result<Vec<_>, _>>()?;

        Ok(BookmakerQuote::new(self.name, odds))
    }
}

/// Market snapshot as read from a file.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct MarketFile {
    /// Built-in outcome set.
    #[serde(default)]
    pub match_type: Option<MatchType>,
    /// Custom outcome labels.
    #[serde(default)]
    pub outcomes: Option<Vec<String>>,
    /// Total stake to distribute.
    #[serde(default)]
    pub stake_budget: Option<Stake>,
    /// Bookmaker rows.
    #[serde(default)]
    pub bookmakers: Vec<BookmakerEntry>,
}

/// Values given on the command line, layered over a market file.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MarketOverrides {
    /// Replaces the file's outcome set.
    pub match_type: Option<MatchType>,
    /// Replaces the file's outcome set with custom labels.
    pub outcomes: Vec<String>,
    /// Appended after the file's rows.
    pub bookmakers: Vec<BookmakerEntry>,
    /// Replaces the file's budget.
    pub stake_budget: Option<Stake>,
}

impl MarketFile {
    /// Parse a TOML market description.
    ///
    /// # Errors
    ///
    /// Returns [`MarketFileError::ParseToml`] on malformed input.
    pub fn parse_toml(content: &str) -> Result<Self> {
        Ok(toml::from_str(content).map_err(MarketFileError::ParseToml)?)
    }

    /// Parse a JSON market description.
    ///
    /// # Errors
    ///
    /// Returns [`MarketFileError::ParseJson`] on malformed input.
    pub fn parse_json(content: &str) -> Result<Self> {
        Ok(serde_json::from_str(content).map_err(MarketFileError::ParseJson)?)
    }

    /// Read a market file, choosing the format by extension.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, has an extension other
    /// than `.toml` or `.json`, or does not parse.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .unwrap_or_default()
            .to_ascii_lowercase();

        let parse: fn(&str) -> Result<Self> = match extension.as_str() {
            "toml" => Self::parse_toml,
            "json" => Self::parse_json,
            _ => return Err(MarketFileError::UnknownFormat { extension }.into()),
        };

        let content = std::fs::read_to_string(path).map_err(|source| MarketFileError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        debug!(path = %path.display(), format = %extension, "Reading market file");
        parse(&content)
    }

    /// Layer command-line values over this file.
    ///
    /// # Errors
    ///
    /// Returns [`MarketFileError::ConflictingOutcomes`] when the arguments
    /// name both a match type and custom outcomes.
    pub fn apply(&mut self, overrides: MarketOverrides) -> Result<()> {
        let MarketOverrides {
            match_type,
            outcomes,
            bookmakers,
            stake_budget,
        } = overrides;

        match (match_type, outcomes.is_empty()) {
            (Some(_), false) => return Err(MarketFileError::ConflictingOutcomes.into()),
            (Some(match_type), true) => {
                self.match_type = Some(match_type);
                self.outcomes = None;
            }
            (None, false) => {
                self.match_type = None;
                self.outcomes = Some(outcomes);
            }
            (None, true) => {}
        }

        self.bookmakers.extend(bookmakers);
        if stake_budget.is_some() {
            self.stake_budget = stake_budget;
        }
        Ok(())
    }

    /// Outcome set named by the file, or the configured default.
    ///
    /// # Errors
    ///
    /// Returns [`MarketFileError::ConflictingOutcomes`] when both
    /// `match_type` and `outcomes` are present.
    pub fn outcome_set(&self, engine: &EngineConfig) -> Result<OutcomeSet> {
        match (&self.match_type, &self.outcomes) {
            (Some(_), Some(_)) => Err(MarketFileError::ConflictingOutcomes.into()),
            (Some(match_type), None) => Ok(OutcomeSet::from(*match_type)),
            (None, Some(labels)) => Ok(OutcomeSet::custom(labels.iter().cloned())),
            (None, None) => Ok(OutcomeSet::from(engine.default_match_type)),
        }
    }

    /// Build a validated market, filling gaps from `engine`.
    ///
    /// # Errors
    ///
    /// Returns an error if the outcome set is ambiguous, an odds entry is
    /// not a number, or the market fails validation.
    pub fn into_market(self, engine: &EngineConfig) -> Result<Market> {
        let outcomes = self.outcome_set(engine)?;
        let stake_budget = self.stake_budget.unwrap_or(engine.default_stake_budget);

        let quotes = self
            .bookmakers
            .into_iter()
            .map(|entry| entry.into_quote(&outcomes))
            .collect::<std::result::Result<Vec<_>, _>>()?;

        Ok(Market::try_new_with_limit(
            outcomes,
            quotes,
            stake_budget,
            engine.max_stake_budget,
        )?)
    }
}

/// Default number of bookmaker rows in a new market file.
pub const DEFAULT_TEMPLATE_BOOKMAKERS: usize = 3;

/// Render a market file pre-filled with `match_type`'s default odds.
#[must_use]
pub fn render_template(match_type: MatchType, bookmakers: usize, stake_budget: Stake) -> String {
    let odds = match_type
        .default_odds()
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ");

    let mut out = String::new();
    let _ = writeln!(out, "# Market snapshot for `surebet evaluate`.");
    let _ = writeln!(
        out,
        "# Decimal odds, one per outcome: {}.",
        match_type.labels().join(", ")
    );
    let _ = writeln!(out, "match_type = \"{}\"", match_type.name());
    let _ = writeln!(out, "stake_budget = {stake_budget}");

    for n in 1..=bookmakers {
        let _ = writeln!(out);
        let _ = writeln!(out, "[[bookmakers]]");
        let _ = writeln!(out, "name = \"Bookmaker {n}\"");
        let _ = writeln!(out, "odds = [{odds}]");
    }

    out
}
