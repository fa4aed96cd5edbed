//! Outcome sets and the built-in match types that produce them.
//!
//! A market's outcome set fixes the number and order of outcomes that every
//! bookmaker quote must follow. Built-in shapes are enumerated by
//! [`MatchType`]; anything else goes through [`OutcomeSet::custom`].

use std::fmt;
use std::str::FromStr;

use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::money::Odds;

/// Built-in market shapes.
///
/// Files and command-line arguments accept the same names, parsed by
/// [`FromStr`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String")]
pub enum MatchType {
    /// Two-way market: home win or away win.
    #[default]
    #[serde(rename = "win-lose")]
    WinLose,
    /// Three-way market: win, draw or loss.
    #[serde(rename = "1x2")]
    ThreeWay,
}

impl MatchType {
    /// Every built-in match type, in display order.
    pub const ALL: [MatchType; 2] = [MatchType::WinLose, MatchType::ThreeWay];

    /// Canonical name used on the command line and in market files.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::WinLose => "win-lose",
            Self::ThreeWay => "1x2",
        }
    }

    /// Human-readable description.
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::WinLose => "Home/away, no draw",
            Self::ThreeWay => "Win/draw/loss",
        }
    }

    /// Outcome labels in quote order.
    #[must_use]
    pub const fn labels(self) -> &'static [&'static str] {
        match self {
            Self::WinLose => &["Home win", "Away win"],
            Self::ThreeWay => &["Win", "Draw", "Loss"],
        }
    }

    /// Odds pre-filled for a new bookmaker row.
    #[must_use]
    pub fn default_odds(self) -> Vec<Odds> {
        match self {
            Self::WinLose => vec![dec!(2.05), dec!(1.80)],
            Self::ThreeWay => vec![dec!(2.05), dec!(3.40), dec!(1.80)],
        }
    }

    /// Number of outcomes.
    #[must_use]
    pub const fn outcome_count(self) -> usize {
        self.labels().len()
    }
}

impl fmt::Display for MatchType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned when a match type name is not recognized.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown match type '{0}' (expected one of: win-lose, 1x2)")]
pub struct UnknownMatchType(pub String);

impl FromStr for MatchType {
    type Err = UnknownMatchType;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().replace('_', "-").as_str() {
            "win-lose" | "home-away" | "2-way" | "two-way" => Ok(Self::WinLose),
            "1x2" | "three-way" | "3-way" => Ok(Self::ThreeWay),
            _ => Err(UnknownMatchType(s.to_string())),
        }
    }
}

impl TryFrom<String> for MatchType {
    type Error = UnknownMatchType;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// Ordered outcome labels shared by every quote in a market.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct OutcomeSet {
    labels: Vec<String>,
}

impl OutcomeSet {
    /// Outcome set with arbitrary labels.
    ///
    /// Labels are validated when the set is used to build a market.
    pub fn custom<I, S>(labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            labels: labels.into_iter().map(Into::into).collect(),
        }
    }

    /// Outcome labels in quote order.
    #[must_use]
    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    /// Label of the outcome at `index`, if any.
    #[must_use]
    pub fn label(&self, index: usize) -> Option<&str> {
        self.labels.get(index).map(String::as_str)
    }

    /// Number of outcomes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    /// True when the set has no outcomes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }
}

impl From<MatchType> for OutcomeSet {
    fn from(match_type: MatchType) -> Self {
        Self::custom(match_type.labels().iter().copied())
    }
}
