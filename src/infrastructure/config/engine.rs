//! Engine and market-input configuration.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::core::domain::{MatchType, Stake, MAX_STAKE_BUDGET};
use crate::core::engine::EngineSettings;
use crate::error::ConfigError;

/// `[engine]` section.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Stake the minimum required investment is quoted against.
    pub reference_stake: Stake,
    /// Largest stake budget a market may carry.
    pub max_stake_budget: Stake,
    /// Outcome set used when a market names none.
    pub default_match_type: MatchType,
    /// Budget used when a market names none.
    pub default_stake_budget: Stake,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            reference_stake: dec!(100),
            max_stake_budget: dec!(10000000),
            default_match_type: MatchType::default(),
            default_stake_budget: dec!(100),
        }
    }
}

impl EngineConfig {
    /// Settings handed to the arbitrage engine.
    #[must_use]
    pub const fn settings(&self) -> EngineSettings {
        EngineSettings {
            reference_stake: self.reference_stake,
        }
    }

    pub(crate) fn validate(&self) -> Result<(), ConfigError> {
        if self.reference_stake <= Decimal::ZERO {
            return Err(ConfigError::InvalidValue {
                field: "reference_stake",
                reason: "must be greater than 0".to_string(),
            });
        }
        if self.max_stake_budget <= Decimal::ZERO || self.max_stake_budget > MAX_STAKE_BUDGET {
            return Err(ConfigError::InvalidValue {
                field: "max_stake_budget",
                reason: format!("must be greater than 0 and at most {MAX_STAKE_BUDGET}"),
            });
        }
        if self.default_stake_budget <= Decimal::ZERO
            || self.default_stake_budget > self.max_stake_budget
        {
            return Err(ConfigError::InvalidValue {
                field: "default_stake_budget",
                reason: format!(
                    "must be greater than 0 and at most max_stake_budget ({})",
                    self.max_stake_budget
                ),
            });
        }
        Ok(())
    }
}
