//! Handler for the `evaluate` command.

use rust_decimal::Decimal;
use serde_json::json;
use tabled::{Table, Tabled};
use tracing::{debug, info};

use crate::adapter::inbound::cli::command::EvaluateArgs;
use crate::adapter::inbound::cli::output;
use crate::adapter::inbound::market_file::{BookmakerEntry, MarketFile, MarketOverrides};
use crate::core::domain::Market;
use crate::core::engine::{ArbitrageEngine, EngineSettings};
use crate::core::presentation::{DisplayReport, DisplaySettings};
use crate::error::{Error, MarketFileError, Result};
use crate::infrastructure::config::settings::Config;

#[derive(Tabled)]
struct OutcomeTableRow {
    #[tabled(rename = "Outcome")]
    outcome: String,
    #[tabled(rename = "Bookmaker")]
    bookmaker: String,
    #[tabled(rename = "Odds")]
    odds: String,
    #[tabled(rename = "Implied %")]
    implied: String,
    #[tabled(rename = "Stake")]
    stake: String,
    #[tabled(rename = "Payout")]
    payout: String,
}

#[derive(Tabled)]
struct PayoutRateTableRow {
    #[tabled(rename = "Bookmaker")]
    bookmaker: String,
    #[tabled(rename = "Payout rate %")]
    payout_rate: String,
}

/// Format with exactly `precision` decimal places.
fn fixed(value: Decimal, precision: u32) -> String {
    format!("{:.*}", precision as usize, value)
}

fn fixed_or_dash(value: Option<Decimal>, precision: u32) -> String {
    value.map_or_else(|| "-".to_string(), |v| fixed(v, precision))
}

/// Build the market described by a file and/or arguments.
///
/// # Errors
///
/// Returns an error if no quotes are given, the file cannot be read or
/// parsed, an argument is malformed, or the market fails validation.
pub fn build_market(args: &EvaluateArgs, config: &Config) -> Result<Market> {
    if args.market.is_none() && args.bookmakers.is_empty() {
        return Err(MarketFileError::MissingQuotes.into());
    }

    let mut file = match &args.market {
        Some(path) => MarketFile::load(path)?,
        None => MarketFile::default(),
    };

    let bookmakers = args
        .bookmakers
        .iter()
        .map(|argument| BookmakerEntry::parse_argument(argument))
        .collect::<std::result::Result<Vec<_>, _>>()?;

    file.apply(MarketOverrides {
        match_type: args.match_type,
        outcomes: args.outcomes.clone(),
        bookmakers,
        stake_budget: args.budget,
    })?;

    file.into_market(&config.engine).map_err(|error| {
        if let Error::Market(invalid) = &error {
            debug!(field = invalid.field(), error = %invalid, "Market rejected");
        }
        error
    })
}

/// Engine settings with command-line overrides applied.
///
/// # Errors
///
/// Returns [`MarketFileError::BadArgument`] for a non-positive
/// `--reference-stake`.
pub fn engine_settings(args: &EvaluateArgs, config: &Config) -> Result<EngineSettings> {
    let mut settings = config.engine.settings();
    if let Some(reference_stake) = args.reference_stake {
        if reference_stake <= Decimal::ZERO {
            return Err(MarketFileError::BadArgument {
                argument: format!("--reference-stake {reference_stake}"),
                reason: "must be greater than 0".to_string(),
            }
            .into());
        }
        settings.reference_stake = reference_stake;
    }
    Ok(settings)
}

/// Display settings with command-line overrides applied.
#[must_use]
pub fn display_settings(args: &EvaluateArgs, config: &Config) -> DisplaySettings {
    let mut settings = config.display;
    if let Some(precision) = args.precision {
        settings.precision = precision;
    }
    if args.no_reconcile {
        settings.reconcile_stakes = false;
    }
    settings
}

/// Execute `evaluate`.
pub fn execute(args: &EvaluateArgs, config: &Config) -> Result<()> {
    let market = build_market(args, config)?;
    let engine = ArbitrageEngine::new(engine_settings(args, config)?);
    let report = engine.evaluate(&market);
    let display = DisplayReport::new(&report, &display_settings(args, config));

    info!(
        bookmakers = market.bookmaker_count(),
        has_arbitrage = report.has_arbitrage(),
        "Evaluation complete"
    );

    if output::is_json() {
        output::json_output(&json!({
            "command": "evaluate",
            "report": report,
            "display": display,
        }));
        return Ok(());
    }

    render(&display);
    Ok(())
}

fn render(display: &DisplayReport) {
    let p = display.precision;

    output::header(env!("CARGO_PKG_VERSION"));
    output::section("Best prices");

    let rows: Vec<OutcomeTableRow> = display
        .outcomes
        .iter()
        .map(|row| OutcomeTableRow {
            outcome: row.outcome.clone(),
            bookmaker: row.bookmaker.to_string(),
            odds: fixed(row.odds, p),
            implied: fixed(row.implied_probability_percent, p),
            stake: fixed_or_dash(row.stake, p),
            payout: fixed_or_dash(row.payout, p),
        })
        .collect();
    output::lines(&Table::new(rows).to_string());

    output::section("Summary");
    output::field(
        "Total implied",
        format!("{}%", fixed(display.total_implied_probability_percent, p)),
    );
    let margin = format!("{}%", fixed(display.profit_margin_percent, p));

    if display.has_arbitrage {
        output::field("Arbitrage", output::positive("yes"));
        output::field("Profit margin", output::positive(margin));
        output::field("Stake budget", fixed(display.stake_budget, p));
        output::field("Payout", fixed_or_dash(display.payout, p));
        output::field(
            "Profit",
            output::positive(fixed_or_dash(display.expected_profit, p)),
        );
        output::field(
            "Minimum stake",
            fixed_or_dash(display.minimum_required_stake, p),
        );
        if display.below_minimum_stake {
            output::warning(&format!(
                "Stake budget {} is below the minimum required stake {}",
                fixed(display.stake_budget, p),
                fixed_or_dash(display.minimum_required_stake, p)
            ));
        }
    } else {
        output::field("Arbitrage", output::negative("no"));
        output::field("Profit margin", output::negative(margin));
        output::note("No stake split guarantees a profit at these prices.");
    }

    output::section("Bookmaker payout rates");
    let rates: Vec<PayoutRateTableRow> = display
        .payout_rates
        .iter()
        .map(|rate| PayoutRateTableRow {
            bookmaker: rate.bookmaker.to_string(),
            payout_rate: fixed(rate.payout_rate_percent, p),
        })
        .collect();
    output::lines(&Table::new(rates).to_string());
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::domain::{InvalidMarketError, MatchType};
    use rust_decimal_macros::dec;

    fn args(bookmakers: &[&str]) -> EvaluateArgs {
        EvaluateArgs {
            bookmakers: bookmakers.iter().map(ToString::to_string).collect(),
            ..EvaluateArgs::default()
        }
    }

    #[test]
    fn fixed_pads_to_precision() {
        assert_eq!(fixed(dec!(100), 2), "100.00");
        assert_eq!(fixed(dec!(51.11), 2), "51.11");
        assert_eq!(fixed(dec!(3), 0), "3");
    }

    #[test]
    fn builds_market_from_arguments() {
        let config = Config::default();
        let args = EvaluateArgs {
            budget: Some(dec!(250)),
            ..args(&["A=2.20,1.80", "B=1.90,2.30"])
        };

        let market = build_market(&args, &config).unwrap();

        assert_eq!(market.bookmaker_count(), 2);
        assert_eq!(market.stake_budget(), dec!(250));
        assert_eq!(market.outcomes().labels(), &["Home win", "Away win"]);
    }

    #[test]
    fn uses_configured_defaults() {
        let mut config = Config::default();
        config.engine.default_match_type = MatchType::ThreeWay;
        config.engine.default_stake_budget = dec!(75);

        let market = build_market(&args(&["A=2.05,3.40,1.80"]), &config).unwrap();

        assert_eq!(market.outcome_count(), 3);
        assert_eq!(market.stake_budget(), dec!(75));
    }

    #[test]
    fn requires_some_quotes() {
        let result = build_market(&EvaluateArgs::default(), &Config::default());
        assert!(matches!(
            result,
            Err(Error::MarketFile(MarketFileError::MissingQuotes))
        ));
    }

    #[test]
    fn rejects_invalid_odds_argument() {
        let result = build_market(&args(&["A=1.00,3.00"]), &Config::default());
        assert!(matches!(
            result,
            Err(Error::Market(InvalidMarketError::OddsNotAboveOne { .. }))
        ));
    }

    #[test]
    fn reference_stake_override() {
        let config = Config::default();
        let args = EvaluateArgs {
            reference_stake: Some(dec!(1000)),
            ..EvaluateArgs::default()
        };

        assert_eq!(
            engine_settings(&args, &config).unwrap().reference_stake,
            dec!(1000)
        );

        let zero = EvaluateArgs {
            reference_stake: Some(Decimal::ZERO),
            ..EvaluateArgs::default()
        };
        assert!(engine_settings(&zero, &config).is_err());
    }

    #[test]
    fn display_overrides() {
        let config = Config::default();
        let args = EvaluateArgs {
            precision: Some(4),
            no_reconcile: true,
            ..EvaluateArgs::default()
        };

        let settings = display_settings(&args, &config);

        assert_eq!(settings.precision, 4);
        assert!(!settings.reconcile_stakes);
        assert_eq!(display_settings(&EvaluateArgs::default(), &config), config.display);
    }
}
