//! Match type listing and explanation.

use serde_json::json;
use tabled::{Table, Tabled};

use crate::adapter::inbound::cli::output;
use crate::core::domain::{MatchType, Odds};
use crate::error::Result;

#[derive(Tabled)]
struct MatchTypeRow {
    #[tabled(rename = "Name")]
    name: &'static str,
    #[tabled(rename = "Outcomes")]
    outcomes: String,
    #[tabled(rename = "Default Odds")]
    odds: String,
}

impl From<MatchType> for MatchTypeRow {
    fn from(match_type: MatchType) -> Self {
        Self {
            name: match_type.name(),
            outcomes: match_type.labels().join(" / "),
            odds: join_odds(&match_type.default_odds()),
        }
    }
}

fn join_odds(odds: &[Odds]) -> String {
    odds.iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(" / ")
}

fn describe(match_type: MatchType) -> serde_json::Value {
    json!({
        "name": match_type.name(),
        "description": match_type.description(),
        "outcomes": match_type.labels(),
        "default_odds": match_type
            .default_odds()
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>(),
    })
}

/// List built-in match types.
pub fn list() -> Result<()> {
    if output::is_json() {
        output::json_output(&json!({
            "command": "match-types.list",
            "match_types": MatchType::ALL.iter().copied().map(describe).collect::<Vec<_>>(),
        }));
        return Ok(());
    }
    if output::is_quiet() {
        return Ok(());
    }

    output::header(env!("CARGO_PKG_VERSION"));
    output::section("Match types");

    let rows: Vec<MatchTypeRow> = MatchType::ALL.iter().copied().map(MatchTypeRow::from).collect();
    output::lines(&Table::new(rows).to_string());

    output::hint(&format!(
        "run {} for details",
        output::highlight("surebet match-types explain <name>")
    ));

    Ok(())
}

/// Explain a specific match type.
///
/// An unknown name is reported, not treated as a failure.
pub fn explain(name: &str) -> Result<()> {
    let parsed = name.parse::<MatchType>();

    if output::is_json() {
        let payload = match parsed {
            Ok(match_type) => json!({
                "command": "match-types.explain",
                "match_type": describe(match_type),
            }),
            Err(_) => json!({
                "command": "match-types.explain",
                "status": "unknown_match_type",
                "requested": name,
                "available": MatchType::ALL.iter().map(|t| t.name()).collect::<Vec<_>>(),
            }),
        };
        output::json_output(&payload);
        return Ok(());
    }
    if output::is_quiet() {
        return Ok(());
    }

    output::header(env!("CARGO_PKG_VERSION"));

    let Ok(match_type) = parsed else {
        output::error(&format!("Unknown match type: {name}"));
        output::hint(&format!(
            "available match types: {}",
            MatchType::ALL
                .iter()
                .map(|t| t.name())
                .collect::<Vec<_>>()
                .join(", ")
        ));
        return Ok(());
    };

    output::section(match_type.name());
    output::note(match_type.description());
    output::field("Outcomes", match_type.labels().join(", "));
    output::field("Default odds", join_odds(&match_type.default_odds()));
    output::lines(&format!(
        "
Market file:
  match_type = \"{name}\"
  stake_budget = 100

  [[bookmakers]]
  name = \"Pinnacle\"
  odds = [{odds}]",
        name = match_type.name(),
        odds = match_type
            .default_odds()
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(", "),
    ));

    Ok(())
}
