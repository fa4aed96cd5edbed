//! Handler for the `market` command group.

use serde_json::json;

use crate::adapter::inbound::cli::command::MarketInitArgs;
use crate::adapter::inbound::cli::{output, paths};
use crate::adapter::inbound::market_file::render_template;
use crate::error::Result;
use crate::infrastructure::config::settings::Config;

/// Execute `market init`.
pub fn execute_init(args: &MarketInitArgs, config: &Config) -> Result<()> {
    let match_type = args.match_type.unwrap_or(config.engine.default_match_type);
    let template = render_template(
        match_type,
        args.bookmakers as usize,
        config.engine.default_stake_budget,
    );

    paths::write_new(&args.path, &template, args.force)?;

    if output::is_json() {
        output::json_output(&json!({
            "command": "market.init",
            "path": args.path.display().to_string(),
            "match_type": match_type.name(),
            "bookmakers": args.bookmakers,
        }));
        return Ok(());
    }

    output::section("Market Initialized");
    output::success("Created market file");
    output::field("Path", args.path.display());
    output::field("Match type", match_type);
    output::field("Bookmakers", args.bookmakers);
    output::hint(&format!(
        "edit the odds, then run {}",
        output::highlight(format!("surebet evaluate {}", args.path.display()))
    ));
    Ok(())
}
