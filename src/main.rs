use std::io::IsTerminal;
use std::process::ExitCode;

use clap::Parser;
use tracing::debug;

use surebet::adapter::inbound::cli::command::{
    Cli, ColorChoice, Commands, ConfigCommand, MarketCommand, MatchTypeCommand,
};
use surebet::adapter::inbound::cli::output::{self, OutputConfig};
use surebet::adapter::inbound::cli::{config, diagnostic, evaluate, market, match_type, paths};
use surebet::error::{Error, Result};

fn main() -> ExitCode {
    let _ = dotenvy::dotenv();

    // Usage errors exit with status 2 from clap.
    let cli = Cli::parse();
    output::configure(OutputConfig::new(cli.json, cli.quiet, use_color(cli.color)));

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            report(&error);
            ExitCode::FAILURE
        }
    }
}

fn use_color(choice: ColorChoice) -> bool {
    match choice {
        ColorChoice::Always => true,
        ColorChoice::Never => false,
        ColorChoice::Auto => {
            std::env::var_os("NO_COLOR").is_none() && std::io::stdout().is_terminal()
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    // Writing a template must not depend on an existing, possibly broken, config.
    if let Commands::Config(ConfigCommand::Init(args)) = &cli.command {
        let path = args.path.clone().unwrap_or_else(paths::default_config);
        return config::execute_init(&path, args.force);
    }

    let resolved = config::resolve(cli.config.as_deref())?;
    resolved.config.init_logging(cli.verbose);
    debug!(source = ?resolved.source, "surebet starting");

    match cli.command {
        Commands::Evaluate(args) => evaluate::execute(&args, &resolved.config),
        Commands::Market(MarketCommand::Init(args)) => {
            market::execute_init(&args, &resolved.config)
        }
        Commands::MatchTypes(MatchTypeCommand::List) => match_type::list(),
        Commands::MatchTypes(MatchTypeCommand::Explain { name }) => match_type::explain(&name),
        Commands::Config(ConfigCommand::Show) => config::execute_show(&resolved),
        Commands::Config(ConfigCommand::Validate) => config::execute_validate(&resolved),
        Commands::Config(ConfigCommand::Init(_)) => Ok(()),
    }
}

fn report(error: &Error) {
    if output::is_json() {
        output::error(&error.to_string());
        return;
    }
    eprintln!("{:?}", diagnostic::for_error(error));
}
