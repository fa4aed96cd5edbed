//! Handler for the `config` command group and configuration resolution.

use std::path::{Path, PathBuf};

use serde_json::json;
use tracing::debug;

use crate::adapter::inbound::cli::{output, paths};
use crate::error::Result;
use crate::infrastructure::config::settings::Config;

/// Default config template with documentation.
const CONFIG_TEMPLATE: &str = include_str!("../../../../config.toml.example");

/// Configuration in effect and the file it came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedConfig {
    /// Validated configuration.
    pub config: Config,
    /// File the configuration was read from; `None` for built-in defaults.
    pub source: Option<PathBuf>,
}

/// Load the configuration named by `-c`, or the default file.
///
/// An explicit path must exist. A missing default file yields built-in
/// defaults.
///
/// # Errors
///
/// Returns an error if the file cannot be read, parsed or validated.
pub fn resolve(explicit: Option<&Path>) -> Result<ResolvedConfig> {
    resolve_with_default(explicit, &paths::default_config())
}

fn resolve_with_default(explicit: Option<&Path>, default: &Path) -> Result<ResolvedConfig> {
    let path = match explicit {
        Some(path) => path,
        None if default.exists() => default,
        None => {
            debug!(path = %default.display(), "No configuration file, using defaults");
            return Ok(ResolvedConfig {
                config: Config::default(),
                source: None,
            });
        }
    };

    let config = Config::load(path)?;
    debug!(path = %path.display(), "Configuration loaded");
    Ok(ResolvedConfig {
        config,
        source: Some(path.to_path_buf()),
    })
}

fn source_label(source: Option<&Path>) -> String {
    source.map_or_else(
        || "built-in defaults".to_string(),
        |path| path.display().to_string(),
    )
}

/// Execute `config init`.
pub fn execute_init(path: &Path, force: bool) -> Result<()> {
    paths::write_new(path, CONFIG_TEMPLATE, force)?;

    if output::is_json() {
        output::json_output(&json!({
            "command": "config.init",
            "path": path.display().to_string(),
        }));
        return Ok(());
    }

    output::section("Config Initialized");
    output::success("Created configuration file");
    output::field("Path", path.display());
    output::section("Next Steps");
    output::note(&format!("1. Edit {} with your settings", path.display()));
    output::note(&format!("2. Run: surebet config validate -c {}", path.display()));
    output::note("3. Run: surebet market init market.toml");
    Ok(())
}

/// Execute `config show`.
pub fn execute_show(resolved: &ResolvedConfig) -> Result<()> {
    let config = &resolved.config;
    let source = source_label(resolved.source.as_deref());

    if output::is_json() {
        output::json_output(&json!({
            "command": "config.show",
            "source": source,
            "config": serde_json::to_value(config)?,
        }));
        return Ok(());
    }

    output::section("Effective Configuration");
    output::field("Source", output::muted(&source));

    output::section("Logging");
    output::field("Level", &config.logging.level);
    output::field("Format", &config.logging.format);

    output::section("Engine");
    output::field("Reference stake", config.engine.reference_stake);
    output::field("Max stake budget", config.engine.max_stake_budget);
    output::field("Match type", config.engine.default_match_type);
    output::field("Stake budget", config.engine.default_stake_budget);

    output::section("Display");
    output::field("Precision", config.display.precision);
    output::field(
        "Reconcile stakes",
        if config.display.reconcile_stakes {
            "yes"
        } else {
            "no"
        },
    );

    Ok(())
}

/// Execute `config validate`.
///
/// The configuration was already validated while resolving; this reports
/// the outcome.
pub fn execute_validate(resolved: &ResolvedConfig) -> Result<()> {
    let source = source_label(resolved.source.as_deref());

    if output::is_json() {
        output::json_output(&json!({
            "command": "config.validate",
            "source": source,
            "valid": true,
        }));
        return Ok(());
    }

    output::section("Config Validation");
    output::field("Path", &source);
    match &resolved.source {
        Some(path) => {
            output::success("Config file is valid");
            output::field("Next", format!("surebet config show -c {}", path.display()));
        }
        None => {
            output::success("No config file found; built-in defaults are valid");
            output::hint("create one with `surebet config init`");
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{ConfigError, Error};
    use std::fs;
    use tempfile::TempDir;

    fn create_temp_dir() -> TempDir {
        tempfile::tempdir().expect("Failed to create temp directory")
    }

    #[test]
    fn test_config_template_parses_to_defaults() {
        let config = Config::parse_toml(CONFIG_TEMPLATE).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_execute_init_creates_file() {
        let temp_dir = create_temp_dir();
        let config_path = temp_dir.path().join("config.toml");

        execute_init(&config_path, false).unwrap();

        let content = fs::read_to_string(&config_path).unwrap();
        assert_eq!(content, CONFIG_TEMPLATE);
    }

    #[test]
    fn test_execute_init_creates_parent_directories() {
        let temp_dir = create_temp_dir();
        let config_path = temp_dir.path().join("nested").join("dir").join("config.toml");

        let result = execute_init(&config_path, false);

        assert!(result.is_ok());
        assert!(config_path.exists());
    }

    #[test]
    fn test_execute_init_fails_if_file_exists_without_force() {
        let temp_dir = create_temp_dir();
        let config_path = temp_dir.path().join("config.toml");
        fs::write(&config_path, "existing content").unwrap();

        let result = execute_init(&config_path, false);

        assert!(matches!(result, Err(Error::AlreadyExists { ref path }) if path == &config_path));
        let content = fs::read_to_string(&config_path).unwrap();
        assert_eq!(content, "existing content");
    }

    #[test]
    fn test_execute_init_overwrites_with_force() {
        let temp_dir = create_temp_dir();
        let config_path = temp_dir.path().join("config.toml");
        fs::write(&config_path, "existing content").unwrap();

        execute_init(&config_path, true).unwrap();

        let content = fs::read_to_string(&config_path).unwrap();
        assert_eq!(content, CONFIG_TEMPLATE);
    }

    #[test]
    fn test_missing_default_uses_builtin_defaults() {
        let temp_dir = create_temp_dir();
        let default = temp_dir.path().join("config.toml");

        let resolved = resolve_with_default(None, &default).unwrap();

        assert_eq!(resolved.config, Config::default());
        assert_eq!(resolved.source, None);
    }

    #[test]
    fn test_existing_default_is_loaded() {
        let temp_dir = create_temp_dir();
        let default = temp_dir.path().join("config.toml");
        fs::write(&default, "[display]\nprecision = 4\n").unwrap();

        let resolved = resolve_with_default(None, &default).unwrap();

        assert_eq!(resolved.config.display.precision, 4);
        assert_eq!(resolved.source, Some(default));
    }

    #[test]
    fn test_missing_explicit_file_is_an_error() {
        let temp_dir = create_temp_dir();
        let explicit = temp_dir.path().join("absent.toml");
        let default = temp_dir.path().join("config.toml");

        let result = resolve_with_default(Some(&explicit), &default);

        assert!(matches!(result, Err(Error::Config(ConfigError::ReadFile(_)))));
    }
}
