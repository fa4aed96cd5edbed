//! Logging configuration and initialization.

use serde::{Deserialize, Serialize};
use tracing_subscriber::{fmt, EnvFilter};

/// Accepted values for [`LoggingConfig::format`].
pub const LOG_FORMATS: &[&str] = &["pretty", "json"];

/// Logging configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// `EnvFilter` directive used when `RUST_LOG` is unset.
    pub level: String,
    /// Output format, `pretty` or `json`.
    pub format: String,
}

impl LoggingConfig {
    /// Filter directive after applying `-v` flags.
    ///
    /// Returns `None` when no flag was given, leaving the choice to
    /// `RUST_LOG` and then [`Self::level`].
    #[must_use]
    pub fn verbosity_directive(verbose: u8) -> Option<&'static str> {
        match verbose {
            0 => None,
            1 => Some("debug"),
            _ => Some("trace"),
        }
    }

    /// Initialize the tracing subscriber with this logging configuration.
    ///
    /// Logs go to stderr so stdout stays machine-readable.
    pub fn init(&self, verbose: u8) {
        let filter = match Self::verbosity_directive(verbose) {
            Some(directive) => EnvFilter::new(directive),
            None => {
                EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&self.level))
            }
        };

        let builder = fmt().with_env_filter(filter).with_writer(std::io::stderr);
        // Keep an already-installed subscriber.
        let _ = match self.format.as_str() {
            "json" => builder.json().try_init(),
            _ => builder.try_init(),
        };
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "warn".into(),
            format: "pretty".into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_warn_pretty() {
        let config = LoggingConfig::default();
        assert_eq!(config.level, "warn");
        assert_eq!(config.format, "pretty");
    }

    #[test]
    fn verbosity_raises_level() {
        assert_eq!(LoggingConfig::verbosity_directive(0), None);
        assert_eq!(LoggingConfig::verbosity_directive(1), Some("debug"));
        assert_eq!(LoggingConfig::verbosity_directive(2), Some("trace"));
        assert_eq!(LoggingConfig::verbosity_directive(5), Some("trace"));
    }

    #[test]
    fn partial_section_keeps_defaults() {
        let config: LoggingConfig = toml::from_str("format = \"json\"").unwrap();
        assert_eq!(config.level, "warn");
        assert_eq!(config.format, "json");
    }
}
