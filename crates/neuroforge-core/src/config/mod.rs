mod logging;

pub use logging::{LogLevel, LoggingConfig};

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::{NeuroForgeError, Result};

/// File looked up in the working directory when no path is given.
pub const DEFAULT_CONFIG_FILE: &str = "neuroforge.toml";

static ENV_VAR_PATTERN: Lazy<regex_lite::Regex> = Lazy::new(|| {
    regex_lite::Regex::new(r"\$\{([A-Z_][A-Z0-9_]*)\}").expect("valid env var pattern")
});

/// Root configuration for NeuroForge.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NeuroForgeConfig {
    /// Verbose mode.
    #[serde(default)]
    pub verbose: bool,

    /// Logging configuration.
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl NeuroForgeConfig {
    /// Load configuration from a TOML file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        tracing::debug!(path = %path.display(), "Loading configuration");

        let content = std::fs::read_to_string(path).map_err(|e| {
            NeuroForgeError::Config(format!(
                "Failed to read config file {}: {}",
                path.display(),
                e
            ))
        })?;

        Self::parse_toml(&content)
    }

    /// Parse configuration from a TOML string.
    pub fn parse_toml(content: &str) -> Result<Self> {
        let content = substitute_env_vars(content);
        Ok(toml::from_str(&content)?)
    }

    /// Configuration with only the verbose flag set.
    pub fn with_verbose(verbose: bool) -> Self {
        Self {
            verbose,
            ..Default::default()
        }
    }

    /// Level the subscriber should filter at, taking verbose mode into account.
    pub fn effective_log_level(&self) -> LogLevel {
        if self.verbose {
            self.logging.level.min(LogLevel::Debug)
        } else {
            self.logging.level
        }
    }
}

/// Substitute environment variables in the format ${VAR_NAME}.
fn substitute_env_vars(content: &str) -> String {
    ENV_VAR_PATTERN
        .replace_all(content, |caps: &regex_lite::Captures<'_>| {
            std::env::var(&caps[1]).unwrap_or_else(|_| caps[0].to_string())
        })
        .into_owned()
}
