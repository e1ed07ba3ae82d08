//! Tracing subscriber setup.

use tracing_subscriber::EnvFilter;

use neuroforge_core::config::NeuroForgeConfig;

/// Filter directive used when `RUST_LOG` is not set.
pub fn default_directive(config: &NeuroForgeConfig) -> String {
    config.effective_log_level().to_string()
}

/// Install the global fmt subscriber.
///
/// `RUST_LOG` takes precedence over the configured level. Returns `false` if
/// a global subscriber was already installed.
pub fn init_tracing(config: &NeuroForgeConfig) -> bool {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(config)));

    let builder = tracing_subscriber::fmt().with_env_filter(filter);
    let result = if config.logging.json_format {
        builder.json().try_init()
    } else {
        builder.try_init()
    };

    result.is_ok()
}

#[cfg(test)]
mod tests {
    use neuroforge_core::config::LogLevel;

    use super::*;

    #[test]
    fn test_default_directive() {
        let mut config = NeuroForgeConfig::default();
        assert_eq!(default_directive(&config), "info");

        config.verbose = true;
        assert_eq!(default_directive(&config), "debug");

        config.verbose = false;
        config.logging.level = LogLevel::Warn;
        assert_eq!(default_directive(&config), "warn");
    }

    #[test]
    fn test_init_tracing_is_idempotent() {
        let config = NeuroForgeConfig::default();
        init_tracing(&config);
        assert!(!init_tracing(&config));
    }
}
