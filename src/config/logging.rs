//! Logging configuration

use serde::Deserialize;
use tracing_subscriber::EnvFilter;

use super::error::ValidationError;

/// Logging configuration
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    /// Rust log filter directive
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Emit logs as JSON instead of human-readable lines
    #[serde(default)]
    pub json: bool,
}

impl LoggingConfig {
    /// Validate logging configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.log_level.trim().is_empty() {
            return Err(ValidationError::EmptyLogLevel);
        }
        Ok(())
    }

    /// Install the global tracing subscriber. Safe to call more than
    /// once; later calls are no-ops.
    pub fn init(&self) {
        let filter = EnvFilter::try_new(&self.log_level)
            .unwrap_or_else(|_| EnvFilter::new("info"));
        let builder = tracing_subscriber::fmt().with_env_filter(filter);
        if self.json {
            builder.json().try_init().ok();
        } else {
            builder.try_init().ok();
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            json: false,
        }
    }
}

fn default_log_level() -> String {
    "info,bazi_core=debug".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_directive_is_non_empty() {
        let config = LoggingConfig::default();
        assert!(config.validate().is_ok());
        assert!(config.log_level.contains("bazi_core"));
    }

    #[test]
    fn blank_directive_is_rejected() {
        let config = LoggingConfig {
            log_level: "  ".to_string(),
            json: false,
        };
        assert!(matches!(config.validate(), Err(ValidationError::EmptyLogLevel)));
    }
}
