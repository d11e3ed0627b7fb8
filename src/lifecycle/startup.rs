//! Startup orchestration.
//!
//! # Responsibilities
//! - Load configuration (file or defaults)
//! - Apply command-line overrides
//! - Validate the merged result before anything uses it

use std::path::Path;

use crate::config::{load_config, validate_config, ClientConfig, ConfigError};

/// Values supplied on the command line that take precedence over the file.
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub base_url: Option<String>,
    pub request_ms: Option<u64>,
    pub json_logs: bool,
}

impl Overrides {
    pub fn apply(&self, config: &mut ClientConfig) {
        if let Some(base_url) = &self.base_url {
            config.endpoint.base_url = base_url.clone();
        }
        if let Some(request_ms) = self.request_ms {
            config.timeouts.request_ms = request_ms;
            // Keep a short deadline usable without also passing a connect timeout.
            config.timeouts.connect_ms = config.timeouts.connect_ms.min(request_ms);
        }
        if self.json_logs {
            config.observability.json_logs = true;
        }
    }
}

/// Build the effective configuration.
pub fn resolve_config(
    path: Option<&Path>,
    overrides: &Overrides,
) -> Result<ClientConfig, ConfigError> {
    let mut config = match path {
        Some(path) => load_config(path)?,
        None => ClientConfig::default(),
    };
    overrides.apply(&mut config);
    validate_config(&config).map_err(ConfigError::Validation)?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_without_file() {
        let config = resolve_config(None, &Overrides::default()).unwrap();
        assert_eq!(config, ClientConfig::default());
    }

    #[test]
    fn test_overrides_take_precedence() {
        let overrides = Overrides {
            base_url: Some("http://10.0.0.5:5000".into()),
            request_ms: Some(500),
            json_logs: true,
        };
        let config = resolve_config(None, &overrides).unwrap();
        assert_eq!(config.analyze_url(), "http://10.0.0.5:5000/analyze");
        assert_eq!(config.timeouts.request_ms, 500);
        assert_eq!(config.timeouts.connect_ms, 500);
        assert!(config.observability.json_logs);
    }

    #[test]
    fn test_invalid_override_is_rejected() {
        let overrides = Overrides {
            request_ms: Some(0),
            ..Default::default()
        };
        let err = resolve_config(None, &overrides).unwrap_err();
        assert!(matches!(err, ConfigError::Validation(_)));
    }
}
