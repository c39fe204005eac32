//! HTTP listener configuration

use serde::Deserialize;
use std::net::SocketAddr;
use std::time::Duration;

use super::error::ValidationError;

/// Upper bound for `request_timeout_secs`; completion calls retry inside it.
pub const MAX_REQUEST_TIMEOUT_SECS: u64 = 300;

/// Listener, logging and CORS settings.
///
/// Every field has a default, so an empty `server` section is valid.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Bind address; must be an IP literal
    pub host: String,

    pub port: u16,

    pub environment: Environment,

    /// `EnvFilter` directives used when `RUST_LOG` is unset
    pub log_level: String,

    /// Whole-request timeout applied by the router
    pub request_timeout_secs: u64,

    /// Comma-separated browser origins. Unset allows any origin, which
    /// matches the public relay's `Access-Control-Allow-Origin: *`.
    pub cors_origins: Option<String>,
}

/// Deployment environment; only `Production` changes behaviour (JSON logs).
#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    #[default]
    Development,
    Staging,
    Production,
}

impl ServerConfig {
    /// # Errors
    ///
    /// - `InvalidBindAddress` if `host` is not an IP literal
    pub fn socket_addr(&self) -> Result<SocketAddr, ValidationError> {
        let addr = format!("{}:{}", self.host, self.port);
        addr.parse()
            .map_err(|_| ValidationError::InvalidBindAddress(addr))
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    pub fn is_production(&self) -> bool {
        self.environment == Environment::Production
    }

    /// Configured origins, trimmed, blanks dropped. Empty means "any".
    pub fn cors_origins_list(&self) -> Vec<String> {
        let Some(raw) = self.cors_origins.as_deref() else {
            return Vec::new();
        };
        raw.split(',')
            .map(str::trim)
            .filter(|origin| !origin.is_empty())
            .map(String::from)
            .collect()
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.port == 0 {
            return Err(ValidationError::InvalidPort);
        }
        if !(1..=MAX_REQUEST_TIMEOUT_SECS).contains(&self.request_timeout_secs) {
            return Err(ValidationError::InvalidTimeout);
        }
        self.socket_addr().map(|_| ())
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
            environment: Environment::Development,
            log_level: "info,career_compass=debug,tower_http=info".to_string(),
            request_timeout_secs: 30,
            cors_origins: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    mod address {
        use super::*;

        #[test]
        fn binds_all_interfaces_on_8080_by_default() {
            let addr = ServerConfig::default().socket_addr().unwrap();
            assert_eq!(addr.to_string(), "0.0.0.0:8080");
        }

        #[test]
        fn hostnames_are_rejected() {
            let config = ServerConfig {
                host: "localhost".to_string(),
                ..Default::default()
            };
            assert_eq!(
                config.socket_addr(),
                Err(ValidationError::InvalidBindAddress("localhost:8080".to_string()))
            );
            assert!(config.validate().is_err());
        }
    }

    mod cors {
        use super::*;

        #[test]
        fn unset_means_any_origin() {
            assert!(ServerConfig::default().cors_origins_list().is_empty());
        }

        #[test]
        fn trims_and_skips_blank_entries() {
            let config = ServerConfig {
                cors_origins: Some(" https://careers.example.in ,, http://localhost:5173,".into()),
                ..Default::default()
            };
            assert_eq!(
                config.cors_origins_list(),
                vec!["https://careers.example.in", "http://localhost:5173"]
            );
        }
    }

    mod validation {
        use super::*;

        #[test]
        fn defaults_are_valid() {
            let config = ServerConfig::default();
            assert!(config.validate().is_ok());
            assert_eq!(config.request_timeout(), Duration::from_secs(30));
            assert!(!config.is_production());
        }

        #[test]
        fn port_zero_is_rejected() {
            let config = ServerConfig {
                port: 0,
                ..Default::default()
            };
            assert_eq!(config.validate(), Err(ValidationError::InvalidPort));
        }

        #[test]
        fn timeout_must_be_within_bounds() {
            for secs in [0, MAX_REQUEST_TIMEOUT_SECS + 1] {
                let config = ServerConfig {
                    request_timeout_secs: secs,
                    ..Default::default()
                };
                assert_eq!(config.validate(), Err(ValidationError::InvalidTimeout));
            }
        }

        #[test]
        fn production_is_detected() {
            let config = ServerConfig {
                environment: Environment::Production,
                ..Default::default()
            };
            assert!(config.is_production());
        }
    }
}
