//! Configuration management
//!
//! Configuration is read from the process environment exactly once at
//! startup into an [`AppConfig`] that is passed by reference to the
//! components that need it, so nothing re-reads ambient state later.
//!
//! # Environment Variables
//!
//! | Variable | Purpose |
//! |---|---|
//! | `KEYCLOAK_SERVER` | Identity provider base URL, must end with `/` |
//! | `REALM` | OIDC realm name |
//! | `CLIENT_ID` | OAuth2 client ID |
//! | `CLIENT_SECRET` | OAuth2 client secret |
//! | `SOURCE_SYSTEM_ID` | Source system the export job targets |
//! | `EXPORT_TYPE` | Export type, passed through verbatim |
//! | `DISSCO_DOMAIN` | Hostname of the scheduling API |
//!
//! No validation is performed: a missing variable becomes the literal
//! string `"None"`, which then appears verbatim in URLs and request
//! bodies. `.env` files are honored via `dotenvy` before parsing.
//!
//! # Example
//!
//! ```rust,no_run
//! use dissco_export_scheduler::config::AppConfig;
//!
//! let config = AppConfig::from_env();
//! println!("Scheduling for realm {}", config.keycloak.realm);
//! ```

use secrecy::SecretString;
use std::env;

/// Marker substituted for environment variables that are not set
const ABSENT_VALUE: &str = "None";

/// Keycloak connection settings
#[derive(Debug, Clone)]
pub struct KeycloakConfig {
    /// Base URL of the Keycloak server, including trailing slash
    pub server: String,

    /// OIDC realm name
    pub realm: String,

    /// OAuth2 client ID
    pub client_id: String,

    /// OAuth2 client secret, redacted in Debug output
    pub client_secret: SecretString,
}

/// Parameters of the export job to schedule
#[derive(Debug, Clone)]
pub struct ExportJobConfig {
    /// Source system whose records the job exports
    pub source_system_id: String,

    /// Export type identifier, passed through verbatim
    pub export_type: String,
}

/// Top-level application configuration
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub keycloak: KeycloakConfig,
    pub export: ExportJobConfig,

    /// Hostname of the DiSSCo scheduling API
    pub dissco_domain: String,
}

impl AppConfig {
    /// Read configuration from the environment.
    ///
    /// Infallible: missing variables are replaced by the `"None"`
    /// marker rather than rejected, so a misconfigured run surfaces as
    /// a failed HTTP call instead of a startup error.
    pub fn from_env() -> Self {
        Self {
            keycloak: KeycloakConfig {
                server: env_or_absent("KEYCLOAK_SERVER"),
                realm: env_or_absent("REALM"),
                client_id: env_or_absent("CLIENT_ID"),
                client_secret: SecretString::new(env_or_absent("CLIENT_SECRET")),
            },
            export: ExportJobConfig {
                source_system_id: env_or_absent("SOURCE_SYSTEM_ID"),
                export_type: env_or_absent("EXPORT_TYPE"),
            },
            dissco_domain: env_or_absent("DISSCO_DOMAIN"),
        }
    }
}

fn env_or_absent(key: &str) -> String {
    env::var(key).unwrap_or_else(|_| ABSENT_VALUE.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use secrecy::ExposeSecret;

    #[test]
    fn test_missing_variables_become_absent_marker() {
        // Guard against leakage from the surrounding environment
        env::remove_var("DISSCO_EXPORT_SCHEDULER_TEST_UNSET");
        assert_eq!(env_or_absent("DISSCO_EXPORT_SCHEDULER_TEST_UNSET"), "None");
    }

    #[test]
    fn test_set_variable_is_read() {
        env::set_var("DISSCO_EXPORT_SCHEDULER_TEST_SET", "value-1");
        assert_eq!(env_or_absent("DISSCO_EXPORT_SCHEDULER_TEST_SET"), "value-1");
        env::remove_var("DISSCO_EXPORT_SCHEDULER_TEST_SET");
    }

    #[test]
    fn test_client_secret_debug_redacted() {
        let config = KeycloakConfig {
            server: "https://idp.test/".to_string(),
            realm: "dissco".to_string(),
            client_id: "exporter".to_string(),
            client_secret: SecretString::new("sensitive-data".to_string()),
        };

        let debug_output = format!("{config:?}");
        assert!(!debug_output.contains("sensitive-data"));
    }

    #[test]
    fn test_client_secret_exposable() {
        let secret = SecretString::new("s3cr3t".to_string());
        assert_eq!(secret.expose_secret(), "s3cr3t");
    }
}
