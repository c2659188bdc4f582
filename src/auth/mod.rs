//! Keycloak token acquisition
//!
//! This module exchanges OAuth2 client credentials for a bearer token at
//! the realm's OpenID-Connect token endpoint.

use crate::config::KeycloakConfig;
use crate::domain::{Result, SchedulerError};
use reqwest::Client;
use secrecy::ExposeSecret;

/// Client for the Keycloak OpenID-Connect token endpoint
///
/// # Example
///
/// ```no_run
/// use dissco_export_scheduler::auth::KeycloakClient;
/// use dissco_export_scheduler::config::AppConfig;
///
/// # async fn example() -> dissco_export_scheduler::domain::Result<()> {
/// let config = AppConfig::from_env();
/// let client = KeycloakClient::new(config.keycloak.clone());
///
/// match client.get_token().await? {
///     Some(token) => println!("Got token ({} bytes)", token.len()),
///     None => println!("Token endpoint answered without an access_token"),
/// }
/// # Ok(())
/// # }
/// ```
pub struct KeycloakClient {
    config: KeycloakConfig,
    client: Client,
}

impl KeycloakClient {
    /// Create a new client for the configured realm.
    ///
    /// No timeout is set; the run relies on the HTTP client's defaults,
    /// and a hung identity provider hangs the invocation.
    pub fn new(config: KeycloakConfig) -> Self {
        Self {
            config,
            client: Client::new(),
        }
    }

    /// Token endpoint URL for the configured realm.
    ///
    /// The server value is appended to directly, so it must carry its
    /// trailing slash.
    fn token_url(&self) -> String {
        format!(
            "{}auth/realms/{}/protocol/openid-connect/token",
            self.config.server, self.config.realm
        )
    }

    /// Fetch an access token using the client-credentials grant.
    ///
    /// Returns `Ok(None)` when the response parses as JSON but carries no
    /// `access_token` field (e.g. a Keycloak error document); transport
    /// failures and non-JSON bodies are errors. No retry is attempted.
    pub async fn get_token(&self) -> Result<Option<String>> {
        let url = self.token_url();
        let params = [
            ("grant_type", "client_credentials"),
            ("client_id", self.config.client_id.as_str()),
            ("client_secret", self.config.client_secret.expose_secret()),
            ("scope", "roles"),
        ];

        tracing::debug!(url = %url, client_id = %self.config.client_id, "Requesting access token");

        let response = self
            .client
            .post(&url)
            .form(&params)
            .send()
            .await
            .map_err(|e| SchedulerError::Connection(e.to_string()))?;

        let body: serde_json::Value = response
            .json()
            .await
            .map_err(|e| SchedulerError::Serialization(e.to_string()))?;

        let token = body
            .get("access_token")
            .and_then(|v| v.as_str())
            .map(str::to_owned);

        if token.is_none() {
            tracing::warn!(
                realm = %self.config.realm,
                "Token endpoint response carried no access_token"
            );
        }

        Ok(token)
    }
}
