//! Export-job scheduling against the exporter backend
//!
//! Submits one export-job request to the DiSSCo scheduling endpoint and
//! reports whether the backend accepted it. A rejection is logged and
//! reported through [`ScheduleOutcome`]; only transport-level failures
//! are errors.

use crate::auth::KeycloakClient;
use crate::config::AppConfig;
use crate::domain::{ExportJobRequest, Result, SchedulerError};
use reqwest::{Client, StatusCode};

/// Path of the scheduling endpoint on the exporter backend
const SCHEDULE_PATH: &str = "/api/data-export/v1/schedule";

/// Result of one scheduling attempt
///
/// The backend signals acceptance with `202 Accepted`; every other
/// status, including other 2xx codes, counts as a rejection.
#[derive(Debug, Clone)]
pub struct ScheduleOutcome {
    status: u16,
    body: String,
}

impl ScheduleOutcome {
    /// Whether the backend accepted the job
    pub fn accepted(&self) -> bool {
        self.status == StatusCode::ACCEPTED.as_u16()
    }

    /// HTTP status code returned by the backend
    pub fn status(&self) -> u16 {
        self.status
    }

    /// Raw response body text
    pub fn body(&self) -> &str {
        &self.body
    }
}

/// Client for the exporter backend's scheduling endpoint
pub struct ExporterBackendClient {
    endpoint: String,
    client: Client,
}

impl ExporterBackendClient {
    /// Create a client for the configured DiSSCo domain.
    pub fn new(config: &AppConfig) -> Self {
        Self::with_endpoint(format!("https://{}{SCHEDULE_PATH}", config.dissco_domain))
    }

    /// Create a client against an explicit endpoint URL.
    ///
    /// Used by tests to point at a local stub server.
    pub fn with_endpoint(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            client: Client::new(),
        }
    }

    /// Endpoint URL this client submits to
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Submit an export-job request.
    ///
    /// Logs one line per attempt: info when the backend answers
    /// `202 Accepted`, error otherwise, both with status and body.
    /// Returns `Ok` for any HTTP response; only transport failures
    /// are `Err`.
    pub async fn schedule(
        &self,
        authorization: &str,
        request: &ExportJobRequest,
    ) -> Result<ScheduleOutcome> {
        let response = self
            .client
            .post(&self.endpoint)
            .header("Authorization", authorization)
            .json(request)
            .send()
            .await
            .map_err(|e| SchedulerError::Connection(e.to_string()))?;

        let status = response.status().as_u16();
        let body = response
            .text()
            .await
            .map_err(|e| SchedulerError::Connection(e.to_string()))?;

        let outcome = ScheduleOutcome { status, body };

        if outcome.accepted() {
            tracing::info!(
                status = outcome.status,
                body = %outcome.body,
                "Job scheduled successfully"
            );
        } else {
            tracing::error!(
                status = outcome.status,
                body = %outcome.body,
                "Failed to schedule job"
            );
        }

        Ok(outcome)
    }
}

/// Schedule an export job at the exporter backend.
///
/// Runs the full sequence: fetch a bearer token from Keycloak, build
/// the request document, submit it. With `strict_auth` disabled a
/// missing `access_token` is tolerated the way the backend has always
/// seen it: the request goes out with an `Authorization: Bearer null`
/// header and fails server-side. With `strict_auth` enabled the run
/// aborts before the second call instead.
pub async fn schedule_export_job(config: &AppConfig, strict_auth: bool) -> Result<ScheduleOutcome> {
    let backend = ExporterBackendClient::new(config);
    schedule_export_job_with_backend(config, strict_auth, &backend).await
}

/// Same sequence as [`schedule_export_job`], against a caller-supplied
/// backend client. Lets tests aim the submission at a stub server.
pub async fn schedule_export_job_with_backend(
    config: &AppConfig,
    strict_auth: bool,
    backend: &ExporterBackendClient,
) -> Result<ScheduleOutcome> {
    let keycloak = KeycloakClient::new(config.keycloak.clone());
    let token = keycloak.get_token().await?;

    let authorization = match token {
        Some(token) => format!("Bearer {token}"),
        None if strict_auth => {
            return Err(SchedulerError::Authentication(
                "Token endpoint returned no access_token".to_string(),
            ))
        }
        None => {
            tracing::warn!("Proceeding without an access token");
            "Bearer null".to_string()
        }
    };

    let request = ExportJobRequest::for_source_system(&config.export);

    tracing::info!(
        endpoint = %backend.endpoint(),
        export_type = %config.export.export_type,
        source_system_id = %config.export.source_system_id,
        "Scheduling export job"
    );

    backend.schedule(&authorization, &request).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ExportJobConfig;
    use test_case::test_case;

    fn request() -> ExportJobRequest {
        ExportJobRequest::for_source_system(&ExportJobConfig {
            source_system_id: "SSID1".to_string(),
            export_type: "dwca".to_string(),
        })
    }

    #[test]
    fn test_endpoint_derived_from_domain() {
        let config = AppConfig {
            keycloak: crate::config::KeycloakConfig {
                server: "https://idp.test/".to_string(),
                realm: "r".to_string(),
                client_id: "c".to_string(),
                client_secret: secrecy::SecretString::new("s".to_string()),
            },
            export: ExportJobConfig {
                source_system_id: "SSID1".to_string(),
                export_type: "dwca".to_string(),
            },
            dissco_domain: "sandbox.dissco.tech".to_string(),
        };

        let backend = ExporterBackendClient::new(&config);
        assert_eq!(
            backend.endpoint(),
            "https://sandbox.dissco.tech/api/data-export/v1/schedule"
        );
    }

    #[test_case(202, true ; "accepted")]
    #[test_case(200, false ; "other success status is a rejection")]
    #[test_case(401, false ; "unauthorized")]
    #[test_case(500, false ; "server error")]
    fn test_only_202_counts_as_accepted(status: u16, expected: bool) {
        let outcome = ScheduleOutcome {
            status,
            body: String::new(),
        };
        assert_eq!(outcome.accepted(), expected);
    }

    #[tokio::test]
    async fn test_schedule_sends_authorization_and_body() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", "/api/data-export/v1/schedule")
            .match_header("authorization", "Bearer tok1")
            .match_header("content-type", "application/json")
            .match_body(mockito::Matcher::Json(
                serde_json::to_value(request()).unwrap(),
            ))
            .with_status(202)
            .with_body("queued")
            .create_async()
            .await;

        let backend =
            ExporterBackendClient::with_endpoint(format!("{}/api/data-export/v1/schedule", server.url()));
        let outcome = backend.schedule("Bearer tok1", &request()).await.unwrap();

        mock.assert_async().await;
        assert!(outcome.accepted());
        assert_eq!(outcome.status(), 202);
        assert_eq!(outcome.body(), "queued");
    }

    #[tokio::test]
    async fn test_rejection_is_not_an_error() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("POST", "/api/data-export/v1/schedule")
            .with_status(500)
            .with_body("server error")
            .create_async()
            .await;

        let backend =
            ExporterBackendClient::with_endpoint(format!("{}/api/data-export/v1/schedule", server.url()));
        let outcome = backend.schedule("Bearer tok1", &request()).await.unwrap();

        assert!(!outcome.accepted());
        assert_eq!(outcome.status(), 500);
        assert_eq!(outcome.body(), "server error");
    }
}
