//! HTTP client for the Freshservice REST API.
//!
//! This module provides the `FreshClient` struct, which sends one
//! authenticated request per [`RequestPlan`] and classifies the outcome.
//! Nothing is retried; a failure is reported to the caller as-is.
//!
//! # Security
//!
//! The API key is never logged. All error messages are sanitized before logging.

use std::time::Duration;

use reqwest::header::{ACCEPT, LINK};
use reqwest::{Client, StatusCode};
use serde_json::Value;

use crate::config::Config;
use crate::error::FreshError;
use crate::models::{PageLinks, Reply};
use crate::tools::{RequestPlan, Verb, API_PREFIX};

/// Basic auth password Freshservice expects alongside an API key.
const API_KEY_PASSWORD: &str = "X";

/// HTTP client for the Freshservice API.
///
/// Handles authentication, request formatting, and response classification.
///
/// # Example
///
/// ```ignore
/// let config = Config::from_env()?;
/// let client = FreshClient::new(&config)?;
/// let reply = client.execute(&plan).await?;
/// ```
#[derive(Clone)]
pub struct FreshClient {
    /// The underlying HTTP client (cloning is cheap).
    http: Client,

    /// Account base URL (e.g., `https://acme.freshservice.com`).
    base_url: String,

    /// API key for authentication.
    /// SECURITY: Never log this value!
    api_key: String,

    timeout: Duration,
}

impl FreshClient {
    /// Creates a new client from configuration.
    ///
    /// # Errors
    ///
    /// Returns `FreshError::HttpClient` if the HTTP client fails to initialize.
    pub fn new(config: &Config) -> Result<Self, FreshError> {
        let timeout = Duration::from_secs(config.timeout_secs);
        let http = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(FreshError::HttpClient)?;

        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            api_key: config.api_key.clone(),
            timeout,
        })
    }

    /// Account base URL requests are sent to.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Returns a reference to the API key for sanitization purposes.
    ///
    /// This should ONLY be used for sanitizing error messages, never for logging.
    pub(crate) fn api_key_for_sanitization(&self) -> &str {
        &self.api_key
    }

    /// Sends the planned request and classifies the response.
    ///
    /// # Errors
    ///
    /// - `Transport` if no HTTP response was received (including timeouts)
    /// - `Remote` for any non-2xx status, with the raw body
    /// - `Decode` if a 2xx body is not valid JSON
    pub async fn execute(&self, plan: &RequestPlan) -> Result<Reply, FreshError> {
        let target = plan.target();
        let url = format!("{}{}", self.base_url, target);
        let operation = format!("{} {}", plan.verb, plan.path);

        tracing::debug!(
            tool = plan.tool,
            method = %plan.verb,
            path = %plan.path,
            "Making Freshservice API request"
        );

        let mut req = self
            .http
            .request(plan.verb.method(), &url)
            .basic_auth(&self.api_key, Some(API_KEY_PASSWORD))
            .header(ACCEPT, "application/json");

        if let Some(body) = &plan.body {
            req = req.json(body);
        }

        let response = req.send().await.map_err(|source| {
            if source.is_timeout() {
                tracing::warn!(
                    operation = %operation,
                    timeout_secs = self.timeout.as_secs(),
                    "Freshservice request timed out"
                );
            }
            FreshError::Transport {
                operation: operation.clone(),
                source,
            }
        })?;

        let status = response.status();
        let links = response
            .headers()
            .get(LINK)
            .and_then(|v| v.to_str().ok())
            .map(PageLinks::from_link_header)
            .unwrap_or_default();

        let body = response
            .text()
            .await
            .map_err(|source| FreshError::Transport {
                operation: operation.clone(),
                source,
            })?;

        tracing::trace!(status = %status, body = %body, "Freshservice API response");

        if !status.is_success() {
            return Err(self.remote_error(status, body, &operation));
        }

        let payload = if body.trim().is_empty() {
            Value::Null
        } else {
            serde_json::from_str(&body).map_err(|source| FreshError::Decode { status, source })?
        };

        Ok(Reply {
            status: status.as_u16(),
            payload,
            links,
        })
    }

    fn remote_error(&self, status: StatusCode, body: String, operation: &str) -> FreshError {
        tracing::warn!(
            operation = %operation,
            status = %status,
            "Freshservice returned an error status"
        );
        if matches!(status, StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN) {
            tracing::debug!("Credentials were rejected; check FRESHSERVICE_APIKEY");
        }
        FreshError::Remote { status, body }
    }

    /// Tests connectivity to the Freshservice account.
    ///
    /// Lists a single agent to verify the host is reachable and the API key
    /// is accepted.
    ///
    /// # Errors
    ///
    /// Returns `FreshError::ConnectionTest` if the connection fails,
    /// with details about the failure reason.
    pub async fn test_connection(&self) -> Result<(), FreshError> {
        tracing::debug!("Testing connection to Freshservice");

        let plan = RequestPlan {
            tool: "connection_test",
            verb: Verb::Get,
            path: format!("{}/agents", API_PREFIX),
            query: vec![("per_page".to_string(), "1".to_string())],
            body: None,
        };

        match self.execute(&plan).await {
            Ok(_) => {
                tracing::info!("Connection test successful");
                Ok(())
            }
            Err(FreshError::Remote { status, .. })
                if matches!(status, StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN) =>
            {
                Err(FreshError::connection_test(
                    "Authentication failed - verify FRESHSERVICE_APIKEY is correct",
                ))
            }
            Err(e) if e.is_timeout() => Err(FreshError::connection_test(format!(
                "Connection timed out after {:?} - verify FRESHSERVICE_DOMAIN is correct and reachable",
                self.timeout
            ))),
            Err(e @ FreshError::Transport { .. }) => {
                let message = e.sanitized_display(&self.api_key);
                Err(FreshError::connection_test(format!(
                    "{} - verify FRESHSERVICE_DOMAIN is correct",
                    message
                )))
            }
            Err(e) => Err(FreshError::connection_test(e.sanitized_display(&self.api_key))),
        }
    }
}
