/*
[INPUT]:  HTTP configuration (gateway base URL, timeouts)
[OUTPUT]: Configured reqwest client and normalized JSON responses
[POS]:    HTTP layer - core client implementation
[UPDATE]: When adding connection options or changing response normalization
*/

use reqwest::header::CONTENT_TYPE;
use reqwest::{Client, Method, RequestBuilder, StatusCode, Url};
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::time::Duration;
use tracing::debug;

use crate::http::{GatewayError, Result};

/// Base URL for the e-wallet API gateway
const GATEWAY_BASE_URL: &str = "http://localhost:3000";

/// HTTP client configuration
#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub timeout: Duration,
    pub connect_timeout: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(30),
            connect_timeout: Duration::from_secs(10),
        }
    }
}

/// Main HTTP client for the e-wallet gateway
#[derive(Debug, Clone)]
pub struct GatewayClient {
    http_client: Client,
    base_url: Url,
}

impl GatewayClient {
    /// Create a new client with default configuration
    pub fn new() -> Result<Self> {
        Self::with_config(ClientConfig::default())
    }

    /// Create a new client with custom configuration
    pub fn with_config(config: ClientConfig) -> Result<Self> {
        Self::with_config_and_base_url(config, GATEWAY_BASE_URL)
    }

    /// Create a client against an explicit gateway URL (tests, staging)
    pub fn with_config_and_base_url(config: ClientConfig, base_url: &str) -> Result<Self> {
        let http_client = Client::builder()
            .timeout(config.timeout)
            .connect_timeout(config.connect_timeout)
            .build()?;

        Ok(Self {
            http_client,
            base_url: Url::parse(base_url)?,
        })
    }

    /// Get the configured gateway base URL
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Build request builder for gateway endpoints
    pub(crate) fn gateway_request(&self, method: Method, endpoint: &str) -> Result<RequestBuilder> {
        let url = self.base_url.join(endpoint)?;
        debug!(%method, %url, "gateway request");
        Ok(self
            .http_client
            .request(method, url)
            .header(CONTENT_TYPE, "application/json"))
    }

    /// Build request builder carrying a bearer token
    pub(crate) fn gateway_request_with_token(
        &self,
        method: Method,
        endpoint: &str,
        token: &str,
    ) -> Result<RequestBuilder> {
        Ok(self.gateway_request(method, endpoint)?.bearer_auth(token))
    }

    /// Send a request and normalize the gateway response.
    ///
    /// Success (2xx, JSON body) deserializes into `T`. Failure statuses are
    /// mapped to [`GatewayError::Api`] carrying the body's `error` or
    /// `message` text; undecodable bodies fall back to the status line on
    /// failure statuses and to [`GatewayError::InvalidResponse`] on 2xx.
    pub(crate) async fn send_json<T: DeserializeOwned>(&self, builder: RequestBuilder) -> Result<T> {
        let response = builder.send().await?;
        let status = response.status();
        let bytes = response.bytes().await?;
        debug!(status = status.as_u16(), body_len = bytes.len(), "gateway response");

        let body: Value = match serde_json::from_slice(&bytes) {
            Ok(body) => body,
            Err(_) if !status.is_success() => {
                return Err(GatewayError::api_error(status, status_line_message(status)));
            }
            Err(_) => {
                return Err(GatewayError::InvalidResponse(
                    "server did not return JSON".to_string(),
                ));
            }
        };

        if !status.is_success() {
            return Err(GatewayError::api_error(status, failure_message(&body)));
        }

        Ok(serde_json::from_value(body)?)
    }
}

/// Status line text for failure responses without a JSON body
fn status_line_message(status: StatusCode) -> &'static str {
    status.canonical_reason().unwrap_or("server error")
}

/// First non-empty of the body's `error` field, `message` field, else fallback
fn failure_message(body: &Value) -> String {
    ["error", "message"]
        .into_iter()
        .find_map(|field| {
            body.get(field)
                .and_then(Value::as_str)
                .filter(|text| !text.is_empty())
        })
        .unwrap_or("request failed")
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use serde_json::json;

    #[rstest]
    #[case(json!({"error": "invalid token"}), "invalid token")]
    #[case(json!({"error": "invalid token", "message": "ignored"}), "invalid token")]
    #[case(json!({"message": "insufficient balance"}), "insufficient balance")]
    #[case(json!({"error": "", "message": "insufficient balance"}), "insufficient balance")]
    #[case(json!({"detail": "something else"}), "request failed")]
    #[case(json!({"error": 42}), "request failed")]
    #[case(json!([1, 2, 3]), "request failed")]
    fn test_failure_message_extraction(#[case] body: Value, #[case] expected: &str) {
        assert_eq!(failure_message(&body), expected);
    }

    #[test]
    fn test_status_line_message() {
        assert_eq!(
            status_line_message(StatusCode::INTERNAL_SERVER_ERROR),
            "Internal Server Error"
        );
        let unnamed = StatusCode::from_u16(599).unwrap();
        assert_eq!(status_line_message(unnamed), "server error");
    }

    #[test]
    fn test_base_url_join_keeps_host() {
        let client = GatewayClient::with_config_and_base_url(
            ClientConfig::default(),
            "http://localhost:3000",
        )
        .unwrap();

        let url = client.base_url().join("/api/users/login").unwrap();
        assert_eq!(url.as_str(), "http://localhost:3000/api/users/login");
    }
}
