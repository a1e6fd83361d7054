//! HTTP client for the internal prediction service.

use std::time::Duration;

use serde_json::Value;

use crate::config::schema::GatewayConfig;
use crate::http::request::X_REQUEST_ID;
use crate::upstream::error::UpstreamError;

/// Client for the traffic prediction service.
///
/// Holds a pooled `reqwest::Client`; each inbound proxy request drives
/// exactly one outbound GET through it.
#[derive(Clone)]
pub struct PredictionClient {
    http: reqwest::Client,
    base_url: String,
}

impl PredictionClient {
    /// Build a client from the gateway configuration.
    pub fn new(config: &GatewayConfig) -> Result<Self, UpstreamError> {
        let http = reqwest::Client::builder()
            .connect_timeout(Duration::from_secs(config.timeouts.connect_secs))
            .timeout(Duration::from_secs(config.timeouts.upstream_secs))
            .build()
            .map_err(UpstreamError::Build)?;

        Ok(Self {
            http,
            base_url: config.upstream.base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Fetch traffic predictions for the next `days_ahead` days.
    ///
    /// `days_ahead` is forwarded unchecked; range enforcement is the
    /// prediction service's concern. The gateway request ID is propagated
    /// on the outbound request for correlation.
    pub async fn traffic(
        &self,
        days_ahead: i64,
        request_id: &str,
    ) -> Result<Value, UpstreamError> {
        let url = format!("{}/predictions/traffic?days_ahead={}", self.base_url, days_ahead);

        tracing::debug!(request_id = %request_id, url = %url, "Requesting upstream predictions");

        let response = self
            .http
            .get(&url)
            .header(X_REQUEST_ID, request_id)
            .send()
            .await
            .map_err(|source| UpstreamError::Transport {
                url: url.clone(),
                source,
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(UpstreamError::Status {
                status: status.as_u16(),
                url,
            });
        }

        response
            .json::<Value>()
            .await
            .map_err(|source| UpstreamError::Decode { url, source })
    }

    /// The configured base URL, without trailing slash.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}
