use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::config::resolve_base_url;
use crate::error::ApiError;
use crate::types::{
    ForecastRequestBody, ForecastRequestParams, ForecastResponse, HealthResponse, StocksResponse,
};

/// Typed client for the forecasting backend. One instance per base URL;
/// concurrent calls share nothing mutable, and `set_base_url` takes
/// `&mut self` so it cannot race an in-flight request.
pub struct StockForecastApi {
    base_url: String,
    http: reqwest::Client,
}

impl Default for StockForecastApi {
    fn default() -> Self {
        Self::new()
    }
}

impl StockForecastApi {
    /// Client against the configured backend (build-time env value or the
    /// hosted fallback, see [`crate::config::resolve_base_url`]).
    pub fn new() -> Self {
        Self {
            base_url: resolve_base_url(None),
            http: reqwest::Client::new(),
        }
    }

    /// Client against an explicit backend, overriding any configured value.
    pub fn with_base_url(url: impl AsRef<str>) -> Self {
        Self {
            base_url: resolve_base_url(Some(url.as_ref())),
            http: reqwest::Client::new(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Repoints the client at another backend. Must not be called while
    /// requests are in flight; there is no cross-call visibility guarantee.
    pub fn set_base_url(&mut self, url: impl AsRef<str>) {
        self.base_url = url.as_ref().trim_end_matches('/').to_string();
    }

    /// `GET /health`
    pub async fn get_health(&self) -> Result<HealthResponse, ApiError> {
        self.get_json("/health").await
    }

    /// `GET /api/stocks`
    pub async fn get_stocks(&self) -> Result<StocksResponse, ApiError> {
        self.get_json("/api/stocks").await
    }

    /// `POST /api/forecast`. The body carries `symbol` and `forecast_days`
    /// (7 when unset); `totp` and `use_angelone` only when the caller
    /// supplied them.
    pub async fn get_forecast(
        &self,
        params: &ForecastRequestParams,
    ) -> Result<ForecastResponse, ApiError> {
        let body = ForecastRequestBody::from_params(params);
        self.post_json("/api/forecast", &body).await
    }

    /// `POST /api/forecast-mock`. Same contract as [`Self::get_forecast`]
    /// except `use_angelone` is never forwarded.
    pub async fn get_mock_forecast(
        &self,
        params: &ForecastRequestParams,
    ) -> Result<ForecastResponse, ApiError> {
        let body = ForecastRequestBody::from_params(params).without_angelone();
        self.post_json("/api/forecast-mock", &body).await
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let url = format!("{}{}", self.base_url, path);
        tracing::debug!(method = "GET", %url, "API request");
        let request = self.http.get(&url);
        self.execute(request, &url).await
    }

    async fn post_json<T: DeserializeOwned>(
        &self,
        path: &str,
        body: &impl Serialize,
    ) -> Result<T, ApiError> {
        let url = format!("{}{}", self.base_url, path);
        tracing::debug!(method = "POST", %url, "API request");
        // .json() sets Content-Type: application/json on the request.
        let request = self.http.post(&url).json(body);
        self.execute(request, &url).await
    }

    /// Shared response handling: transport failures become `Network`, non-2xx
    /// becomes `Http` with the body captured best-effort, and a 2xx body is
    /// parsed then validated against the operation's expected shape. A shape
    /// mismatch fails the whole call; no partial value is ever produced.
    async fn execute<T: DeserializeOwned>(
        &self,
        request: reqwest::RequestBuilder,
        url: &str,
    ) -> Result<T, ApiError> {
        let response = request.send().await.map_err(|source| {
            tracing::debug!(error = %source, %url, "transport failure");
            ApiError::Network { source }
        })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.ok();
            tracing::debug!(status = status.as_u16(), %url, "API error status");
            return Err(ApiError::Http {
                status: status.as_u16(),
                status_text: status.canonical_reason().unwrap_or("").to_string(),
                body,
            });
        }

        let text = response
            .text()
            .await
            .map_err(|source| ApiError::Network { source })?;
        let raw: serde_json::Value = serde_json::from_str(&text).map_err(|e| {
            tracing::debug!(error = %e, %url, "response body is not JSON");
            ApiError::Schema {
                detail: format!("response body is not valid JSON: {}", e),
            }
        })?;
        serde_json::from_value(raw).map_err(|e| {
            tracing::debug!(error = %e, %url, "response failed schema validation");
            ApiError::Schema {
                detail: e.to_string(),
            }
        })
    }
}
