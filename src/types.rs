use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Allowed forecast horizon at the form layer. The client itself does not
/// clamp; callers run [`ForecastRequestParams::validate`] before submitting.
pub const FORECAST_DAYS_RANGE: std::ops::RangeInclusive<u32> = 1..=30;

/// Horizon sent when the caller leaves `forecast_days` unset.
pub const DEFAULT_FORECAST_DAYS: u32 = 7;

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Stock {
    pub symbol: String,
    pub name: String,
}

/// One dated close price, used both for historical series and predictions.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct PricePoint {
    pub date: NaiveDate,
    pub value: f64,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct ModelMetrics {
    pub rmse: f64,
    pub mae: f64,
    pub r2: f64,
    /// Percentage in [0, 100] as reported by the backend, not clamped here.
    pub accuracy_pct: f64,
}

/// Output of a single model run. `predictions` is chronological and is
/// expected to match the requested horizon; `historical` is the trailing
/// close series the backend trained against, most recent last.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct ModelResult {
    pub predictions: Vec<PricePoint>,
    pub historical: Vec<PricePoint>,
    pub metrics: ModelMetrics,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct DataRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
    pub records: u64,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct ForecastModels {
    pub meta: ModelResult,
    pub arima: ModelResult,
    pub lstm: ModelResult,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct ForecastResponse {
    pub success: bool,
    /// Provenance tag: "angel_one", "yfinance", "mock", ...
    pub data_source: String,
    /// Opaque exchange quote; null or absent when no live session was used.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub live_quote: Option<serde_json::Value>,
    pub latest_close: f64,
    pub data_range: DataRange,
    pub results: ForecastModels,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct HealthResponse {
    pub status: String,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct StocksResponse {
    pub success: bool,
    pub stocks: Vec<Stock>,
}

/// Caller-facing forecast request. All optional fields keep an "unset" state
/// distinct from any concrete value: the backend treats a missing key
/// differently from an explicit false/empty one.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ForecastRequestParams {
    /// Exchange-qualified instrument code, e.g. "RELIANCE-EQ".
    pub symbol: String,
    pub forecast_days: Option<u32>,
    /// Six-digit Angel One TOTP, when the caller wants a live session.
    pub totp: Option<String>,
    pub use_angelone: Option<bool>,
}

impl ForecastRequestParams {
    pub fn new(symbol: impl Into<String>) -> Self {
        Self {
            symbol: symbol.into(),
            ..Self::default()
        }
    }

    /// Form-layer sanity check. Mirrors what the dashboard enforces before
    /// submitting; the client methods never call this themselves.
    pub fn validate(&self) -> Result<(), String> {
        if self.symbol.trim().is_empty() {
            return Err("Symbol must not be empty".to_string());
        }
        if let Some(days) = self.forecast_days {
            if !FORECAST_DAYS_RANGE.contains(&days) {
                return Err(format!(
                    "Forecast horizon must be between {} and {} days, got {}",
                    FORECAST_DAYS_RANGE.start(),
                    FORECAST_DAYS_RANGE.end(),
                    days
                ));
            }
        }
        if let Some(totp) = &self.totp {
            if totp.len() != 6 || !totp.chars().all(|c| c.is_ascii_digit()) {
                return Err("TOTP must be exactly 6 digits".to_string());
            }
        }
        Ok(())
    }
}

/// Wire body for the forecast endpoints. Optional keys are omitted entirely
/// when unset, never serialized as null.
#[derive(Debug, Serialize)]
pub(crate) struct ForecastRequestBody<'a> {
    pub symbol: &'a str,
    pub forecast_days: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub totp: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub use_angelone: Option<bool>,
}

impl<'a> ForecastRequestBody<'a> {
    pub fn from_params(params: &'a ForecastRequestParams) -> Self {
        Self {
            symbol: &params.symbol,
            forecast_days: params.forecast_days.unwrap_or(DEFAULT_FORECAST_DAYS),
            totp: params.totp.as_deref(),
            use_angelone: params.use_angelone,
        }
    }

    /// Same body for the mock endpoint, which never receives `use_angelone`.
    pub fn without_angelone(mut self) -> Self {
        self.use_angelone = None;
        self
    }
}
