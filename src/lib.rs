//! Typed client for the stock forecasting backend (ARIMA / LSTM / meta
//! ensemble forecasts for NSE equities). Wraps the four HTTP endpoints,
//! validates every response against the expected schema at the boundary, and
//! surfaces failures as [`ApiError`] — network, HTTP status, or schema
//! mismatch, never a partially populated value.

pub mod client;
pub mod config;
pub mod error;
pub mod instruments;
pub mod types;

pub use client::StockForecastApi;
pub use config::{resolve_base_url, DEFAULT_BASE_URL};
pub use error::ApiError;
pub use instruments::default_stock_options;
pub use types::*;
