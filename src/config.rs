/// Hosted backend used when nothing else is configured.
pub const DEFAULT_BASE_URL: &str = "https://stock-forecasting-pw04.onrender.com";

/// Build-time override, e.g. `STOCK_FORECAST_API_URL=http://127.0.0.1:5000`.
const BUILD_TIME_BASE_URL: Option<&str> = option_env!("STOCK_FORECAST_API_URL");

/// Resolves the backend base URL once, at client construction. Precedence:
/// explicit caller override, then the build-time environment value, then the
/// hosted fallback. A trailing slash is trimmed so endpoint paths can be
/// appended directly.
pub fn resolve_base_url(override_url: Option<&str>) -> String {
    let url = override_url
        .or(BUILD_TIME_BASE_URL)
        .unwrap_or(DEFAULT_BASE_URL);
    url.trim_end_matches('/').to_string()
}
