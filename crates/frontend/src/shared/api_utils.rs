//! Loading of the JSON documents the dashboard is configured with.
//!
//! Both documents are static files served next to the wasm bundle, so plain
//! relative paths are used.

use contracts::dashboard::DashboardState;
use contracts::shared::Configuration;
use gloo_net::http::Request;
use serde::de::DeserializeOwned;

const CONFIG_URL: &str = "/config.json";
const DASHBOARD_STATE_URL: &str = "/data/dashboard.json";

/// Получить конфигурацию приложения
pub async fn fetch_configuration() -> Result<Configuration, String> {
    fetch_json(CONFIG_URL).await
}

/// Получить даты и список стран для шапки
pub async fn fetch_dashboard_state() -> Result<DashboardState, String> {
    fetch_json(DASHBOARD_STATE_URL).await
}

async fn fetch_json<T: DeserializeOwned>(url: &str) -> Result<T, String> {
    let response = Request::get(url)
        .send()
        .await
        .map_err(|e| format!("Request to {} failed: {}", url, e))?;

    if !response.ok() {
        return Err(format!("HTTP error {} for {}", response.status(), url));
    }

    response
        .json::<T>()
        .await
        .map_err(|e| format!("Failed to parse {}: {}", url, e))
}
