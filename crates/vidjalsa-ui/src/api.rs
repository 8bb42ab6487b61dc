//! Browser bindings for the backend call and the runtime configuration.

use gloo_net::http::Request;
use leptos::logging::{log, warn};
use serde_json::Value;
use vidjalsa_core::{
    AppConfig, Error, ProcessVideosRequest, ProcessVideosResponse, Result, check_status,
};
use wasm_bindgen::JsValue;

/// Global the hosting page may set to override configuration defaults.
pub const CONFIG_GLOBAL: &str = "__VIDJALSA_CONFIG__";

/// Ask the backend to turn the selected videos into a blog.
///
/// Resolves once processing has finished, which can take minutes. There is no
/// timeout and no retry.
pub async fn process_videos(
    url: &str,
    request: &ProcessVideosRequest,
) -> Result<ProcessVideosResponse> {
    log!(
        "=== PROCESS VIDEOS START: {} videos, topic '{}' ===",
        request.urls.len(),
        request.topic
    );

    let response = Request::post(url)
        .json(request)
        .map_err(|e| Error::Request(e.to_string()))?
        .send()
        .await
        .map_err(|e| Error::Request(e.to_string()))?;

    check_status(response.status())?;

    let body = response
        .text()
        .await
        .map_err(|e| Error::Request(e.to_string()))?;
    let parsed = ProcessVideosResponse::from_json(&body)?;

    log!(
        "=== PROCESS VIDEOS SUCCESS: deployed to {} ===",
        parsed.deployment_url
    );
    Ok(parsed)
}

/// Read configuration overrides from `window.__VIDJALSA_CONFIG__`.
///
/// Falls back to defaults when the global is absent or invalid.
pub fn load_config() -> AppConfig {
    let overrides = web_sys::window()
        .and_then(|window| js_sys::Reflect::get(&window, &JsValue::from_str(CONFIG_GLOBAL)).ok())
        .filter(|raw| !raw.is_undefined() && !raw.is_null())
        .and_then(|raw| match serde_wasm_bindgen::from_value::<Value>(raw) {
            Ok(value) => Some(value),
            Err(e) => {
                warn!("Ignoring {CONFIG_GLOBAL}: {e}");
                None
            }
        });

    config_from_overrides(overrides)
}

/// Build the configuration from an optional override document.
pub fn config_from_overrides(overrides: Option<Value>) -> AppConfig {
    let Some(overrides) = overrides else {
        return AppConfig::default();
    };

    match AppConfig::from_json(&overrides.to_string()) {
        Ok(config) => config,
        Err(e) => {
            warn!("Invalid {CONFIG_GLOBAL}, using defaults: {e}");
            AppConfig::default()
        }
    }
}
