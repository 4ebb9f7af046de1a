use serde::{Deserialize, Serialize};
use std::sync::OnceLock;
use std::time::Duration;

pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8080/api";
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);
pub const TOKEN_STORAGE_KEY: &str = "token";
pub const LOGIN_PATH: &str = "/login";
pub const DASHBOARD_PATH: &str = "/dashboard";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RuntimeConfig {
    pub api_base_url: Option<String>,
}

static API_BASE_URL: OnceLock<String> = OnceLock::new();

fn cache_base_url(value: &str) -> String {
    let value = value.trim_end_matches('/').to_string();
    let _ = API_BASE_URL.set(value.clone());
    API_BASE_URL.get().cloned().unwrap_or(value)
}

#[cfg(target_arch = "wasm32")]
mod browser {
    use super::RuntimeConfig;

    fn read_global(global: &str, keys: [&str; 2]) -> Option<String> {
        // Expect an optional global object, e.g. window.__VACATION_ENV = { API_BASE_URL: "..." }
        let window = web_sys::window()?;
        let any = js_sys::Reflect::get(&window, &global.into()).ok()?;
        if any.is_undefined() || any.is_null() {
            return None;
        }
        let obj = js_sys::Object::from(any);
        keys.iter()
            .filter_map(|key| js_sys::Reflect::get(&obj, &(*key).into()).ok())
            .find(|value| !value.is_undefined() && !value.is_null())
            .and_then(|value| value.as_string())
    }

    pub fn snapshot_from_globals() -> Option<String> {
        read_global("__VACATION_ENV", ["API_BASE_URL", "api_base_url"])
            .or_else(|| read_global("__VACATION_CONFIG", ["api_base_url", "API_BASE_URL"]))
    }

    pub fn write_window_config(cfg: &RuntimeConfig) {
        let (Some(url), Some(window)) = (cfg.api_base_url.as_ref(), web_sys::window()) else {
            return;
        };
        let obj = js_sys::Object::new();
        let _ = js_sys::Reflect::set(
            &obj,
            &"api_base_url".into(),
            &wasm_bindgen::JsValue::from_str(url),
        );
        let _ = js_sys::Reflect::set(&window, &"__VACATION_CONFIG".into(), &obj);
    }

    pub async fn fetch_runtime_config() -> Option<RuntimeConfig> {
        let origin = web_sys::window()?.location().origin().ok()?;
        let resp = reqwest::get(format!("{}/config.json", origin)).await.ok()?;
        if !resp.status().is_success() {
            return None;
        }
        resp.json::<RuntimeConfig>().await.ok()
    }
}

#[cfg(target_arch = "wasm32")]
pub async fn await_api_base_url() -> String {
    if let Some(cached) = API_BASE_URL.get() {
        return cached.clone();
    }
    if let Some(existing) = browser::snapshot_from_globals() {
        return cache_base_url(&existing);
    }
    if let Some(cfg) = browser::fetch_runtime_config().await {
        browser::write_window_config(&cfg);
        if let Some(url) = cfg.api_base_url {
            return cache_base_url(&url);
        }
    }
    cache_base_url(DEFAULT_API_BASE_URL)
}

#[cfg(not(target_arch = "wasm32"))]
pub async fn await_api_base_url() -> String {
    match API_BASE_URL.get() {
        Some(cached) => cached.clone(),
        None => cache_base_url(DEFAULT_API_BASE_URL),
    }
}

pub async fn init() {
    let base_url = await_api_base_url().await;
    log::info!("API base URL resolved to {}", base_url);
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;

    #[tokio::test]
    async fn host_builds_fall_back_to_default_base_url() {
        let url = await_api_base_url().await;
        assert_eq!(url, DEFAULT_API_BASE_URL);
        assert_eq!(await_api_base_url().await, url);
    }

    #[test]
    fn runtime_config_parses_optional_base_url() {
        let cfg: RuntimeConfig =
            serde_json::from_str(r#"{"api_base_url":"https://leave.example.com/api"}"#).unwrap();
        assert_eq!(
            cfg.api_base_url.as_deref(),
            Some("https://leave.example.com/api")
        );
        let empty: RuntimeConfig = serde_json::from_str("{}").unwrap();
        assert!(empty.api_base_url.is_none());
    }
}
