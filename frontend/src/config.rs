use anyhow::{anyhow, Context};
use serde::{Deserialize, Serialize};
use std::sync::OnceLock;

/// Fixed page size of the admin enquiry listing.
pub const PAGE_SIZE: u64 = 20;

/// localStorage key holding the admin access token.
pub const TOKEN_STORAGE_KEY: &str = "admin_access_token";

pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8000/api";

const ENV_GLOBAL: &str = "__ENQUIRY_CONSOLE_ENV";
const CONFIG_GLOBAL: &str = "__ENQUIRY_CONSOLE_CONFIG";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RuntimeConfig {
    pub api_base_url: Option<String>,
}

static API_BASE_URL: OnceLock<String> = OnceLock::new();

/// Strips surrounding whitespace and trailing slashes so paths can be appended verbatim.
pub fn normalize_base_url(value: &str) -> Option<String> {
    let trimmed = value.trim().trim_end_matches('/');
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

fn read_global_key(global: &str, keys: [&str; 2]) -> Option<String> {
    let w = web_sys::window()?;
    let any = js_sys::Reflect::get(&w, &global.into()).ok()?;
    if any.is_undefined() || any.is_null() {
        return None;
    }
    let obj = js_sys::Object::from(any);
    keys.iter()
        .filter_map(|key| js_sys::Reflect::get(&obj, &(*key).into()).ok())
        .find(|v| !v.is_undefined() && !v.is_null())
        .and_then(|v| v.as_string())
}

fn snapshot_from_globals() -> Option<String> {
    // env.js wins over a previously written config snapshot.
    read_global_key(ENV_GLOBAL, ["API_BASE_URL", "api_base_url"])
        .or_else(|| read_global_key(CONFIG_GLOBAL, ["api_base_url", "API_BASE_URL"]))
        .and_then(|url| normalize_base_url(&url))
}

fn cache_base_url(value: String) -> String {
    API_BASE_URL.get_or_init(|| value).clone()
}

fn write_window_config(url: &str) {
    let Some(w) = web_sys::window() else {
        return;
    };
    let obj = js_sys::Object::new();
    let _ = js_sys::Reflect::set(
        &obj,
        &"api_base_url".into(),
        &wasm_bindgen::JsValue::from_str(url),
    );
    let _ = js_sys::Reflect::set(&w, &CONFIG_GLOBAL.into(), &obj);
}

async fn fetch_runtime_config() -> anyhow::Result<String> {
    let resp = reqwest::get("./config.json")
        .await
        .context("config.json request failed")?;
    if !resp.status().is_success() {
        return Err(anyhow!("config.json returned {}", resp.status()));
    }
    let cfg: RuntimeConfig = resp.json().await.context("config.json is not valid")?;
    cfg.api_base_url
        .as_deref()
        .and_then(normalize_base_url)
        .ok_or_else(|| anyhow!("config.json has no api_base_url"))
}

pub async fn await_api_base_url() -> String {
    if let Some(cached) = API_BASE_URL.get() {
        return cached.clone();
    }
    if let Some(existing) = snapshot_from_globals() {
        return cache_base_url(existing);
    }
    match fetch_runtime_config().await {
        Ok(url) => {
            write_window_config(&url);
            cache_base_url(url)
        }
        Err(err) => {
            log::info!("Using default API base URL ({err:#})");
            cache_base_url(DEFAULT_API_BASE_URL.to_string())
        }
    }
}

pub async fn init() {
    let url = await_api_base_url().await;
    log::info!("Runtime config initialized: api_base_url={url}");
}
