use serde::{Deserialize, Serialize};
use std::sync::OnceLock;

pub const DEFAULT_API_BASE_URL: &str = "http://localhost:3000/api";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RuntimeConfig {
    pub api_base_url: Option<String>,
}

static API_BASE_URL: OnceLock<String> = OnceLock::new();

#[cfg(target_arch = "wasm32")]
fn get_from_env_js() -> Option<String> {
    // Optional global: window.__DEVLOG_ENV = { API_BASE_URL: "..." }
    let window = web_sys::window()?;
    let any = js_sys::Reflect::get(&window, &"__DEVLOG_ENV".into()).ok()?;
    if any.is_undefined() || any.is_null() {
        return None;
    }
    let obj = js_sys::Object::from(any);
    js_sys::Reflect::get(&obj, &"API_BASE_URL".into())
        .ok()
        .filter(|v| !v.is_undefined() && !v.is_null())
        .or_else(|| js_sys::Reflect::get(&obj, &"api_base_url".into()).ok())
        .and_then(|v| v.as_string())
}

#[cfg(not(target_arch = "wasm32"))]
fn get_from_env_js() -> Option<String> {
    None
}

#[cfg(target_arch = "wasm32")]
async fn fetch_runtime_config() -> anyhow::Result<RuntimeConfig> {
    let page = web_sys::window()
        .and_then(|w| w.location().href().ok())
        .ok_or_else(|| anyhow::anyhow!("no page location"))?;
    let url = reqwest::Url::parse(&page)?.join("config.json")?;
    let response = reqwest::get(url).await?;
    if !response.status().is_success() {
        anyhow::bail!("config.json returned {}", response.status());
    }
    Ok(response.json::<RuntimeConfig>().await?)
}

#[cfg(not(target_arch = "wasm32"))]
async fn fetch_runtime_config() -> anyhow::Result<RuntimeConfig> {
    Ok(RuntimeConfig::default())
}

/// Picks the first configured base URL, trimming a trailing slash.
pub fn choose_base_url(from_env: Option<String>, from_file: Option<String>) -> String {
    from_env
        .into_iter()
        .chain(from_file)
        .map(|url| url.trim().trim_end_matches('/').to_string())
        .find(|url| !url.is_empty())
        .unwrap_or_else(|| DEFAULT_API_BASE_URL.to_string())
}

pub async fn await_api_base_url() -> String {
    if let Some(cached) = API_BASE_URL.get() {
        return cached.clone();
    }
    let from_env = get_from_env_js();
    let from_file = if from_env.is_some() {
        None
    } else {
        match fetch_runtime_config().await {
            Ok(cfg) => cfg.api_base_url,
            Err(err) => {
                log::debug!("runtime config unavailable: {err}");
                None
            }
        }
    };
    let url = choose_base_url(from_env, from_file);
    API_BASE_URL.get_or_init(|| url).clone()
}

pub async fn init() {
    let url = await_api_base_url().await;
    log::info!("API base URL: {url}");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn env_global_wins_over_config_file() {
        let url = choose_base_url(
            Some("https://api.example.com/api/".into()),
            Some("https://file.example.com/api".into()),
        );
        assert_eq!(url, "https://api.example.com/api");
    }

    #[test]
    fn blank_values_fall_through_to_default() {
        assert_eq!(
            choose_base_url(Some("  ".into()), None),
            DEFAULT_API_BASE_URL
        );
        assert_eq!(
            choose_base_url(None, Some("/api".into())),
            "/api"
        );
    }

    #[test]
    fn runtime_config_accepts_missing_field() {
        let cfg: RuntimeConfig = serde_json::from_str("{}").unwrap();
        assert!(cfg.api_base_url.is_none());
    }
}
