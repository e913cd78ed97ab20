//! Runtime configuration injected by the hosting page through `window.ENV`

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::JsValue;

const DEFAULT_LATEST_PATH: &str = "/api/latest";
const DEFAULT_FALLBACK_URL: &str = "final.json";
const DEFAULT_DATA_REFRESH_MS: u32 = 5_000;
const DEFAULT_CLOCK_REFRESH_MS: u32 = 1_000;

/// Dashboard configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DashboardConfig {
    /// Prefix for the live-data endpoint; empty means same origin
    pub api_url: String,
    pub latest_path: String,
    /// Static snapshot tried when the live endpoint is unreachable
    pub fallback_url: String,
    pub data_interval_ms: u32,
    pub clock_interval_ms: u32,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            api_url: String::new(),
            latest_path: DEFAULT_LATEST_PATH.to_string(),
            fallback_url: DEFAULT_FALLBACK_URL.to_string(),
            data_interval_ms: DEFAULT_DATA_REFRESH_MS,
            clock_interval_ms: DEFAULT_CLOCK_REFRESH_MS,
        }
    }
}

impl DashboardConfig {
    /// Load configuration from window.ENV, falling back to defaults per key
    pub fn from_env() -> Self {
        let defaults = Self::default();

        Self {
            api_url: env_string("API_URL").unwrap_or(defaults.api_url),
            latest_path: env_string("LATEST_PATH").unwrap_or(defaults.latest_path),
            fallback_url: env_string("FALLBACK_URL").unwrap_or(defaults.fallback_url),
            data_interval_ms: env_string("DATA_REFRESH_MS")
                .and_then(|v| parse_interval(&v))
                .unwrap_or(defaults.data_interval_ms),
            clock_interval_ms: env_string("CLOCK_REFRESH_MS")
                .and_then(|v| parse_interval(&v))
                .unwrap_or(defaults.clock_interval_ms),
        }
    }

    /// Full URL of the live-data endpoint
    pub fn latest_url(&self) -> String {
        format!("{}{}", self.api_url, self.latest_path)
    }
}

/// Intervals must be positive milliseconds
fn parse_interval(raw: &str) -> Option<u32> {
    raw.trim().parse::<u32>().ok().filter(|ms| *ms > 0)
}

/// Read a string value from window.ENV
fn env_string(key: &str) -> Option<String> {
    #[cfg(target_arch = "wasm32")]
    {
        if let Some(window) = web_sys::window() {
            if let Ok(env) = js_sys::Reflect::get(&window, &JsValue::from_str("ENV")) {
                if !env.is_undefined() {
                    if let Ok(value) = js_sys::Reflect::get(&env, &JsValue::from_str(key)) {
                        if let Some(value) = value.as_string() {
                            return Some(value);
                        }
                        // Numbers are accepted for the interval keys
                        if let Some(number) = value.as_f64() {
                            return Some(format!("{}", number as i64));
                        }
                    }
                }
            }
        }
    }

    let _ = key;
    None
}
