//! API Configuration
//!
//! The deployment sets the API origin on a window global before the WASM
//! bundle loads:
//!
//! ```html
//! <script>window.__PALCARE_API_BASE__ = "https://api.example.org";</script>
//! ```
//!
//! When the global is absent the app talks to its own origin.

use wasm_bindgen::JsValue;

const API_BASE_GLOBAL: &str = "__PALCARE_API_BASE__";

/// Base URL for API requests, without a trailing slash.
pub fn api_base() -> String {
    let base = web_sys::window()
        .and_then(|w| js_sys::Reflect::get(&JsValue::from(w), &JsValue::from_str(API_BASE_GLOBAL)).ok())
        .and_then(|v| v.as_string())
        .unwrap_or_default();
    base.trim_end_matches('/').to_string()
}

/// Join the configured base with an absolute API path.
pub fn api_url(path: &str) -> String {
    format!("{}{}", api_base(), path)
}
