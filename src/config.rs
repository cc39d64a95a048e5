//! Process-wide API configuration: base URL and bearer token.
//! Owned by the app shell; the API client reads it on every request.

use once_cell::sync::Lazy;
use std::sync::Mutex;

const DEFAULT_BASE_URL: &str = "http://127.0.0.1:8000/api";

struct ApiConfig {
    base_url: String,
    token: Option<String>,
}

static CONFIG: Lazy<Mutex<ApiConfig>> = Lazy::new(|| {
    Mutex::new(ApiConfig {
        base_url: DEFAULT_BASE_URL.to_string(),
        token: None,
    })
});

pub fn base_url() -> String {
    CONFIG.lock().unwrap().base_url.clone()
}

/// Trailing slashes are stripped so endpoint paths can always be appended
/// with a single `/`.
pub fn set_base_url(url: &str) {
    CONFIG.lock().unwrap().base_url = url.trim_end_matches('/').to_string();
}

pub fn token() -> Option<String> {
    CONFIG.lock().unwrap().token.clone()
}

pub fn set_token(token: Option<&str>) {
    CONFIG.lock().unwrap().token = token.map(String::from);
}
