//! Build-time client configuration.
//!
//! The backend base URL is captured from `COSTLENS_API_URL` when the crate is
//! compiled, so the same value is baked into both the WASM bundle and the SSR
//! build.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

pub const DEFAULT_API_URL: &str = "http://localhost:8000";

/// Base URL of the REST backend, without a trailing slash.
pub fn api_base_url() -> &'static str {
    normalize_base_url(option_env!("COSTLENS_API_URL").unwrap_or(DEFAULT_API_URL))
}

fn normalize_base_url(raw: &str) -> &str {
    let trimmed = raw.trim().trim_end_matches('/');
    if trimmed.is_empty() { DEFAULT_API_URL } else { trimmed }
}

/// Join the backend base URL with an absolute endpoint path.
pub fn api_url(path: &str) -> String {
    format!("{}{path}", api_base_url())
}
