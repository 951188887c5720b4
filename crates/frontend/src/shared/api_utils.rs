//! API utilities for client-server communication
//!
//! The app is served by the same host that owns the API, so URLs are built
//! from the current window location.

use gloo_net::http::Request;
use serde::de::DeserializeOwned;
use serde::Serialize;

/// Origin of the current page ("https://example.com"), empty string when the
/// window is not available.
pub fn api_base() -> String {
    let window = match web_sys::window() {
        Some(w) => w,
        None => return String::new(),
    };
    window.location().origin().unwrap_or_default()
}

/// Build a full URL from an absolute path (e.g. "/estoque/api/historico/3").
pub fn api_url(path: &str) -> String {
    format!("{}{}", api_base(), path)
}

/// GET a JSON payload.
pub async fn fetch_json<T: DeserializeOwned>(path: &str) -> Result<T, String> {
    let resp = Request::get(&api_url(path))
        .header("Accept", "application/json")
        .send()
        .await
        .map_err(|e| e.to_string())?;
    if !resp.ok() {
        return Err(format!("HTTP {}", resp.status()));
    }
    resp.json().await.map_err(|e| e.to_string())
}

/// POST a JSON body, discarding the response body.
pub async fn post_json<B: Serialize>(path: &str, body: &B) -> Result<(), String> {
    let resp = Request::post(&api_url(path))
        .json(body)
        .map_err(|e| e.to_string())?
        .send()
        .await
        .map_err(|e| e.to_string())?;
    if !resp.ok() {
        return Err(format!("HTTP {}", resp.status()));
    }
    Ok(())
}

/// Full-page navigation to a server-owned route (status changes, filters).
pub fn navigate_to(path: &str) {
    if let Some(window) = web_sys::window() {
        let _ = window.location().set_href(path);
    }
}
