//! Reader for JSON payloads embedded in the host page.
//!
//! Pages that do not warrant an extra round-trip ship their data inside
//! `<script type="application/json" id="...">` tags rendered by the server.

use contracts::shared::embedded::parse_embedded;
use serde::de::DeserializeOwned;

/// Read and parse the embedded payload with the given element id.
///
/// Returns `None` (after logging) when the element is missing, empty or
/// malformed; callers fall back to `Default` so the page still renders.
pub fn read_embedded<T: DeserializeOwned>(element_id: &str) -> Option<T> {
    let document = web_sys::window()?.document()?;
    let element = match document.get_element_by_id(element_id) {
        Some(el) => el,
        None => {
            log::warn!("embedded payload #{element_id} not found in page");
            return None;
        }
    };
    let raw = element.text_content().unwrap_or_default();
    match parse_embedded::<T>(&raw) {
        Ok(value) => Some(value),
        Err(e) => {
            log::warn!("embedded payload #{element_id} is malformed: {e:#}");
            None
        }
    }
}

/// Like [`read_embedded`], but substitutes the type default on any failure.
pub fn read_embedded_or_default<T: DeserializeOwned + Default>(element_id: &str) -> T {
    read_embedded(element_id).unwrap_or_default()
}
