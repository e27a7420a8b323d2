//! Browser storage, cookie, and navigation glue.
//!
//! SYSTEM CONTEXT
//! ==============
//! These helpers centralize hydrate-only `web-sys` access so session and page
//! code never touch `window` directly. On the server every call is a no-op.

#[cfg(feature = "hydrate")]
use wasm_bindgen::JsCast;

#[cfg(feature = "hydrate")]
fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}

#[cfg(feature = "hydrate")]
fn html_document() -> Option<web_sys::HtmlDocument> {
    web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.dyn_into::<web_sys::HtmlDocument>().ok())
}

/// Read a raw string from `localStorage`.
pub fn load_item(key: &str) -> Option<String> {
    #[cfg(feature = "hydrate")]
    {
        local_storage()?.get_item(key).ok().flatten()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = key;
        None
    }
}

/// Write a raw string to `localStorage`.
pub fn save_item(key: &str, value: &str) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(storage) = local_storage() {
            let _ = storage.set_item(key, value);
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (key, value);
    }
}

/// Remove `key` from `localStorage`.
pub fn remove_item(key: &str) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(storage) = local_storage() {
            let _ = storage.remove_item(key);
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = key;
    }
}

/// Assign a full `name=value; attrs` string to `document.cookie`.
pub fn write_cookie(assignment: &str) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(doc) = html_document() {
            let _ = doc.set_cookie(assignment);
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = assignment;
    }
}

/// Decoded value of cookie `name` from `document.cookie`.
pub fn read_cookie(name: &str) -> Option<String> {
    #[cfg(feature = "hydrate")]
    {
        let raw = html_document()?.cookie().ok()?;
        cookie::Cookie::split_parse_encoded(raw)
            .filter_map(Result::ok)
            .find(|c| c.name() == name)
            .map(|c| c.value().to_owned())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = name;
        None
    }
}

/// Full-page navigation, so the next request passes through the server guard.
pub fn navigate_full(href: &str) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(window) = web_sys::window() {
            let _ = window.location().set_href(href);
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = href;
    }
}
