//! DOM and Web API utility functions.
//!
//! Provides safe, consistent access to browser APIs with proper error handling.

use js_sys::{Function, Promise, Reflect};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{Document, HtmlAnchorElement, Window};

use crate::core::error::FullscreenError;
use crate::models::DownloadRequest;

/// Get the browser window object.
#[inline]
pub fn window() -> Option<Window> {
    web_sys::window()
}

/// Get the current document.
#[inline]
pub fn document() -> Option<Document> {
    window()?.document()
}

/// Best-effort message from a thrown JS value.
pub fn js_error_message(value: &JsValue) -> String {
    if let Some(err) = value.dyn_ref::<js_sys::Error>() {
        String::from(err.message())
    } else {
        value
            .as_string()
            .unwrap_or_else(|| "Unknown error".to_string())
    }
}

// =============================================================================
// Download
// =============================================================================

/// Save a URL to disk via a temporary `<a download>` element.
///
/// Returns `true` if the click was dispatched.
pub fn trigger_download(request: &DownloadRequest) -> bool {
    let Some(document) = document() else {
        return false;
    };
    let Some(anchor) = document
        .create_element("a")
        .ok()
        .and_then(|el| el.dyn_into::<HtmlAnchorElement>().ok())
    else {
        return false;
    };

    anchor.set_href(&request.href);
    anchor.set_download(&request.filename);
    anchor.click();
    true
}

// =============================================================================
// Fullscreen
// =============================================================================

/// Request fullscreen presentation of the element with the given id.
///
/// `Element.requestFullscreen` is invoked through reflection so the returned
/// promise can be awaited; engines that return nothing are treated as
/// having accepted the request.
pub async fn request_fullscreen(element_id: &str) -> Result<(), FullscreenError> {
    let document = document().ok_or(FullscreenError::NoDocument)?;
    let element = document
        .get_element_by_id(element_id)
        .ok_or_else(|| FullscreenError::ElementNotFound(element_id.to_string()))?;

    let method = Reflect::get(&element, &JsValue::from_str("requestFullscreen"))
        .ok()
        .and_then(|f| f.dyn_into::<Function>().ok())
        .ok_or(FullscreenError::Unsupported)?;

    let result = method
        .call0(&element)
        .map_err(|e| FullscreenError::Rejected(js_error_message(&e)))?;

    match result.dyn_into::<Promise>() {
        Ok(promise) => JsFuture::from(promise)
            .await
            .map(|_| ())
            .map_err(|e| FullscreenError::Rejected(js_error_message(&e))),
        Err(_) => Ok(()),
    }
}

/// Whether the document exposes `exitFullscreen`.
pub fn exit_fullscreen_supported() -> bool {
    document().is_some_and(|d| Reflect::has(&d, &JsValue::from_str("exitFullscreen")).unwrap_or(false))
}

/// Leave fullscreen if the document is currently presenting an element.
pub fn exit_fullscreen() {
    if let Some(document) = document()
        && document.fullscreen_element().is_some()
    {
        document.exit_fullscreen();
    }
}

/// Whether any element is currently fullscreen.
pub fn fullscreen_active() -> bool {
    document().is_some_and(|d| d.fullscreen_element().is_some())
}

/// Empty `<div>` appended to the body, for mounting components under test.
#[cfg(all(test, target_arch = "wasm32"))]
pub fn test_container() -> web_sys::HtmlElement {
    let document = document().expect("document available");
    let container = document
        .create_element("div")
        .expect("create div")
        .unchecked_into::<web_sys::HtmlElement>();
    document
        .body()
        .expect("body available")
        .append_child(&container)
        .expect("append container");
    container
}
