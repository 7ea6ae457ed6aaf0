//! Browser-side download and share plumbing.
//!
//! The CSV/JSON content itself comes from `rutaboard_core::export`; this
//! module only wraps it in a Blob and drives the anchor-click download, or
//! hands a summary to the native share sheet when one exists.

use leptos::task::spawn_local;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{Blob, HtmlAnchorElement, ShareData, Url};

/// Download `content` as a CSV file. A UTF-8 BOM is prepended so Excel
/// opens the accents correctly.
pub fn download_csv(content: &str, filename: &str) {
    let with_bom = format!("\u{FEFF}{}", content);
    trigger_download(&with_bom, filename, "text/csv");
}

/// Download `content` as a JSON file.
pub fn download_json(content: &str, filename: &str) {
    trigger_download(content, filename, "application/json");
}

/// Trigger browser download via Blob and temporary anchor element
fn trigger_download(content: &str, filename: &str, mime_type: &str) {
    let document = match web_sys::window().and_then(|w| w.document()) {
        Some(d) => d,
        None => {
            log::error!("no hay documento para iniciar la descarga");
            return;
        }
    };

    let blob_parts = js_sys::Array::new();
    blob_parts.push(&JsValue::from_str(content));

    let blob_options = web_sys::BlobPropertyBag::new();
    blob_options.set_type(mime_type);

    let blob = match Blob::new_with_str_sequence_and_options(&blob_parts, &blob_options) {
        Ok(b) => b,
        Err(e) => {
            log::error!("no se pudo crear el Blob: {:?}", e);
            return;
        }
    };

    let url = match Url::create_object_url_with_blob(&blob) {
        Ok(u) => u,
        Err(e) => {
            log::error!("no se pudo crear la URL del objeto: {:?}", e);
            return;
        }
    };

    let anchor = match document
        .create_element("a")
        .ok()
        .and_then(|el| el.dyn_into::<HtmlAnchorElement>().ok())
    {
        Some(a) => a,
        None => {
            log::error!("no se pudo crear el elemento de descarga");
            let _ = Url::revoke_object_url(&url);
            return;
        }
    };

    anchor.set_href(&url);
    anchor.set_download(filename);
    anchor.click();

    if let Err(e) = Url::revoke_object_url(&url) {
        log::error!("no se pudo liberar la URL del objeto: {:?}", e);
    }
}

/// Hands `text` to the native share sheet when `navigator.share` exists.
/// Returns `false` when the browser has no share support, in which case the
/// caller shows the text another way.
pub fn share_text(title: &str, text: &str) -> bool {
    let Some(window) = web_sys::window() else {
        return false;
    };
    let navigator = window.navigator();

    let has_share =
        js_sys::Reflect::has(navigator.as_ref(), &JsValue::from_str("share")).unwrap_or(false);
    if !has_share {
        return false;
    }

    let data = ShareData::new();
    data.set_title(title);
    data.set_text(text);

    let promise = navigator.share_with_data(&data);
    // A rejected promise here just means the user closed the sheet.
    spawn_local(async move {
        let _ = JsFuture::from(promise).await;
    });
    true
}
