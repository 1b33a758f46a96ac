//! Clipboard utilities for copying text to clipboard
//!
//! Tries the async Clipboard API first and falls back to the legacy
//! `execCommand("copy")` on a temporary textarea when that is unavailable or
//! rejected.

use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;

/// Which path ended up placing the text on the clipboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CopyOutcome {
    ClipboardApi,
    LegacyFallback,
    Failed,
}

/// Copy text and run `on_done` once the attempt is over.
///
/// `on_done` runs for every outcome, including `Failed`; callers that show a
/// confirmation accept that it may be optimistic.
pub fn copy_to_clipboard_with_callback<F>(text: &str, on_done: F)
where
    F: FnOnce(CopyOutcome) + 'static,
{
    let text = text.to_owned();
    spawn_local(async move {
        let outcome = if write_with_clipboard_api(&text).await {
            CopyOutcome::ClipboardApi
        } else if copy_with_textarea(&text) {
            CopyOutcome::LegacyFallback
        } else {
            log::warn!("clipboard: both Clipboard API and execCommand fallback failed");
            CopyOutcome::Failed
        };
        log::debug!("clipboard: {:?}", outcome);
        on_done(outcome);
    });
}

async fn write_with_clipboard_api(text: &str) -> bool {
    let Some(window) = web_sys::window() else {
        return false;
    };
    // `navigator.clipboard` is undefined outside secure contexts.
    let navigator = window.navigator();
    if !has_property(&navigator, "clipboard") {
        return false;
    }
    let clipboard = navigator.clipboard();
    wasm_bindgen_futures::JsFuture::from(clipboard.write_text(text))
        .await
        .is_ok()
}

fn has_property(target: &web_sys::Navigator, name: &str) -> bool {
    let key = wasm_bindgen::JsValue::from_str(name);
    js_sys::Reflect::get(target.as_ref(), &key)
        .map(|v| !v.is_undefined() && !v.is_null())
        .unwrap_or(false)
}

fn copy_with_textarea(text: &str) -> bool {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return false;
    };
    let Some(body) = document.body() else {
        return false;
    };
    let Ok(textarea) = document
        .create_element("textarea")
        .map(|el| el.unchecked_into::<web_sys::HtmlTextAreaElement>())
    else {
        return false;
    };

    textarea.set_value(text);
    textarea.set_read_only(true);
    let style = textarea.style();
    let _ = style.set_property("position", "fixed");
    let _ = style.set_property("left", "-9999px");
    let _ = style.set_property("top", "0");

    if body.append_child(&textarea).is_err() {
        return false;
    }
    textarea.select();
    let copied = document
        .dyn_ref::<web_sys::HtmlDocument>()
        .and_then(|html| html.exec_command("copy").ok())
        .unwrap_or(false);
    let _ = body.remove_child(&textarea);
    copied
}
