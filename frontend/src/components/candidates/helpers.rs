//! Utility functions for the candidate page.
//!
//! - **User Feedback**: temporary toast notifications for every action result.
//! - **Dates**: the certificate issue date in the browser's short locale format.
//! - **List reconciliation**: flipping the printed flag, and deciding whether a
//!   settled write reloads the list.

use crate::api::ApiError;
use common::model::candidate::Candidate;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::HtmlElement;

/// Displays a temporary notification message at the bottom of the screen.
///
/// The toast is a styled `div` appended to `body` and removed after three
/// seconds. The message is inserted as text, never as markup.
pub fn show_toast(message: &str) {
    if let Some(window) = web_sys::window() {
        if let Some(document) = window.document() {
            if let (Ok(toast), Some(body)) = (document.create_element("div"), document.body()) {
                toast.set_text_content(Some(message));
                let html_toast: HtmlElement = toast.unchecked_into();
                let style = html_toast.style();
                style.set_property("position", "fixed").ok();
                style.set_property("bottom", "20px").ok();
                style.set_property("left", "50%").ok();
                style.set_property("transform", "translateX(-50%)").ok();
                style.set_property("background", "rgba(0, 0, 0, 0.8)").ok();
                style.set_property("color", "#fff").ok();
                style.set_property("padding", "10px 20px").ok();
                style.set_property("border-radius", "4px").ok();
                style.set_property("z-index", "10000").ok();
                style.set_property("font-family", "Arial, sans-serif").ok();

                if body.append_child(&html_toast).is_ok() {
                    wasm_bindgen_futures::spawn_local(async move {
                        gloo_timers::future::TimeoutFuture::new(3000).await;
                        if let Some(parent) = html_toast.parent_node() {
                            parent.remove_child(&html_toast).ok();
                        }
                    });
                }
            }
        }
    }
}

/// Today's date in the browser's short date format (`toLocaleDateString`).
pub fn today_short_date() -> String {
    let locale = web_sys::window()
        .and_then(|w| w.navigator().language())
        .unwrap_or_else(|| "en-US".to_string());
    js_sys::Date::new_0()
        .to_locale_date_string(&locale, &JsValue::UNDEFINED)
        .into()
}

/// Flips the printed flag of the entry with `id`, leaving its other fields as
/// the last fetch delivered them. Returns false when the candidate is no
/// longer in the list (e.g. a refresh removed it meanwhile).
pub fn mark_printed(candidates: &mut [Candidate], id: i64) -> bool {
    match candidates.iter_mut().find(|c| c.id == id) {
        Some(candidate) => {
            candidate.mark_printed();
            true
        }
        None => false,
    }
}

/// What the page does after a write request settled.
#[derive(Debug, PartialEq)]
pub enum WriteOutcome {
    /// Re-fetch the list, then show the message.
    Reload(String),
    /// Only show the message; the list stays as it is.
    Notify(String),
}

pub fn write_outcome<T>(result: &Result<T, ApiError>, done: &str, failed: &str) -> WriteOutcome {
    match result {
        Ok(_) => WriteOutcome::Reload(done.to_string()),
        Err(err) => WriteOutcome::Notify(format!("{} {}", failed, err)),
    }
}
