//! Thin, panic-free helpers over web-sys

pub mod listener;
pub mod query;
pub mod styles;

pub use listener::Listener;
pub use query::{QueryRoot, query_all, query_one};

use web_sys::{Document, HtmlElement, Window};

use crate::error::{Result, UiError};

/// Browser window
///
/// # Errors
///
/// Returns [`UiError::WindowUnavailable`] outside a browser.
pub fn window() -> Result<Window> {
    web_sys::window().ok_or(UiError::WindowUnavailable)
}

/// Current document
///
/// # Errors
///
/// Returns an error if there is no window or it has no document.
pub fn document() -> Result<Document> {
    window()?.document().ok_or(UiError::DocumentUnavailable)
}

/// Document body
///
/// # Errors
///
/// Returns [`UiError::BodyUnavailable`] while the body is not parsed yet.
pub fn body(document: &Document) -> Result<HtmlElement> {
    document.body().ok_or(UiError::BodyUnavailable)
}
