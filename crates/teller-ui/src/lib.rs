//! Client-side behaviors for the online banking pages
//!
//! Compiled to WASM and loaded by every server-rendered page. On
//! `DOMContentLoaded` it wires a fixed set of independent behaviors against
//! the document:
//!
//! - transient alerts that fade out after a delay or on close
//! - the mobile navigation toggle
//! - required-field validation that blocks incomplete submits
//! - numeric and PIN input masks
//! - confirmation before logout/delete links
//! - account number grouping
//! - smooth scrolling for in-page anchors
//! - busy state for submit buttons
//!
//! ## Module Structure
//! - `app`: [`UiBehaviors`], owner of every listener and timer
//! - `behaviors`: one module per behavior
//! - `models`: alert, menu and button state machines
//! - `format` / `validation`: pure text rules behind the behaviors
//! - `dom`: listener handles, typed queries, stylesheet injection
//! - `config`, `telemetry`, `error`: ambient plumbing
//!
//! Other scripts on the page can post alerts through the exported
//! `showMessage(message, type)` function.

#![forbid(unsafe_code)]

pub mod app;
pub mod behaviors;
pub mod config;
pub mod dom;
pub mod error;
pub mod format;
pub mod models;
pub mod telemetry;
pub mod validation;

use std::cell::RefCell;

use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::wasm_bindgen;
use web_sys::AddEventListenerOptions;

pub use app::{InstallSummary, UiBehaviors};
pub use config::UiConfig;
pub use error::{Result, UiError};
pub use models::Severity;

use crate::error::DomResultExt;

thread_local! {
    static ACTIVE: RefCell<Option<UiBehaviors>> = const { RefCell::new(None) };
}

/// WASM entry point
///
/// Boots immediately if the document is already parsed, otherwise once
/// `DOMContentLoaded` fires.
///
/// # Errors
///
/// Returns an error if there is no document or initialization fails.
#[wasm_bindgen(start)]
pub fn start() -> std::result::Result<(), JsValue> {
    console_error_panic_hook::set_once();

    let document = dom::document()?;
    if document.ready_state() != "loading" {
        return boot().map_err(JsValue::from);
    }

    let on_ready = Closure::once_into_js(|| {
        if let Err(e) = boot() {
            web_sys::console::error_1(&format!("teller-ui failed to start: {e}").into());
        }
    });
    let options = AddEventListenerOptions::new();
    options.set_once(true);
    document
        .add_event_listener_with_callback_and_add_event_listener_options(
            "DOMContentLoaded",
            on_ready.unchecked_ref(),
            &options,
        )
        .context("failed to wait for DOMContentLoaded")?;

    Ok(())
}

/// Reads the page configuration and initializes the behaviors once
///
/// # Errors
///
/// Returns an error if the document is unavailable or initialization fails.
pub fn boot() -> Result<()> {
    if is_initialized() {
        tracing::debug!("page behaviors already running");
        return Ok(());
    }

    let document = dom::document()?;
    let (config, rejected) = UiConfig::or_defaults(UiConfig::from_document(&document));
    telemetry::init(config.max_level());
    if let Some(e) = rejected {
        tracing::warn!(error = %e, "ignoring configuration block");
    }

    let behaviors = UiBehaviors::init(&document, config)?;
    ACTIVE.with(|active| *active.borrow_mut() = Some(behaviors));
    Ok(())
}

/// Whether [`boot`] has completed on this page
#[must_use]
pub fn is_initialized() -> bool {
    ACTIVE.with(|active| active.borrow().is_some())
}

/// Drops the running behaviors, detaching their listeners and timers
pub fn shutdown() {
    let previous = ACTIVE.with(|active| active.borrow_mut().take());
    if previous.is_some() {
        tracing::debug!("page behaviors shut down");
    }
}

/// Posts an alert from JavaScript: `showMessage("Saved", "success")`
///
/// `type` defaults to `"info"`.
///
/// # Errors
///
/// Throws if called before initialization or if the alert cannot be added.
#[wasm_bindgen(js_name = showMessage)]
pub fn show_message(message: &str, kind: Option<String>) -> std::result::Result<(), JsValue> {
    let severity = Severity::parse(kind.as_deref().unwrap_or_default());
    ACTIVE
        .with(|active| {
            active
                .borrow()
                .as_ref()
                .ok_or(UiError::NotInitialized)
                .and_then(|behaviors| behaviors.show_message(message, severity))
        })
        .map(|_| ())
        .map_err(JsValue::from)
}
