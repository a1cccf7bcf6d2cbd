//! Submit buttons switch to a busy state while their form submits
//!
//! A fallback timer restores the button in case the page never navigates
//! away (the submit was cancelled, or the request is slow). Submitting
//! again replaces the pending timer instead of stacking another.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use gloo_timers::callback::Timeout;
use web_sys::{Document, HtmlButtonElement};

use crate::dom::{Listener, QueryRoot, query_all};
use crate::error::{DomResultExt, Result};
use crate::models::ButtonLoadingState;

pub const SUBMIT_SELECTOR: &str = "button[type=\"submit\"]";
pub const ORIGINAL_TEXT_ATTR: &str = "data-original-text";

/// Labels and timing shared by every submit button
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadingOptions {
    pub processing_label: String,
    pub fallback_label: String,
    pub restore_ms: u32,
}

struct ButtonSlot {
    button: HtmlButtonElement,
    state: ButtonLoadingState,
    restore_timer: Option<Timeout>,
}

/// Captures each submit button's label and hooks its form's submit event
///
/// # Errors
///
/// Returns an error if buttons cannot be queried or a listener cannot be
/// attached.
pub fn install(
    root: &impl QueryRoot,
    document: &Document,
    options: &LoadingOptions,
) -> Result<Vec<Listener>> {
    let buttons: Vec<HtmlButtonElement> = query_all(root, SUBMIT_SELECTOR)?;
    let mut listeners = Vec::with_capacity(buttons.len());

    for button in buttons {
        let label = button.text_content();
        if let Some(text) = &label {
            button
                .set_attribute(ORIGINAL_TEXT_ATTR, text)
                .context("failed to store button label")?;
        }

        let Some(form) = button.form() else {
            continue;
        };

        let slot = Rc::new(RefCell::new(ButtonSlot {
            button,
            state: ButtonLoadingState::capture(label),
            restore_timer: None,
        }));
        let document = document.clone();
        let options = options.clone();
        listeners.push(Listener::attach(&form, "submit", move |_event| {
            if let Err(e) = start_loading(&slot, &document, &options) {
                tracing::warn!(error = %e, "submit button left as is");
            }
        })?);
    }

    tracing::debug!(count = listeners.len(), "submit buttons tracked");
    Ok(listeners)
}

fn start_loading(
    slot: &Rc<RefCell<ButtonSlot>>,
    document: &Document,
    options: &LoadingOptions,
) -> Result<()> {
    let weak = Rc::downgrade(slot);
    let fallback = options.fallback_label.clone();
    let mut slot = slot.borrow_mut();

    slot.state.start();
    slot.button.set_disabled(true);

    let indicator = document
        .create_element("span")
        .context("failed to create processing indicator")?;
    indicator.set_text_content(Some(&options.processing_label));
    slot.button.set_text_content(None);
    slot.button
        .append_child(&indicator)
        .context("failed to show processing indicator")?;

    // Replacing the handle cancels a restore left over from an earlier submit.
    slot.restore_timer = Some(Timeout::new(options.restore_ms, move || {
        restore(&weak, &fallback);
    }));
    Ok(())
}

fn restore(slot: &Weak<RefCell<ButtonSlot>>, fallback: &str) {
    let Some(slot) = slot.upgrade() else {
        return;
    };
    let Ok(mut slot) = slot.try_borrow_mut() else {
        return;
    };

    let label = slot.state.restore(fallback).to_string();
    slot.button.set_disabled(false);
    slot.button.set_text_content(Some(&label));
    drop(slot.restore_timer.take());
}
