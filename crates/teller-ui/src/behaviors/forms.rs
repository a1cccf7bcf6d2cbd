//! Required-field validation and submit guard
//!
//! Each form gets a submit listener that re-reads its required controls on
//! every attempt. A failed check cancels the submit, colors the offending
//! fields and posts one error alert through the message center.

use wasm_bindgen::JsCast;
use web_sys::{
    Element, Event, HtmlElement, HtmlFormElement, HtmlInputElement, HtmlSelectElement,
    HtmlTextAreaElement,
};

use crate::behaviors::alerts::MessageCenter;
use crate::config::Messages;
use crate::dom::{Listener, QueryRoot, query_all, query_one};
use crate::error::{DomResultExt, Result};
use crate::models::Severity;
use crate::validation::{FieldMark, Rejection, RequiredCheck, verdict};

pub const REQUIRED_SELECTOR: &str = "input[required], select[required], textarea[required]";
pub const PIN_SELECTOR: &str = "input[name=\"pin\"]";
pub const CONFIRM_PIN_SELECTOR: &str = "input[name=\"confirm_pin\"]";

/// Guards every form under `root`
///
/// # Errors
///
/// Returns an error if forms cannot be queried or a listener cannot be
/// attached.
pub fn install(
    root: &impl QueryRoot,
    messages: &MessageCenter,
    text: &Messages,
) -> Result<Vec<Listener>> {
    let forms: Vec<HtmlFormElement> = query_all(root, "form")?;
    tracing::debug!(count = forms.len(), "guarding forms");

    forms
        .into_iter()
        .map(|form| {
            let messages = messages.clone();
            let text = text.clone();
            let target = form.clone();
            Listener::attach(&target, "submit", move |event| {
                guard_submit(&form, &event, &messages, &text);
            })
        })
        .collect()
}

/// Runs the checks for one submit attempt and applies the outcome
///
/// Returns the rejection, if the submit was cancelled.
pub fn guard_submit(
    form: &HtmlFormElement,
    event: &Event,
    messages: &MessageCenter,
    text: &Messages,
) -> Option<Rejection> {
    let root: &Element = form;
    let controls: Vec<Element> = match query_all(root, REQUIRED_SELECTOR) {
        Ok(controls) => controls,
        Err(e) => {
            tracing::warn!(error = %e, "cannot read required fields");
            return None;
        }
    };

    let values: Vec<String> = controls.iter().map(control_value).collect();
    let check = RequiredCheck::run(values.iter().map(String::as_str));
    for (control, mark) in controls.iter().zip(check.marks()) {
        mark_field(control, *mark);
    }

    let pins = pin_fields(form);
    let pin_values = pins
        .as_ref()
        .map(|(pin, confirm)| (pin.value(), confirm.value()));
    let rejection = verdict(
        &check,
        pin_values
            .as_ref()
            .map(|(pin, confirm)| (pin.as_str(), confirm.as_str())),
    )?;

    event.prevent_default();

    let message = match rejection {
        Rejection::MissingRequired => {
            tracing::debug!(missing = check.missing(), "submit blocked");
            &text.required_fields
        }
        Rejection::PinMismatch => {
            if let Some((pin, confirm)) = &pins {
                mark_field(pin, FieldMark::Invalid);
                mark_field(confirm, FieldMark::Invalid);
            }
            tracing::debug!("submit blocked: PIN confirmation differs");
            &text.pin_mismatch
        }
    };

    if let Err(e) = messages.show(message, Severity::Error) {
        tracing::warn!(error = %e, "failed to show validation message");
    }

    Some(rejection)
}

/// Current value of an input, select or textarea; anything else reads as
/// empty
fn control_value(control: &Element) -> String {
    if let Some(input) = control.dyn_ref::<HtmlInputElement>() {
        input.value()
    } else if let Some(select) = control.dyn_ref::<HtmlSelectElement>() {
        select.value()
    } else if let Some(area) = control.dyn_ref::<HtmlTextAreaElement>() {
        area.value()
    } else {
        String::new()
    }
}

fn mark_field(control: &Element, mark: FieldMark) {
    let Some(element) = control.dyn_ref::<HtmlElement>() else {
        return;
    };
    if let Err(e) = element
        .style()
        .set_property("border-color", mark.border_color())
        .context("failed to mark field")
    {
        tracing::warn!(error = %e, "field left unmarked");
    }
}

fn pin_fields(form: &HtmlFormElement) -> Option<(HtmlInputElement, HtmlInputElement)> {
    let root: &Element = form;
    let pin = query_one(root, PIN_SELECTOR)?.dyn_into().ok()?;
    let confirm = query_one(root, CONFIRM_PIN_SELECTOR)?.dyn_into().ok()?;
    Some((pin, confirm))
}
