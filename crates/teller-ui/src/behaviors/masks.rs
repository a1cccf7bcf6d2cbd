//! Numeric and PIN input masks

use wasm_bindgen::JsCast;
use web_sys::{Event, HtmlInputElement};

use crate::dom::{Listener, QueryRoot, query_all};
use crate::error::Result;
use crate::format::{clamp_non_negative, mask_pin};

pub const NUMBER_SELECTOR: &str = "input[type=\"number\"]";
pub const PIN_INPUT_SELECTOR: &str = "input[name=\"pin\"], input[name=\"confirm_pin\"]";

/// Attaches both masks to every matching input under `root`
///
/// # Errors
///
/// Returns an error if inputs cannot be queried or a listener cannot be
/// attached.
pub fn install(root: &impl QueryRoot, pin_length: usize) -> Result<Vec<Listener>> {
    let numbers: Vec<HtmlInputElement> = query_all(root, NUMBER_SELECTOR)?;
    let pins: Vec<HtmlInputElement> = query_all(root, PIN_INPUT_SELECTOR)?;
    tracing::debug!(
        numbers = numbers.len(),
        pins = pins.len(),
        "attaching input masks"
    );

    let number_listeners = numbers.iter().map(|input| {
        Listener::attach(input, "input", |event| {
            if let Some(input) = event_input(&event) {
                apply_number_mask(&input);
            }
        })
    });

    let pin_listeners = pins.iter().map(|input| {
        Listener::attach(input, "input", move |event| {
            if let Some(input) = event_input(&event) {
                apply_pin_mask(&input, pin_length);
            }
        })
    });

    number_listeners.chain(pin_listeners).collect()
}

/// Raises a negative value to `0`; returns whether the value changed
pub fn apply_number_mask(input: &HtmlInputElement) -> bool {
    let Some(replacement) = clamp_non_negative(&input.value()) else {
        return false;
    };
    input.set_value(replacement);
    true
}

/// Reduces the value to at most `max_len` digits; returns whether it changed
pub fn apply_pin_mask(input: &HtmlInputElement, max_len: usize) -> bool {
    let value = input.value();
    let masked = mask_pin(&value, max_len);
    if masked == value {
        return false;
    }
    input.set_value(&masked);
    true
}

fn event_input(event: &Event) -> Option<HtmlInputElement> {
    event.current_target()?.dyn_into().ok()
}
