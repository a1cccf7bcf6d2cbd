//! Browser tests for form validation, input masks and submit buttons

#![cfg(target_arch = "wasm32")]

use gloo_timers::future::TimeoutFuture;
use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;
use web_sys::{
    Element, Event, EventInit, HtmlButtonElement, HtmlElement, HtmlFormElement, HtmlInputElement,
};

use super::alerts::MessageCenter;
use super::buttons::{self, LoadingOptions};
use super::{forms, masks};
use crate::config::{Messages, Timings};
use crate::dom::{self, Listener, query_one};
use crate::error::{Result, UiError};

wasm_bindgen_test_configure!(run_in_browser);

const FORM_MARKUP: &str = r#"
    <form action="/deposit/" method="post">
        <input name="username" required>
        <input name="amount" type="number" required>
        <select name="account_type" required>
            <option value="">--</option>
            <option value="SAVINGS">Savings</option>
        </select>
        <textarea name="description"></textarea>
        <input name="pin" type="password" required>
        <input name="confirm_pin" type="password" required>
        <button type="submit">Deposit</button>
    </form>
"#;

struct Fixture {
    root: Element,
    messages: MessageCenter,
    _listeners: Vec<Listener>,
}

impl Fixture {
    fn new() -> Result<Self> {
        let document = dom::document()?;
        let root = document
            .create_element("div")
            .map_err(|e| UiError::dom("create fixture", &e))?;
        root.set_inner_html(FORM_MARKUP);
        dom::body(&document)?
            .append_child(&root)
            .map_err(|e| UiError::dom("append fixture", &e))?;

        let messages = MessageCenter::new(&document, Timings::default())?;
        let mut listeners = forms::install(&root, &messages, &Messages::default())?;
        listeners.append(&mut masks::install(&root, 4)?);

        Ok(Self {
            root,
            messages,
            _listeners: listeners,
        })
    }

    fn input(&self, name: &str) -> Result<HtmlInputElement> {
        query_one(&self.root, &format!("[name=\"{name}\"]"))
            .and_then(|element| element.dyn_into().ok())
            .ok_or_else(|| missing(name))
    }

    fn form(&self) -> Result<HtmlFormElement> {
        query_one(&self.root, "form")
            .and_then(|element| element.dyn_into().ok())
            .ok_or_else(|| missing("form"))
    }

    fn set_select(&self, value: &str) -> Result<()> {
        let select: web_sys::HtmlSelectElement = query_one(&self.root, "select")
            .and_then(|element| element.dyn_into().ok())
            .ok_or_else(|| missing("select"))?;
        select.set_value(value);
        Ok(())
    }

    fn fill_all(&self) -> Result<()> {
        self.input("username")?.set_value("alice");
        self.input("amount")?.set_value("100");
        self.input("pin")?.set_value("1234");
        self.input("confirm_pin")?.set_value("1234");
        self.set_select("SAVINGS")
    }

    /// Dispatches a cancelable submit; returns whether it was cancelled
    fn submit(&self) -> Result<bool> {
        let init = EventInit::new();
        init.set_bubbles(true);
        init.set_cancelable(true);
        let event = Event::new_with_event_init_dict("submit", &init)
            .map_err(|e| UiError::dom("create submit event", &e))?;
        self.form()?
            .dispatch_event(&event)
            .map_err(|e| UiError::dom("dispatch submit", &e))?;
        Ok(event.default_prevented())
    }

    fn border(&self, name: &str) -> Result<String> {
        let input = self.input(name)?;
        let element: &HtmlElement = &input;
        element
            .style()
            .get_property_value("border-color")
            .map_err(|e| UiError::dom("read border", &e))
    }
}

impl Drop for Fixture {
    fn drop(&mut self) {
        self.root.remove();
    }
}

fn missing(what: &str) -> UiError {
    UiError::Dom {
        context: "test fixture".to_string(),
        message: format!("{what} not found"),
    }
}

fn type_into(input: &HtmlInputElement, value: &str) -> Result<()> {
    input.set_value(value);
    let event = Event::new("input").map_err(|e| UiError::dom("create input event", &e))?;
    input
        .dispatch_event(&event)
        .map_err(|e| UiError::dom("dispatch input", &e))?;
    Ok(())
}

#[wasm_bindgen_test]
fn test_empty_required_field_blocks_submit() -> Result<()> {
    let fixture = Fixture::new()?;
    fixture.fill_all()?;
    fixture.input("username")?.set_value("   ");

    let before = fixture.messages.live_count();
    assert!(fixture.submit()?, "submit should be cancelled");
    assert_eq!(fixture.messages.live_count(), before.saturating_add(1));

    assert_eq!(fixture.border("username")?, "var(--danger-color)");
    assert_eq!(fixture.border("amount")?, "var(--border-color)");
    assert_eq!(fixture.border("pin")?, "var(--border-color)");
    Ok(())
}

#[wasm_bindgen_test]
fn test_complete_form_submits() -> Result<()> {
    let fixture = Fixture::new()?;
    fixture.fill_all()?;

    let before = fixture.messages.live_count();
    assert!(!fixture.submit()?, "submit should go through");
    assert_eq!(fixture.messages.live_count(), before);
    assert_eq!(fixture.border("username")?, "var(--border-color)");
    Ok(())
}

#[wasm_bindgen_test]
fn test_validation_reruns_each_submit() -> Result<()> {
    let fixture = Fixture::new()?;
    assert!(fixture.submit()?);

    fixture.fill_all()?;
    assert!(!fixture.submit()?);
    assert_eq!(fixture.border("username")?, "var(--border-color)");
    Ok(())
}

#[wasm_bindgen_test]
fn test_pin_mismatch_blocks_submit() -> Result<()> {
    let fixture = Fixture::new()?;
    fixture.fill_all()?;
    fixture.input("confirm_pin")?.set_value("4321");

    let before = fixture.messages.live_count();
    assert!(fixture.submit()?);
    assert_eq!(fixture.messages.live_count(), before.saturating_add(1));
    assert_eq!(fixture.border("pin")?, "var(--danger-color)");
    assert_eq!(fixture.border("confirm_pin")?, "var(--danger-color)");
    Ok(())
}

#[wasm_bindgen_test]
fn test_number_mask_clamps_negative() -> Result<()> {
    let fixture = Fixture::new()?;
    let amount = fixture.input("amount")?;

    type_into(&amount, "-5")?;
    assert_eq!(amount.value(), "0");

    type_into(&amount, "10")?;
    assert_eq!(amount.value(), "10");
    Ok(())
}

#[wasm_bindgen_test]
fn test_pin_mask_keeps_four_digits() -> Result<()> {
    let fixture = Fixture::new()?;
    let pin = fixture.input("pin")?;

    type_into(&pin, "12a3456")?;
    assert_eq!(pin.value(), "1234");

    type_into(&pin, "x9")?;
    assert_eq!(pin.value(), "9");
    Ok(())
}

#[wasm_bindgen_test]
async fn test_submit_button_busy_then_restored() -> Result<()> {
    let fixture = Fixture::new()?;
    let _listeners = buttons::install(&fixture.root, &dom::document()?, &loading(50))?;
    let button = submit_button(&fixture)?;
    assert_eq!(
        button.get_attribute("data-original-text").as_deref(),
        Some("Deposit")
    );

    fixture.fill_all()?;
    fixture.submit()?;
    assert!(button.disabled());
    assert_eq!(button.inner_html(), "<span>Processing...</span>");

    TimeoutFuture::new(90).await;
    assert!(!button.disabled());
    assert_eq!(button.text_content().as_deref(), Some("Deposit"));
    Ok(())
}

fn submit_button(fixture: &Fixture) -> Result<HtmlButtonElement> {
    query_one(&fixture.root, "button[type=\"submit\"]")
        .and_then(|element| element.dyn_into().ok())
        .ok_or_else(|| missing("button"))
}

fn loading(restore_ms: u32) -> LoadingOptions {
    LoadingOptions {
        processing_label: "Processing...".to_string(),
        fallback_label: "Submit".to_string(),
        restore_ms,
    }
}

#[wasm_bindgen_test]
async fn test_resubmit_replaces_restore_timer() -> Result<()> {
    let fixture = Fixture::new()?;
    let _listeners = buttons::install(&fixture.root, &dom::document()?, &loading(120))?;
    let button = submit_button(&fixture)?;
    fixture.fill_all()?;

    fixture.submit()?;
    TimeoutFuture::new(70).await;
    fixture.submit()?;

    // past the first deadline (120ms), short of the second (190ms)
    TimeoutFuture::new(80).await;
    assert!(button.disabled(), "first timer should have been replaced");

    TimeoutFuture::new(100).await;
    assert!(!button.disabled());
    assert_eq!(button.text_content().as_deref(), Some("Deposit"));
    Ok(())
}

#[wasm_bindgen_test]
async fn test_cancelled_submit_still_restores_button() -> Result<()> {
    let fixture = Fixture::new()?;
    let _listeners = buttons::install(&fixture.root, &dom::document()?, &loading(50))?;
    let button = submit_button(&fixture)?;

    assert!(fixture.submit()?, "empty form should be rejected");
    assert!(button.disabled());

    TimeoutFuture::new(90).await;
    assert!(!button.disabled());
    assert_eq!(button.text_content().as_deref(), Some("Deposit"));
    Ok(())
}
