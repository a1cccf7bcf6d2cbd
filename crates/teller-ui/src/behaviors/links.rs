//! Link interception: destructive-action confirmation and smooth scrolling
//!
//! Destructive links are recognized by substring match on the raw `href`
//! attribute. That is a heuristic (a harmless path containing "delete"
//! also matches) and it is kept as-is.

use std::rc::Rc;

use wasm_bindgen::JsValue;
use web_sys::{
    Document, Element, Event, ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition,
    Window,
};

use crate::dom::{Listener, QueryRoot, query_all, query_one};
use crate::error::Result;

pub const LINK_SELECTOR: &str = "a[href]";
pub const ANCHOR_SELECTOR: &str = "a[href^=\"#\"]";

/// Asks the user a yes/no question; `Ok(true)` means proceed
pub type Confirm = Rc<dyn Fn(&str) -> std::result::Result<bool, JsValue>>;

/// The browser's blocking `confirm()` dialog
#[must_use]
pub fn window_confirm(window: &Window) -> Confirm {
    let window = window.clone();
    Rc::new(move |message: &str| window.confirm_with_message(message))
}

/// Whether `href` contains any of the destructive patterns
///
/// Empty patterns never match, otherwise every link would.
///
/// # Example
///
/// ```
/// use teller_ui::behaviors::links::is_destructive_href;
///
/// let patterns = vec!["logout".to_string(), "delete".to_string()];
/// assert!(is_destructive_href("/accounts/logout/", &patterns));
/// assert!(!is_destructive_href("/accounts/dashboard/", &patterns));
/// ```
#[must_use]
pub fn is_destructive_href(href: &str, patterns: &[String]) -> bool {
    patterns
        .iter()
        .any(|pattern| !pattern.is_empty() && href.contains(pattern.as_str()))
}

/// Selector for an in-page anchor's target
///
/// A bare `#` has no fragment to look up.
#[must_use]
pub fn fragment_selector(href: &str) -> Option<&str> {
    href.strip_prefix('#')
        .filter(|fragment| !fragment.is_empty())
        .map(|_| href)
}

/// Asks for confirmation before following destructive links under `root`
///
/// # Errors
///
/// Returns an error if links cannot be queried or a listener cannot be
/// attached.
pub fn install_confirmations(
    root: &impl QueryRoot,
    confirm: &Confirm,
    patterns: &[String],
    prompt: &str,
) -> Result<Vec<Listener>> {
    let links: Vec<Element> = query_all(root, LINK_SELECTOR)?;

    let guarded: Vec<Element> = links
        .into_iter()
        .filter(|link| {
            link.get_attribute("href")
                .is_some_and(|href| is_destructive_href(&href, patterns))
        })
        .collect();
    tracing::debug!(count = guarded.len(), "guarding destructive links");

    guarded
        .iter()
        .map(|link| {
            let confirm = Rc::clone(confirm);
            let prompt = prompt.to_string();
            Listener::attach(link, "click", move |event| {
                confirm_or_cancel(confirm.as_ref(), &prompt, &event);
            })
        })
        .collect()
}

/// Makes in-page anchors under `root` scroll smoothly to their target
///
/// # Errors
///
/// Returns an error if anchors cannot be queried or a listener cannot be
/// attached.
pub fn install_smooth_scroll(root: &impl QueryRoot, document: &Document) -> Result<Vec<Listener>> {
    let anchors: Vec<Element> = query_all(root, ANCHOR_SELECTOR)?;
    tracing::debug!(count = anchors.len(), "attaching smooth scroll");

    anchors
        .iter()
        .map(|anchor| {
            let document = document.clone();
            let source = anchor.clone();
            Listener::attach(anchor, "click", move |event| {
                event.prevent_default();
                scroll_to_fragment(&document, &source);
            })
        })
        .collect()
}

/// Scrolls the anchor's target into view; returns whether a target existed
pub fn scroll_to_fragment(document: &Document, anchor: &Element) -> bool {
    let Some(href) = anchor.get_attribute("href") else {
        return false;
    };
    let Some(target) = fragment_selector(&href).and_then(|selector| query_one(document, selector))
    else {
        return false;
    };

    let options = ScrollIntoViewOptions::new();
    options.set_behavior(ScrollBehavior::Smooth);
    options.set_block(ScrollLogicalPosition::Start);
    target.scroll_into_view_with_scroll_into_view_options(&options);
    true
}

/// Lets the click through only on an explicit yes
pub fn confirm_or_cancel(
    confirm: &dyn Fn(&str) -> std::result::Result<bool, JsValue>,
    prompt: &str,
    event: &Event,
) {
    match confirm(prompt) {
        Ok(true) => {}
        Ok(false) => event.prevent_default(),
        Err(e) => {
            tracing::warn!(error = ?e, "confirmation unavailable, navigation cancelled");
            event.prevent_default();
        }
    }
}
