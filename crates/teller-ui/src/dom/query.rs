//! Typed wrappers around `querySelectorAll`

use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, NodeList};

use crate::error::{DomResultExt, Result};

/// Anything selectors can be run against
pub trait QueryRoot {
    /// Raw `querySelectorAll`
    ///
    /// # Errors
    ///
    /// Returns the browser's `SyntaxError` for an invalid selector.
    fn select_all(&self, selector: &str) -> std::result::Result<NodeList, JsValue>;

    /// Raw `querySelector`
    ///
    /// # Errors
    ///
    /// Returns the browser's `SyntaxError` for an invalid selector.
    fn select_one(&self, selector: &str) -> std::result::Result<Option<Element>, JsValue>;
}

impl QueryRoot for Document {
    fn select_all(&self, selector: &str) -> std::result::Result<NodeList, JsValue> {
        self.query_selector_all(selector)
    }

    fn select_one(&self, selector: &str) -> std::result::Result<Option<Element>, JsValue> {
        self.query_selector(selector)
    }
}

impl QueryRoot for Element {
    fn select_all(&self, selector: &str) -> std::result::Result<NodeList, JsValue> {
        self.query_selector_all(selector)
    }

    fn select_one(&self, selector: &str) -> std::result::Result<Option<Element>, JsValue> {
        self.query_selector(selector)
    }
}

/// Every element under `root` matching `selector`, cast to `T`
///
/// Nodes that are not a `T` are skipped.
///
/// # Errors
///
/// Returns [`crate::error::UiError::Dom`] if `selector` is not a valid CSS
/// selector.
pub fn query_all<T>(root: &impl QueryRoot, selector: &str) -> Result<Vec<T>>
where
    T: JsCast,
{
    let list = root
        .select_all(selector)
        .context("failed to query elements")?;
    Ok(collect(&list))
}

/// First match for `selector` under `root`; invalid selectors count as no match
#[must_use]
pub fn query_one(root: &impl QueryRoot, selector: &str) -> Option<Element> {
    root.select_one(selector).ok().flatten()
}

fn collect<T: JsCast>(list: &NodeList) -> Vec<T> {
    (0..list.length())
        .filter_map(|index| list.item(index))
        .filter_map(|node| node.dyn_into::<T>().ok())
        .collect()
}
