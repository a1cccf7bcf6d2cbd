//! Account and card number grouping

use web_sys::Element;

use crate::dom::{QueryRoot, query_all};
use crate::error::Result;
use crate::format::format_account_number;

/// Groups the numbers in every element matching `selectors`
///
/// Returns how many elements were rewritten. Elements whose text is not a
/// 16-character number are skipped silently.
///
/// # Errors
///
/// Returns an error if one of the selectors is invalid.
pub fn format_numbers(root: &impl QueryRoot, selectors: &[String]) -> Result<usize> {
    let mut formatted = 0_usize;
    for selector in selectors {
        let elements: Vec<Element> = query_all(root, selector)?;
        let rewritten = elements.iter().filter(|e| format_element(e)).count();
        formatted = formatted.saturating_add(rewritten);
    }

    tracing::debug!(formatted, "formatted account numbers");
    Ok(formatted)
}

/// Rewrites one element's text; returns whether it changed
pub fn format_element(element: &Element) -> bool {
    let Some(grouped) = element
        .text_content()
        .as_deref()
        .and_then(format_account_number)
    else {
        return false;
    };
    element.set_text_content(Some(&grouped));
    true
}
