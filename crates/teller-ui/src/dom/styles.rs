//! Stylesheet fragment injected at initialization

use web_sys::{Document, Element};

use crate::error::{DomResultExt, Result, UiError};

/// Id of the injected `<style>` element
pub const STYLE_ELEMENT_ID: &str = "teller-ui-styles";

/// Fade-out keyframes, open menu layout and hamburger animation
pub const STYLESHEET: &str = r"
    @keyframes fadeOut {
        from {
            opacity: 1;
            transform: translateX(0);
        }
        to {
            opacity: 0;
            transform: translateX(100%);
        }
    }

    .nav-menu.active {
        display: flex !important;
        flex-direction: column;
        position: absolute;
        top: 100%;
        left: 0;
        right: 0;
        background: var(--card-bg);
        box-shadow: var(--shadow);
        padding: 1rem;
    }

    .hamburger.active span:nth-child(1) {
        transform: rotate(45deg) translate(5px, 5px);
    }

    .hamburger.active span:nth-child(2) {
        opacity: 0;
    }

    .hamburger.active span:nth-child(3) {
        transform: rotate(-45deg) translate(7px, -6px);
    }
";

/// Appends the stylesheet to `<head>`, or returns the one already there
///
/// # Errors
///
/// Returns an error if the document has no head or the element cannot be
/// created.
pub fn inject(document: &Document) -> Result<Element> {
    if let Some(existing) = document.get_element_by_id(STYLE_ELEMENT_ID) {
        tracing::debug!("stylesheet already present");
        return Ok(existing);
    }

    let head = document
        .head()
        .ok_or_else(|| UiError::Dom {
            context: "failed to inject stylesheet".to_string(),
            message: "document has no head".to_string(),
        })?;

    let style = document
        .create_element("style")
        .context("failed to create style element")?;
    style.set_id(STYLE_ELEMENT_ID);
    style.set_text_content(Some(STYLESHEET));

    head.append_child(&style)
        .context("failed to append stylesheet")?;

    Ok(style)
}
