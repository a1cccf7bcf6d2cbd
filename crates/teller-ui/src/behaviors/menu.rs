//! Mobile navigation toggle

use web_sys::Element;

use crate::dom::{Listener, QueryRoot, query_one};
use crate::error::{DomResultExt, Result};
use crate::models::MenuState;

pub const TOGGLE_SELECTOR: &str = ".hamburger";
pub const MENU_SELECTOR: &str = ".nav-menu";
pub const ACTIVE_CLASS: &str = "active";

/// Wires the hamburger to the navigation menu
///
/// Pages without either element get no listener.
///
/// # Errors
///
/// Returns an error if the click listener cannot be attached.
pub fn install(root: &impl QueryRoot) -> Result<Vec<Listener>> {
    let (Some(toggle), Some(menu)) = (
        query_one(root, TOGGLE_SELECTOR),
        query_one(root, MENU_SELECTOR),
    ) else {
        tracing::debug!("no navigation toggle on this page");
        return Ok(Vec::new());
    };

    let target = toggle.clone();
    let listener = Listener::attach(&target, "click", move |_event| {
        match toggle_menu(&toggle, &menu) {
            Ok(state) => tracing::debug!(open = state.is_open(), "navigation toggled"),
            Err(e) => tracing::warn!(error = %e, "navigation toggle failed"),
        }
    })?;

    Ok(vec![listener])
}

/// Flips `active` on the menu and on the toggle, each on its own
///
/// Returns the menu's new state.
///
/// # Errors
///
/// Returns an error if either class list rejects the update.
pub fn toggle_menu(toggle: &Element, menu: &Element) -> Result<MenuState> {
    let open = menu
        .class_list()
        .toggle(ACTIVE_CLASS)
        .context("failed to toggle menu")?;
    toggle
        .class_list()
        .toggle(ACTIVE_CLASS)
        .context("failed to toggle hamburger")?;

    Ok(MenuState::from_active(open))
}
