//! Individual page behaviors
//!
//! Each behavior is a leaf: it queries its elements, attaches listeners and
//! hands the listener handles back to [`crate::UiBehaviors`], which keeps
//! them alive for the page's lifetime. Only form validation talks to
//! another behavior, through the [`alerts::MessageCenter`].

pub mod accounts;
pub mod alerts;
pub mod buttons;
pub mod forms;
pub mod links;
pub mod masks;
pub mod menu;

pub use alerts::MessageCenter;

#[cfg(all(test, target_arch = "wasm32"))]
mod forms_test;
