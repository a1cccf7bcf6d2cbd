//! Event listeners that detach when dropped

use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{Event, EventTarget};

use crate::error::{DomResultExt, Result};

/// Closure signature for every listener this crate installs
type EventClosure = Closure<dyn FnMut(Event)>;

/// An attached event listener
///
/// Owns both the closure and the target; dropping the handle removes the
/// listener, so whoever owns the handle decides how long the listener lives.
pub struct Listener {
    target: EventTarget,
    event_type: &'static str,
    closure: EventClosure,
}

impl Listener {
    /// Attaches `handler` to `target` for `event_type`
    ///
    /// # Errors
    ///
    /// Returns [`crate::error::UiError::Dom`] if the browser rejects the
    /// listener.
    pub fn attach<F>(target: &EventTarget, event_type: &'static str, handler: F) -> Result<Self>
    where
        F: FnMut(Event) + 'static,
    {
        let closure: EventClosure = Closure::wrap(Box::new(handler));
        target
            .add_event_listener_with_callback(event_type, closure.as_ref().unchecked_ref())
            .context("failed to add event listener")?;

        Ok(Self {
            target: target.clone(),
            event_type,
            closure,
        })
    }

    #[must_use]
    pub const fn event_type(&self) -> &'static str {
        self.event_type
    }
}

impl Drop for Listener {
    fn drop(&mut self) {
        // Nothing to recover if removal fails; the closure is freed either way.
        let _ = self.target.remove_event_listener_with_callback(
            self.event_type,
            self.closure.as_ref().unchecked_ref(),
        );
    }
}

impl std::fmt::Debug for Listener {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Listener")
            .field("event_type", &self.event_type)
            .finish_non_exhaustive()
    }
}
