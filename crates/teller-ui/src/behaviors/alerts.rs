//! Alert lifecycle manager
//!
//! The [`MessageCenter`] owns every live alert together with its pending
//! timers and close-button listener. Timers are cancellable `Timeout`
//! handles: a manual close drops the pending auto-dismiss timer, and
//! removing an alert drops everything it owned. Callbacks only hold a
//! `Weak` reference back to the registry, so a dropped message center takes
//! its alerts' callbacks down with it.

use std::cell::RefCell;
use std::collections::BTreeMap;
use std::rc::{Rc, Weak};

use gloo_timers::callback::Timeout;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement};

use crate::config::Timings;
use crate::dom::{self, Listener, query_all, query_one};
use crate::error::{DomResultExt, Result};
use crate::models::{AlertId, AlertLifecycle, AlertPhase, DismissCause, Severity};

/// Class of the container programmatic alerts are appended to
pub const CONTAINER_CLASS: &str = "messages-container";

/// Selector for alert nodes, server-rendered or not
pub const ALERT_SELECTOR: &str = ".alert";

/// Selector for an alert's close control
pub const CLOSE_SELECTOR: &str = ".close-alert";

/// Set on every alert a message center has taken charge of
pub const MANAGED_ATTR: &str = "data-alert-managed";

struct AlertEntry {
    element: Element,
    severity: Severity,
    lifecycle: AlertLifecycle,
    dismiss_timer: Option<Timeout>,
    removal_timer: Option<Timeout>,
    _close_listener: Option<Listener>,
}

struct Registry {
    document: Document,
    container: Element,
    timings: Timings,
    next_id: AlertId,
    alerts: BTreeMap<AlertId, AlertEntry>,
}

type SharedRegistry = Rc<RefCell<Registry>>;

/// Shows, tracks and dismisses alerts
#[derive(Clone)]
pub struct MessageCenter {
    registry: SharedRegistry,
}

impl MessageCenter {
    /// Finds the messages container, creating it at the end of `<body>` if
    /// the page has none
    ///
    /// # Errors
    ///
    /// Returns an error if the body is missing or the container cannot be
    /// created.
    pub fn new(document: &Document, timings: Timings) -> Result<Self> {
        let selector = format!(".{CONTAINER_CLASS}");
        let container = match query_one(document, &selector) {
            Some(existing) => existing,
            None => {
                let container = document
                    .create_element("div")
                    .context("failed to create messages container")?;
                container.set_class_name(CONTAINER_CLASS);
                dom::body(document)?
                    .append_child(&container)
                    .context("failed to append messages container")?;
                tracing::debug!("created messages container");
                container
            }
        };

        Ok(Self {
            registry: Rc::new(RefCell::new(Registry {
                document: document.clone(),
                container,
                timings,
                next_id: AlertId::new(0),
                alerts: BTreeMap::new(),
            })),
        })
    }

    /// Takes over the alerts already in the page
    ///
    /// Alerts another message center already manages are left to it.
    ///
    /// # Errors
    ///
    /// Returns an error if the document cannot be queried or a close
    /// listener cannot be attached.
    pub fn adopt_existing(&self) -> Result<usize> {
        let document = self.registry.borrow().document.clone();
        let alerts: Vec<Element> = query_all(&document, ALERT_SELECTOR)?;
        let alerts: Vec<Element> = alerts
            .into_iter()
            .filter(|element| !element.has_attribute(MANAGED_ATTR))
            .collect();
        let count = alerts.len();

        for element in alerts {
            let severity = Severity::from_class_list(&element.class_name());
            self.register(element, severity)?;
        }

        tracing::debug!(count, "adopted server-rendered alerts");
        Ok(count)
    }

    /// Appends a dismissible alert to the messages container
    ///
    /// The message is inserted as text, never parsed as markup.
    ///
    /// # Errors
    ///
    /// Returns an error if the alert nodes cannot be created or attached.
    pub fn show(&self, message: &str, severity: Severity) -> Result<AlertId> {
        let (document, container) = {
            let registry = self.registry.borrow();
            (registry.document.clone(), registry.container.clone())
        };

        let alert = document
            .create_element("div")
            .context("failed to create alert")?;
        alert.set_class_name(&format!("alert {} fade-in", severity.class_name()));
        alert
            .append_child(&document.create_text_node(message))
            .context("failed to set alert text")?;

        let close = document
            .create_element("button")
            .context("failed to create close button")?;
        close.set_class_name("close-alert");
        close
            .set_attribute("type", "button")
            .context("failed to set close button type")?;
        close
            .set_attribute("aria-label", "Close")
            .context("failed to set close button label")?;
        close.set_text_content(Some("\u{00d7}"));
        alert
            .append_child(&close)
            .context("failed to attach close button")?;

        container
            .append_child(&alert)
            .context("failed to append alert")?;

        tracing::debug!(%severity, "showing message");
        self.register(alert, severity)
    }

    /// Starts dismissing an alert now, as if its close button was clicked
    pub fn dismiss(&self, id: AlertId) {
        begin_dismiss(&Rc::downgrade(&self.registry), id, DismissCause::CloseButton);
    }

    /// Current phase of an alert; `Removed` once it is gone
    #[must_use]
    pub fn phase(&self, id: AlertId) -> AlertPhase {
        self.registry
            .borrow()
            .alerts
            .get(&id)
            .map_or(AlertPhase::Removed, |entry| entry.lifecycle.phase())
    }

    /// Severity of a live alert
    #[must_use]
    pub fn severity(&self, id: AlertId) -> Option<Severity> {
        self.registry
            .borrow()
            .alerts
            .get(&id)
            .map(|entry| entry.severity.clone())
    }

    /// Number of alerts still attached to the document
    #[must_use]
    pub fn live_count(&self) -> usize {
        self.registry.borrow().alerts.len()
    }

    /// Container programmatic alerts are appended to
    #[must_use]
    pub fn container(&self) -> Element {
        self.registry.borrow().container.clone()
    }

    fn register(&self, element: Element, severity: Severity) -> Result<AlertId> {
        element
            .set_attribute(MANAGED_ATTR, "")
            .context("failed to mark alert")?;
        let weak = Rc::downgrade(&self.registry);

        let id = {
            let mut registry = self.registry.borrow_mut();
            let id = registry.next_id;
            registry.next_id = id.next();
            id
        };

        let close_listener = match query_one(&element, CLOSE_SELECTOR) {
            Some(button) => {
                let weak = weak.clone();
                Some(Listener::attach(&button, "click", move |_event| {
                    begin_dismiss(&weak, id, DismissCause::CloseButton);
                })?)
            }
            None => None,
        };

        let dismiss_ms = self.registry.borrow().timings.alert_dismiss_ms;
        let dismiss_timer = Timeout::new(dismiss_ms, move || {
            begin_dismiss(&weak, id, DismissCause::Timeout);
        });

        self.registry.borrow_mut().alerts.insert(
            id,
            AlertEntry {
                element,
                severity,
                lifecycle: AlertLifecycle::new(),
                dismiss_timer: Some(dismiss_timer),
                removal_timer: None,
                _close_listener: close_listener,
            },
        );

        Ok(id)
    }
}

impl std::fmt::Debug for MessageCenter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MessageCenter")
            .field("live_count", &self.live_count())
            .finish_non_exhaustive()
    }
}

/// `animation` shorthand for the fade-out
fn fade_animation(fade_ms: u32) -> String {
    format!("fadeOut {fade_ms}ms")
}

fn begin_dismiss(registry: &Weak<RefCell<Registry>>, id: AlertId, cause: DismissCause) {
    let Some(registry) = registry.upgrade() else {
        return;
    };
    let weak = Rc::downgrade(&registry);

    let Ok(mut guard) = registry.try_borrow_mut() else {
        tracing::warn!(alert = id.value(), "alert registry busy, dismissal skipped");
        return;
    };
    let fade_ms = guard.timings.alert_fade_ms;
    let Some(entry) = guard.alerts.get_mut(&id) else {
        return;
    };
    if !entry.lifecycle.begin_dismiss(cause) {
        return;
    }

    // Cancels the auto-dismiss when the close button got there first.
    drop(entry.dismiss_timer.take());

    if let Some(element) = entry.element.dyn_ref::<HtmlElement>() {
        let animation = fade_animation(fade_ms);
        if let Err(e) = element
            .style()
            .set_property("animation", &animation)
            .context("failed to start fade-out")
        {
            tracing::warn!(error = %e, "alert removed without animation");
        }
    }

    entry.removal_timer = Some(Timeout::new(fade_ms, move || finish_removal(&weak, id)));
    tracing::debug!(alert = id.value(), ?cause, "dismissing alert");
}

fn finish_removal(registry: &Weak<RefCell<Registry>>, id: AlertId) {
    let Some(registry) = registry.upgrade() else {
        return;
    };

    let entry = match registry.try_borrow_mut() {
        Ok(mut guard) => guard.alerts.remove(&id),
        Err(_) => {
            tracing::warn!(alert = id.value(), "alert registry busy, removal skipped");
            return;
        }
    };

    let Some(mut entry) = entry else {
        return;
    };
    if entry.lifecycle.finish() {
        entry.element.remove();
        tracing::debug!(alert = id.value(), "alert removed");
    }
}
