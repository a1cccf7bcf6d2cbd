//! Page-level wiring
//!
//! [`UiBehaviors::init`] is the single place that creates shared page
//! state (stylesheet, messages container) and installs every behavior.
//! The returned value owns all of it; dropping it detaches every listener
//! and cancels every pending timer.

use web_sys::{Document, Element};

use crate::behaviors::buttons::LoadingOptions;
use crate::behaviors::{MessageCenter, accounts, buttons, forms, links, masks, menu};
use crate::config::UiConfig;
use crate::dom::{self, Listener, styles};
use crate::error::Result;
use crate::models::{AlertId, Severity};

/// What initialization managed to wire up
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InstallSummary {
    /// Server-rendered alerts taken over
    pub alerts: usize,
    /// Account numbers regrouped
    pub account_numbers: usize,
    /// Event listeners attached
    pub listeners: usize,
    /// Behaviors that failed to install
    pub failures: usize,
}

/// All behaviors of one page
pub struct UiBehaviors {
    config: UiConfig,
    messages: MessageCenter,
    stylesheet: Option<Element>,
    listeners: Vec<Listener>,
    summary: InstallSummary,
}

impl UiBehaviors {
    /// Injects the stylesheet, sets up the message center and installs
    /// every behavior against `document`
    ///
    /// A behavior that fails to install is logged and skipped; the others
    /// still run.
    ///
    /// # Errors
    ///
    /// Returns an error only if the window or body is unavailable, since no
    /// alert could be shown without them.
    pub fn init(document: &Document, config: UiConfig) -> Result<Self> {
        let window = dom::window()?;
        let mut summary = InstallSummary::default();

        let stylesheet = styles::inject(document)
            .inspect_err(|e| tracing::warn!(error = %e, "continuing without stylesheet"))
            .ok();

        let messages = MessageCenter::new(document, config.timings)?;
        summary.alerts = tally(&mut summary.failures, "alerts", messages.adopt_existing())
            .unwrap_or_default();
        summary.account_numbers = tally(
            &mut summary.failures,
            "account numbers",
            accounts::format_numbers(document, &config.account_number_selectors),
        )
        .unwrap_or_default();

        let loading = LoadingOptions {
            processing_label: config.messages.processing_label.clone(),
            fallback_label: config.messages.fallback_button_label.clone(),
            restore_ms: config.timings.button_restore_ms,
        };

        // Validation listens first so it sees each submit before the
        // loading state does.
        let installs = [
            ("menu", menu::install(document)),
            ("forms", forms::install(document, &messages, &config.messages)),
            ("input masks", masks::install(document, config.pin_length)),
            (
                "destructive links",
                links::install_confirmations(
                    document,
                    &links::window_confirm(&window),
                    &config.destructive_patterns,
                    &config.messages.confirm_prompt,
                ),
            ),
            ("smooth scroll", links::install_smooth_scroll(document, document)),
            ("submit buttons", buttons::install(document, document, &loading)),
        ];

        let mut listeners = Vec::new();
        for (name, installed) in installs {
            if let Some(mut attached) = tally(&mut summary.failures, name, installed) {
                listeners.append(&mut attached);
            }
        }
        summary.listeners = listeners.len();

        tracing::info!(
            alerts = summary.alerts,
            account_numbers = summary.account_numbers,
            listeners = summary.listeners,
            failures = summary.failures,
            "page behaviors initialized"
        );

        Ok(Self {
            config,
            messages,
            stylesheet,
            listeners,
            summary,
        })
    }

    /// Shows a dismissible alert
    ///
    /// # Errors
    ///
    /// Returns an error if the alert cannot be added to the page.
    pub fn show_message(&self, message: &str, severity: Severity) -> Result<AlertId> {
        self.messages.show(message, severity)
    }

    #[must_use]
    pub const fn messages(&self) -> &MessageCenter {
        &self.messages
    }

    #[must_use]
    pub const fn config(&self) -> &UiConfig {
        &self.config
    }

    #[must_use]
    pub const fn summary(&self) -> InstallSummary {
        self.summary
    }

    #[must_use]
    pub const fn stylesheet(&self) -> Option<&Element> {
        self.stylesheet.as_ref()
    }

    #[must_use]
    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }
}

impl std::fmt::Debug for UiBehaviors {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UiBehaviors")
            .field("summary", &self.summary)
            .field("messages", &self.messages)
            .finish_non_exhaustive()
    }
}

/// Logs and counts a failed install, passing successes through
fn tally<T>(failures: &mut usize, name: &str, result: Result<T>) -> Option<T> {
    match result {
        Ok(value) => Some(value),
        Err(e) => {
            tracing::warn!(behavior = name, error = %e, "behavior not installed");
            *failures = failures.saturating_add(1);
            None
        }
    }
}
