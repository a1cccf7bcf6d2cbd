//! Alert lifecycle state machine
//!
//! An alert moves `Visible -> Dismissing -> Removed` and never backwards.
//! Both dismissal triggers (timer and close button) go through
//! [`AlertLifecycle::begin_dismiss`], which only succeeds once, so the node
//! is faded and removed exactly once however the triggers interleave.

/// Lifecycle phase of a single alert
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AlertPhase {
    /// On screen, auto-dismiss pending
    #[default]
    Visible,
    /// Fade-out animation running
    Dismissing,
    /// Detached from the document
    Removed,
}

/// What started the dismissal
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DismissCause {
    Timeout,
    CloseButton,
}

/// Identifier of an alert inside the message center
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct AlertId(u64);

impl AlertId {
    #[must_use]
    pub const fn new(raw: u64) -> Self {
        Self(raw)
    }

    #[must_use]
    pub const fn value(self) -> u64 {
        self.0
    }

    /// Next identifier; wraps rather than overflowing
    #[must_use]
    pub const fn next(self) -> Self {
        Self(self.0.wrapping_add(1))
    }
}

/// Tracks one alert's phase and the trigger that ended it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct AlertLifecycle {
    phase: AlertPhase,
    cause: Option<DismissCause>,
}

impl AlertLifecycle {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            phase: AlertPhase::Visible,
            cause: None,
        }
    }

    #[must_use]
    pub const fn phase(&self) -> AlertPhase {
        self.phase
    }

    #[must_use]
    pub const fn cause(&self) -> Option<DismissCause> {
        self.cause
    }

    /// Starts the fade-out. Returns `false` if a dismissal already began.
    pub fn begin_dismiss(&mut self, cause: DismissCause) -> bool {
        match self.phase {
            AlertPhase::Visible => {
                self.phase = AlertPhase::Dismissing;
                self.cause = Some(cause);
                true
            }
            AlertPhase::Dismissing | AlertPhase::Removed => false,
        }
    }

    /// Marks the node removed. Returns `false` unless it was fading.
    pub fn finish(&mut self) -> bool {
        match self.phase {
            AlertPhase::Dismissing => {
                self.phase = AlertPhase::Removed;
                true
            }
            AlertPhase::Visible | AlertPhase::Removed => false,
        }
    }
}
