//! Loading state of a submit button

/// Original label plus busy flag for one submit button
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ButtonLoadingState {
    original_label: Option<String>,
    busy: bool,
}

impl ButtonLoadingState {
    /// Captures the label present at initialization. Blank labels are not
    /// worth restoring, so they are dropped in favor of the fallback.
    #[must_use]
    pub fn capture(label: Option<String>) -> Self {
        Self {
            original_label: label.filter(|text| !text.trim().is_empty()),
            busy: false,
        }
    }

    #[must_use]
    pub fn original_label(&self) -> Option<&str> {
        self.original_label.as_deref()
    }

    #[must_use]
    pub const fn is_busy(&self) -> bool {
        self.busy
    }

    pub fn start(&mut self) {
        self.busy = true;
    }

    /// Clears the busy flag and returns the label to put back
    pub fn restore<'a>(&'a mut self, fallback: &'a str) -> &'a str {
        self.busy = false;
        self.original_label.as_deref().unwrap_or(fallback)
    }
}
