//! Submit-time form checks
//!
//! The form behavior reads every required control's value, hands the values
//! here, and applies the returned verdict: per-field marks plus at most one
//! message to surface.

/// Visual mark for a single field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldMark {
    /// Normal border
    Valid,
    /// Danger-colored border
    Invalid,
}

impl FieldMark {
    /// CSS value for the field's `border-color`
    #[must_use]
    pub const fn border_color(self) -> &'static str {
        match self {
            Self::Valid => "var(--border-color)",
            Self::Invalid => "var(--danger-color)",
        }
    }
}

/// Why a submit was cancelled
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rejection {
    MissingRequired,
    PinMismatch,
}

/// Outcome of checking the required fields of one submit
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequiredCheck {
    marks: Vec<FieldMark>,
}

impl RequiredCheck {
    /// Marks each value, in order. A value counts as filled when it has
    /// anything besides whitespace.
    ///
    /// # Example
    ///
    /// ```
    /// use teller_ui::validation::{FieldMark, RequiredCheck};
    ///
    /// let check = RequiredCheck::run(["alice", "  ", "100"]);
    /// assert!(!check.is_valid());
    /// assert_eq!(check.marks()[1], FieldMark::Invalid);
    /// ```
    pub fn run<'a, I>(values: I) -> Self
    where
        I: IntoIterator<Item = &'a str>,
    {
        let marks = values
            .into_iter()
            .map(|value| {
                if value.trim().is_empty() {
                    FieldMark::Invalid
                } else {
                    FieldMark::Valid
                }
            })
            .collect();
        Self { marks }
    }

    #[must_use]
    pub fn marks(&self) -> &[FieldMark] {
        &self.marks
    }

    /// True when every field is filled (vacuously true with no fields)
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.marks.iter().all(|mark| *mark == FieldMark::Valid)
    }

    /// Number of fields that will be marked invalid
    #[must_use]
    pub fn missing(&self) -> usize {
        self.marks
            .iter()
            .filter(|mark| **mark == FieldMark::Invalid)
            .count()
    }
}

/// Whether a PIN and its confirmation disagree
///
/// Only reports a mismatch once both are filled in; an empty side is the
/// required-field check's business.
#[must_use]
pub fn pins_mismatch(pin: &str, confirm: &str) -> bool {
    let (pin, confirm) = (pin.trim(), confirm.trim());
    !pin.is_empty() && !confirm.is_empty() && pin != confirm
}

/// Combines both checks; required fields take precedence so a submit
/// never yields more than one rejection.
#[must_use]
pub fn verdict(required: &RequiredCheck, pin_pair: Option<(&str, &str)>) -> Option<Rejection> {
    if !required.is_valid() {
        return Some(Rejection::MissingRequired);
    }
    match pin_pair {
        Some((pin, confirm)) if pins_mismatch(pin, confirm) => Some(Rejection::PinMismatch),
        _ => None,
    }
}
