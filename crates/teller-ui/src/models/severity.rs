//! Alert severity categories

use std::fmt;

/// Category of an alert, rendered as the `alert-{name}` class
///
/// The well-known categories match the message tags the server emits;
/// anything else is carried through verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Severity {
    #[default]
    Info,
    Success,
    Warning,
    Error,
    Other(String),
}

impl Severity {
    /// Parses a category name. Blank input falls back to `Info`.
    ///
    /// # Example
    ///
    /// ```
    /// use teller_ui::models::Severity;
    ///
    /// assert_eq!(Severity::parse("error"), Severity::Error);
    /// assert_eq!(Severity::parse(""), Severity::Info);
    /// assert_eq!(Severity::parse("debug").class_name(), "alert-debug");
    /// ```
    #[must_use]
    pub fn parse(name: &str) -> Self {
        match name.trim() {
            "" | "info" => Self::Info,
            "success" => Self::Success,
            "warning" => Self::Warning,
            "error" => Self::Error,
            other => Self::Other(other.to_string()),
        }
    }

    /// Recovers the severity from an alert's class list
    ///
    /// Returns the first `alert-*` class, or `Info` when none is present.
    #[must_use]
    pub fn from_class_list(classes: &str) -> Self {
        classes
            .split_whitespace()
            .find_map(|class| class.strip_prefix("alert-"))
            .map_or(Self::Info, Self::parse)
    }

    /// Category name as it appears in markup
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Info => "info",
            Self::Success => "success",
            Self::Warning => "warning",
            Self::Error => "error",
            Self::Other(name) => name,
        }
    }

    /// CSS class applied to the alert node
    #[must_use]
    pub fn class_name(&self) -> String {
        format!("alert-{}", self.as_str())
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_known_categories() {
        assert_eq!(Severity::parse("info"), Severity::Info);
        assert_eq!(Severity::parse("success"), Severity::Success);
        assert_eq!(Severity::parse("warning"), Severity::Warning);
        assert_eq!(Severity::parse(" error "), Severity::Error);
    }

    #[test]
    fn test_free_form_category_round_trips_class() {
        let severity = Severity::parse("debug");
        assert_eq!(severity, Severity::Other("debug".to_string()));
        assert_eq!(severity.class_name(), "alert-debug");
    }

    #[test]
    fn test_from_class_list() {
        assert_eq!(
            Severity::from_class_list("alert alert-success fade-in"),
            Severity::Success
        );
        assert_eq!(Severity::from_class_list("alert"), Severity::Info);
        assert_eq!(Severity::from_class_list(""), Severity::Info);
    }

    #[test]
    fn test_default_is_info() {
        assert_eq!(Severity::default().class_name(), "alert-info");
        assert_eq!(Severity::Warning.to_string(), "warning");
    }
}
