//! Runtime configuration
//!
//! Defaults reproduce the stock behavior. A page can override any field by
//! embedding a JSON block:
//!
//! ```html
//! <script type="application/json" id="teller-ui-config">
//!   { "timings": { "alert_dismiss_ms": 8000 }, "log_level": "debug" }
//! </script>
//! ```

use serde::Deserialize;
use tracing::Level;
use web_sys::Document;

use crate::error::{Result, UiError};

/// Element id of the optional JSON configuration block
pub const CONFIG_ELEMENT_ID: &str = "teller-ui-config";

/// Delays driving the timer-based choreography
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Timings {
    /// Time an alert stays on screen before it starts fading
    pub alert_dismiss_ms: u32,
    /// Length of the fade-out animation before the node is removed
    pub alert_fade_ms: u32,
    /// Fallback delay before a busy submit button is re-enabled
    pub button_restore_ms: u32,
}

impl Default for Timings {
    fn default() -> Self {
        Self {
            alert_dismiss_ms: 5000,
            alert_fade_ms: 300,
            button_restore_ms: 5000,
        }
    }
}

/// User-facing strings
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Messages {
    pub required_fields: String,
    pub pin_mismatch: String,
    pub confirm_prompt: String,
    pub processing_label: String,
    pub fallback_button_label: String,
}

impl Default for Messages {
    fn default() -> Self {
        Self {
            required_fields: "Please fill in all required fields".to_string(),
            pin_mismatch: "PINs do not match".to_string(),
            confirm_prompt: "Are you sure you want to proceed?".to_string(),
            processing_label: "Processing...".to_string(),
            fallback_button_label: "Submit".to_string(),
        }
    }
}

/// Top-level configuration for [`crate::UiBehaviors`]
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    pub timings: Timings,
    pub messages: Messages,
    /// Maximum number of digits a PIN field accepts
    pub pin_length: usize,
    /// Substrings that mark a link as destructive
    pub destructive_patterns: Vec<String>,
    /// Selectors of elements holding raw 16-digit numbers
    pub account_number_selectors: Vec<String>,
    /// `trace`, `debug`, `info`, `warn` or `error`
    pub log_level: String,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            timings: Timings::default(),
            messages: Messages::default(),
            pin_length: 4,
            destructive_patterns: vec!["logout".to_string(), "delete".to_string()],
            account_number_selectors: vec![
                ".account-number".to_string(),
                ".card-number".to_string(),
            ],
            log_level: "info".to_string(),
        }
    }
}

impl UiConfig {
    /// Parses a configuration from JSON, filling missing fields with defaults
    ///
    /// # Errors
    ///
    /// Returns [`UiError::Config`] if the JSON is malformed or a field has
    /// the wrong type.
    ///
    /// # Example
    ///
    /// ```
    /// use teller_ui::config::UiConfig;
    ///
    /// let config = UiConfig::from_json(r#"{ "pin_length": 6 }"#)?;
    /// assert_eq!(config.pin_length, 6);
    /// assert_eq!(config.timings.alert_dismiss_ms, 5000);
    /// # Ok::<(), teller_ui::error::UiError>(())
    /// ```
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|e| UiError::Config(e.to_string()))
    }

    /// Reads the configuration block from the document, if one exists
    ///
    /// A missing block yields the defaults.
    ///
    /// # Errors
    ///
    /// Returns [`UiError::Config`] if the block is not valid configuration
    /// JSON. Callers fall back to the defaults with [`Self::or_defaults`].
    pub fn from_document(document: &Document) -> Result<Self> {
        document
            .get_element_by_id(CONFIG_ELEMENT_ID)
            .and_then(|element| element.text_content())
            .map_or_else(|| Ok(Self::default()), |text| Self::from_json(&text))
    }

    /// Splits a load result into a usable config and the rejected block's
    /// error, so a typo never disables the page
    #[must_use]
    pub fn or_defaults(loaded: Result<Self>) -> (Self, Option<UiError>) {
        match loaded {
            Ok(config) => (config, None),
            Err(e) => (Self::default(), Some(e)),
        }
    }

    /// Log level parsed from `log_level`, falling back to `INFO`
    #[must_use]
    pub fn max_level(&self) -> Level {
        self.log_level.parse().unwrap_or(Level::INFO)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_stock_behavior() {
        let config = UiConfig::default();
        assert_eq!(config.timings.alert_dismiss_ms, 5000);
        assert_eq!(config.timings.alert_fade_ms, 300);
        assert_eq!(config.timings.button_restore_ms, 5000);
        assert_eq!(config.pin_length, 4);
        assert_eq!(config.destructive_patterns, vec!["logout", "delete"]);
        assert_eq!(
            config.messages.required_fields,
            "Please fill in all required fields"
        );
    }

    #[test]
    fn test_partial_json_keeps_other_defaults() -> Result<()> {
        let config = UiConfig::from_json(r#"{ "timings": { "alert_fade_ms": 150 } }"#)?;
        assert_eq!(config.timings.alert_fade_ms, 150);
        assert_eq!(config.timings.alert_dismiss_ms, 5000);
        assert_eq!(config.messages, Messages::default());
        Ok(())
    }

    #[test]
    fn test_empty_object_is_default() -> Result<()> {
        assert_eq!(UiConfig::from_json("{}")?, UiConfig::default());
        Ok(())
    }

    #[test]
    fn test_malformed_json_is_config_error() {
        let result = UiConfig::from_json("{ pin_length: ");
        assert!(matches!(result, Err(UiError::Config(_))));
    }

    #[test]
    fn test_wrong_type_is_config_error() {
        let result = UiConfig::from_json(r#"{ "pin_length": "four" }"#);
        assert!(matches!(result, Err(UiError::Config(_))));
    }

    #[test]
    fn test_rejected_block_falls_back_with_its_error() {
        let (config, rejected) = UiConfig::or_defaults(UiConfig::from_json("{ pin_length: "));
        assert_eq!(config, UiConfig::default());
        assert!(matches!(rejected, Some(UiError::Config(_))));
    }

    #[test]
    fn test_accepted_block_has_no_error() {
        let (config, rejected) =
            UiConfig::or_defaults(UiConfig::from_json(r#"{ "pin_length": 6 }"#));
        assert_eq!(config.pin_length, 6);
        assert!(rejected.is_none());
    }

    #[test]
    fn test_max_level_parsing() {
        let mut config = UiConfig::default();
        assert_eq!(config.max_level(), Level::INFO);

        config.log_level = "debug".to_string();
        assert_eq!(config.max_level(), Level::DEBUG);

        config.log_level = "chatty".to_string();
        assert_eq!(config.max_level(), Level::INFO);
    }
}
