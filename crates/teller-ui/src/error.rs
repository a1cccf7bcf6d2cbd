//! Error types for the page behaviors
//!
//! Every DOM call that can fail returns a `Result`; the `JsValue` payloads
//! web-sys hands back are flattened into strings with the operation that
//! produced them attached as context.

use wasm_bindgen::JsValue;

/// Errors raised while wiring or running page behaviors
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum UiError {
    /// No `window` global (not running in a browser)
    #[error("failed to get window: window is not available")]
    WindowUnavailable,

    /// Window exists but has no document
    #[error("failed to get document: document is not available")]
    DocumentUnavailable,

    /// Document has no `<body>` yet
    #[error("failed to get body: document has no body element")]
    BodyUnavailable,

    /// A DOM operation returned an exception
    #[error("{context}: {message}")]
    Dom {
        /// Operation that failed
        context: String,
        /// Stringified JavaScript exception
        message: String,
    },

    /// Configuration block could not be parsed
    #[error("invalid configuration: {0}")]
    Config(String),

    /// An exported entry point was called before `UiBehaviors::init`
    #[error("page behaviors are not initialized")]
    NotInitialized,
}

impl UiError {
    /// Builds a [`UiError::Dom`] from a failed web-sys call.
    #[must_use]
    pub fn dom(context: &str, value: &JsValue) -> Self {
        let message = value
            .as_string()
            .unwrap_or_else(|| format!("{value:?}"));
        Self::Dom {
            context: context.to_string(),
            message,
        }
    }
}

impl From<UiError> for JsValue {
    fn from(error: UiError) -> Self {
        Self::from_str(&error.to_string())
    }
}

/// Result type alias for page behavior operations
pub type Result<T> = std::result::Result<T, UiError>;

/// Attaches context to web-sys results whose error type is `JsValue`
pub trait DomResultExt<T> {
    /// Converts the `JsValue` error into [`UiError::Dom`]
    ///
    /// # Errors
    ///
    /// Returns [`UiError::Dom`] carrying `context` if `self` is an error.
    fn context(self, context: &str) -> Result<T>;
}

impl<T> DomResultExt<T> for std::result::Result<T, JsValue> {
    fn context(self, context: &str) -> Result<T> {
        self.map_err(|value| UiError::dom(context, &value))
    }
}
