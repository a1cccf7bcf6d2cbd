//! Transient state owned by the page behaviors

pub mod alert;
pub mod button;
pub mod menu;
pub mod severity;

pub use alert::{AlertId, AlertLifecycle, AlertPhase, DismissCause};
pub use button::ButtonLoadingState;
pub use menu::MenuState;
pub use severity::Severity;
