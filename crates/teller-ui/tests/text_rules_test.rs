//! Integration tests for the pure rules behind the page behaviors
//!
//! These run natively; the DOM wiring is covered by the wasm-bindgen tests.

use teller_ui::behaviors::links::{fragment_selector, is_destructive_href};
use teller_ui::config::UiConfig;
use teller_ui::format::{clamp_non_negative, format_account_number, mask_pin};
use teller_ui::models::{AlertLifecycle, AlertPhase, DismissCause, MenuState, Severity};
use teller_ui::validation::{FieldMark, Rejection, RequiredCheck, verdict};

#[test]
fn test_account_number_display() {
    assert_eq!(
        format_account_number("1234567890123456").as_deref(),
        Some("1234 5678 9012 3456")
    );
    assert_eq!(format_account_number("123"), None);
}

#[test]
fn test_pin_typing_sequence() {
    let config = UiConfig::default();
    let mut shown = String::new();
    for keystroke in "12a3456".chars() {
        shown.push(keystroke);
        shown = mask_pin(&shown, config.pin_length);
    }
    assert_eq!(shown, "1234");
}

#[test]
fn test_numeric_field_clamp() {
    assert_eq!(clamp_non_negative("-5"), Some("0"));
    assert_eq!(clamp_non_negative("10"), None);
}

#[test]
fn test_registration_form_submit() {
    // username, password, pin, confirm_pin
    let incomplete = RequiredCheck::run(["alice", "", "1234", "1234"]);
    assert_eq!(incomplete.missing(), 1);
    assert_eq!(incomplete.marks().get(1), Some(&FieldMark::Invalid));
    assert_eq!(
        verdict(&incomplete, Some(("1234", "1234"))),
        Some(Rejection::MissingRequired)
    );

    let complete = RequiredCheck::run(["alice", "hunter2", "1234", "1234"]);
    assert_eq!(verdict(&complete, Some(("1234", "1234"))), None);
    assert_eq!(
        verdict(&complete, Some(("1234", "4321"))),
        Some(Rejection::PinMismatch)
    );
}

#[test]
fn test_alert_dismissed_by_either_trigger_once() {
    for (first, second) in [
        (DismissCause::Timeout, DismissCause::CloseButton),
        (DismissCause::CloseButton, DismissCause::Timeout),
    ] {
        let mut lifecycle = AlertLifecycle::new();
        assert!(lifecycle.begin_dismiss(first));
        assert!(!lifecycle.begin_dismiss(second));
        assert!(lifecycle.finish());
        assert!(!lifecycle.finish());
        assert_eq!(lifecycle.phase(), AlertPhase::Removed);
        assert_eq!(lifecycle.cause(), Some(first));
    }
}

#[test]
fn test_menu_double_toggle() {
    let start = MenuState::default();
    assert_eq!(start.toggled().toggled(), start);
}

#[test]
fn test_message_severity_classes() {
    assert_eq!(Severity::parse("info").class_name(), "alert-info");
    assert_eq!(Severity::parse("error").class_name(), "alert-error");
}

#[test]
fn test_link_rules_with_default_config() {
    let config = UiConfig::default();
    assert!(is_destructive_href(
        "/accounts/logout/",
        &config.destructive_patterns
    ));
    assert!(!is_destructive_href("/transfer/", &config.destructive_patterns));
    assert_eq!(fragment_selector("#top"), Some("#top"));
    assert_eq!(fragment_selector("#"), None);
}
