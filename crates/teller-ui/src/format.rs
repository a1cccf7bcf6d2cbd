//! Text rewriting for display and input masks
//!
//! Pure functions; the DOM behaviors feed them element text and input
//! values and write back whatever they return.

/// Length of a raw account or card number
pub const ACCOUNT_NUMBER_LEN: usize = 16;

/// Digits per display group
const GROUP_LEN: usize = 4;

/// Groups a 16-character account number into blocks of four
///
/// Returns `None` when the trimmed text is not exactly 16 characters; such
/// elements are left untouched.
///
/// # Example
///
/// ```
/// use teller_ui::format::format_account_number;
///
/// assert_eq!(
///     format_account_number(" 1234567890123456 ").as_deref(),
///     Some("1234 5678 9012 3456")
/// );
/// assert_eq!(format_account_number("123"), None);
/// ```
#[must_use]
pub fn format_account_number(text: &str) -> Option<String> {
    let chars: Vec<char> = text.trim().chars().collect();
    if chars.len() != ACCOUNT_NUMBER_LEN {
        return None;
    }

    let groups: Vec<String> = chars
        .chunks(GROUP_LEN)
        .map(|group| group.iter().collect())
        .collect();
    Some(groups.join(" "))
}

/// Keeps only ASCII digits, truncated to `max_len`
///
/// # Example
///
/// ```
/// use teller_ui::format::mask_pin;
///
/// assert_eq!(mask_pin("12a3456", 4), "1234");
/// ```
#[must_use]
pub fn mask_pin(value: &str, max_len: usize) -> String {
    value
        .chars()
        .filter(char::is_ascii_digit)
        .take(max_len)
        .collect()
}

/// Replacement for a numeric field holding a negative number
///
/// Returns `Some("0")` when the value parses below zero. Empty and
/// non-numeric values are not numbers below zero, so they stay as typed.
#[must_use]
pub fn clamp_non_negative(value: &str) -> Option<&'static str> {
    value
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|number| *number < 0.0)
        .map(|_| "0")
}
