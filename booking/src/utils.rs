//! Input validation and formatting helpers.

use chrono::DateTime;

/// Minimal email shape check: one `@` with a non-empty local part and a
/// domain containing a dot. Blocks submission before any network call;
/// the backend performs authoritative validation.
#[must_use]
pub fn is_valid_email(email: &str) -> bool {
    let email = email.trim();
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    !local.is_empty()
        && !domain.is_empty()
        && domain.contains('.')
        && !domain.starts_with('.')
        && !domain.ends_with('.')
}

/// OTP shape check: non-empty, digits only.
#[must_use]
pub fn is_valid_otp(otp: &str) -> bool {
    !otp.is_empty() && otp.chars().all(|c| c.is_ascii_digit())
}

/// Format a slot's ISO start time as a 12-hour clock label ("9:00 AM").
///
/// Falls back to the raw string if it does not parse; the backend keeps
/// the authoritative slot record either way.
#[must_use]
pub fn format_slot_time(start_time: &str) -> String {
    DateTime::parse_from_rfc3339(start_time).map_or_else(
        |_| start_time.to_string(),
        |dt| dt.format("%-I:%M %p").to_string(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_plain_addresses() {
        assert!(is_valid_email("guest@example.com"));
        assert!(is_valid_email("  guest@example.com "));
        assert!(is_valid_email("a.b+c@mail.example.co"));
    }

    #[test]
    fn rejects_malformed_addresses() {
        assert!(!is_valid_email(""));
        assert!(!is_valid_email("guest"));
        assert!(!is_valid_email("@example.com"));
        assert!(!is_valid_email("guest@"));
        assert!(!is_valid_email("guest@example"));
        assert!(!is_valid_email("guest@.com"));
    }

    #[test]
    fn otp_must_be_all_digits() {
        assert!(is_valid_otp("123456"));
        assert!(!is_valid_otp(""));
        assert!(!is_valid_otp("12a456"));
        assert!(!is_valid_otp("12 456"));
    }

    #[test]
    fn slot_times_render_as_twelve_hour_labels() {
        assert_eq!(format_slot_time("2025-06-02T09:00:00Z"), "9:00 AM");
        assert_eq!(format_slot_time("2025-06-02T14:30:00Z"), "2:30 PM");
        assert_eq!(format_slot_time("2025-06-02T00:05:00Z"), "12:05 AM");
    }

    #[test]
    fn unparseable_times_pass_through() {
        assert_eq!(format_slot_time("9 in the morning"), "9 in the morning");
    }
}
