//! Reusable formatting utilities for CLI output
//!
//! Appointment times, prices, and durations as shown in tables.

use chrono::{DateTime, Local, NaiveDateTime};

use crate::forms::DATETIME_LOCAL_FORMAT;

/// Display format for appointment times
const TIME_DISPLAY_FORMAT: &str = "%Y-%m-%d %H:%M";

/// Format an appointment time in local time.
///
/// Accepts RFC 3339 (as stored by the backend) or a `datetime-local` value.
/// Anything else is returned unchanged.
///
/// # Example output
/// `2025-03-01 16:00`
pub fn format_time(value: &str) -> String {
    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return dt.with_timezone(&Local).format(TIME_DISPLAY_FORMAT).to_string();
    }
    if let Ok(naive) = NaiveDateTime::parse_from_str(value, DATETIME_LOCAL_FORMAT) {
        return naive.format(TIME_DISPLAY_FORMAT).to_string();
    }
    value.to_string()
}

/// Whole prices without decimals, fractional ones with two.
pub fn format_price(price: f64) -> String {
    if price.fract() == 0.0 {
        format!("{:.0}", price)
    } else {
        format!("{:.2}", price)
    }
}

/// Format a duration in minutes.
///
/// # Example output
/// - `45 min`
/// - `1h 30m`
/// - `N/A` for zero
pub fn format_minutes(minutes: u32) -> String {
    match (minutes / 60, minutes % 60) {
        (0, 0) => "N/A".to_string(),
        (0, m) => format!("{} min", m),
        (h, 0) => format!("{}h", h),
        (h, m) => format!("{}h {}m", h, m),
    }
}

/// Truncate to `max_chars` characters with an ellipsis.
pub fn truncate(s: &str, max_chars: usize) -> String {
    if s.chars().count() <= max_chars {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max_chars.saturating_sub(3)).collect();
        format!("{}...", kept)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_time_datetime_local() {
        assert_eq!(format_time("2025-03-01T10:30"), "2025-03-01 10:30");
    }

    #[test]
    fn test_format_time_rfc3339() {
        // Exact output depends on the local zone
        let result = format_time("2025-03-01T10:30:00.000Z");
        assert!(result.starts_with("2025-0"));
        assert_eq!(result.len(), 16);
    }

    #[test]
    fn test_format_time_passthrough() {
        assert_eq!(format_time("next tuesday"), "next tuesday");
    }

    #[test]
    fn test_format_price() {
        assert_eq!(format_price(1500.0), "1500");
        assert_eq!(format_price(99.5), "99.50");
        assert_eq!(format_price(0.0), "0");
    }

    #[test]
    fn test_format_minutes() {
        assert_eq!(format_minutes(0), "N/A");
        assert_eq!(format_minutes(45), "45 min");
        assert_eq!(format_minutes(60), "1h");
        assert_eq!(format_minutes(90), "1h 30m");
    }

    #[test]
    fn test_truncate_is_char_safe() {
        assert_eq!(truncate("short", 10), "short");
        assert_eq!(truncate("Стоматология и гигиена", 10), "Стомато...");
    }
}
