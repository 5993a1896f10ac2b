//! Helper functions and utilities
//!
//! This module contains common presentation helpers used by the view layer.

use chrono::{DateTime, NaiveDate, Utc};

/// Map an internal event-type code to its display label. Unrecognized codes
/// pass through unchanged.
pub fn event_display_name(code: &str) -> String {
    match code {
        "marriage" => "Marriage Ceremony".to_string(),
        "birthday" => "Birthday Party".to_string(),
        "anniversary" => "Anniversary Party".to_string(),
        "meeting" => "Official Meeting".to_string(),
        "dance" => "Dance Show".to_string(),
        "custom" => "Custom Event".to_string(),
        other => other.to_string(),
    }
}

/// Format a timestamp for display
pub fn format_timestamp(timestamp: DateTime<Utc>) -> String {
    timestamp.format("%Y-%m-%d %H:%M:%S UTC").to_string()
}

/// Format an event date for display
pub fn format_event_date(date: NaiveDate) -> String {
    date.format("%-d %B %Y").to_string()
}
