//! Helper functions and utilities
//!
//! This module contains common helper functions used throughout the application.

use chrono::NaiveDateTime;

/// Format an event timestamp for display
pub fn format_event_date(date_time: Option<NaiveDateTime>) -> String {
    match date_time {
        Some(dt) => format!(
            "{} • {}",
            dt.format("%a, %b %-d, %Y"),
            dt.format("%-I:%M %p")
        ),
        None => "Date TBA".to_string(),
    }
}

/// Validate email format
pub fn is_valid_email(email: &str) -> bool {
    email.contains('@') && email.contains('.') && email.len() > 5
}
