/// Date formatting for list cells
use chrono::{DateTime, NaiveDate};

/// RFC 3339 timestamp or plain date to `M/D/YYYY`
/// Example: "2024-01-20T10:00:00Z" -> "1/20/2024"
pub fn format_date(date_str: &str) -> String {
    if let Ok(dt) = DateTime::parse_from_rfc3339(date_str) {
        return dt.format("%-m/%-d/%Y").to_string();
    }
    let date_part = date_str.split('T').next().unwrap_or(date_str);
    match NaiveDate::parse_from_str(date_part, "%Y-%m-%d") {
        Ok(date) => date.format("%-m/%-d/%Y").to_string(),
        Err(_) => date_str.to_string(),
    }
}

/// RFC 3339 timestamp to `M/D/YYYY HH:MM` (UTC offset as given)
pub fn format_datetime(datetime_str: &str) -> String {
    match DateTime::parse_from_rfc3339(datetime_str) {
        Ok(dt) => dt.format("%-m/%-d/%Y %H:%M").to_string(),
        Err(_) => datetime_str.to_string(),
    }
}
