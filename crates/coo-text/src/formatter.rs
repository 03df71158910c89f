//! Date, identifier and quantity formatting

use chrono::{DateTime, NaiveDate, NaiveDateTime};

/// Format an ISO 8601 date or date-time as a calendar date (`YYYY-MM-DD`).
///
/// Accepts full RFC 3339 timestamps (`2020-04-01T14:30:00Z`), zone-less
/// date-times and bare dates. Returns `None` for anything unparseable,
/// so an absent or malformed source date displays as a blank cell.
///
/// # Examples
/// ```
/// use coo_text::format_calendar_date;
/// assert_eq!(format_calendar_date("2020-04-01T14:30:00Z").as_deref(), Some("2020-04-01"));
/// assert_eq!(format_calendar_date("2020-04-01").as_deref(), Some("2020-04-01"));
/// assert_eq!(format_calendar_date(""), None);
/// ```
pub fn format_calendar_date(value: &str) -> Option<String> {
    let value = value.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Some(dt.format("%Y-%m-%d").to_string());
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S") {
        return Some(dt.format("%Y-%m-%d").to_string());
    }
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .ok()
        .map(|d| d.format("%Y-%m-%d").to_string())
}

/// Return the trailing segment of a namespaced identifier.
///
/// Identifiers in the source documents carry their scheme as a prefix
/// (`abr.gov.au:abn:55004094599`); the printed form shows only the part
/// after the last `:`. Values without a separator pass through unchanged.
pub fn reference_suffix(value: &str) -> &str {
    value.rsplit(':').next().unwrap_or(value)
}

/// Join a package's gross volume and gross weight into the quantity text
/// shown in box 11.
///
/// Present parts are joined with `", "`; when both are absent the result
/// is empty.
pub fn format_quantity(volume: Option<&str>, weight: Option<&str>) -> String {
    let mut parts = Vec::new();
    if let Some(volume) = volume {
        if !volume.is_empty() {
            parts.push(volume);
        }
    }
    if let Some(weight) = weight {
        if !weight.is_empty() {
            parts.push(weight);
        }
    }
    parts.join(", ")
}
