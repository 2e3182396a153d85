use chrono::{DateTime, Locale, NaiveDateTime, Utc};

use crate::models::Language;

const ARABIC_FORMAT: &str = "%-d %B %Y، %-I:%M %p UTC";
const ENGLISH_FORMAT: &str = "%B %-d, %Y at %-I:%M %p UTC";

/// Parses the publish date sent by the API.
///
/// Accepts RFC 3339 and the offset-less ISO form the backend emits
/// (`2024-05-01T09:30:00` or with fractional seconds), read as UTC.
pub fn parse_publish_date(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }

    if let Ok(date) = DateTime::parse_from_rfc3339(raw) {
        return Some(date.with_timezone(&Utc));
    }

    ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"]
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(raw, fmt).ok())
        .map(|naive| naive.and_utc())
}

/// Long localized date with time, or an empty string when there is no date
pub fn format_publish_date(date: Option<&DateTime<Utc>>, language: &Language) -> String {
    let Some(date) = date else {
        return String::new();
    };

    match language {
        Language::Arabic => date.format_localized(ARABIC_FORMAT, Locale::ar_AE).to_string(),
        Language::English => date.format_localized(ENGLISH_FORMAT, Locale::en_US).to_string(),
    }
}
