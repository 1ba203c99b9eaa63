use chrono::{DateTime, Utc};
use uuid::Uuid;

/// Fresh record identifier. Random 128-bit, rendered as a hyphenated UUID.
pub fn new_record_id() -> String {
    Uuid::new_v4().to_string()
}

pub fn now() -> DateTime<Utc> {
    Utc::now()
}

/// Trims and drops blank optional text, so "" and "   " are stored as absent.
pub fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
