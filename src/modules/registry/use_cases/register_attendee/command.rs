use chrono::{DateTime, Utc};

/// Registers an attendee for the currently selected event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegisterAttendee {
    pub attendee_id: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: Option<String>,
    pub organization: Option<String>,
    pub registered_at: DateTime<Utc>,
}
