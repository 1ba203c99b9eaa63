// Intent to create an event. Identity and creation time are assigned by the caller so the
// decider stays pure.

use chrono::{DateTime, Utc};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateEvent {
    pub event_id: String,
    pub name: String,
    pub date: String,
    pub location: String,
    pub description: String,
    pub created_at: DateTime<Utc>,
}
