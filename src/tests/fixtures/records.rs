use crate::modules::registry::core::records::{Attendee, Event};
use chrono::{DateTime, NaiveDate, TimeZone, Utc};

pub fn fixed_time() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 4, 1, 10, 0, 0).unwrap()
}

pub fn make_event(id: &str) -> Event {
    Event {
        id: id.to_string(),
        name: format!("Event {id}"),
        date: NaiveDate::from_ymd_opt(2024, 5, 1).unwrap(),
        location: "Pad 1".to_string(),
        description: String::new(),
        created_at: fixed_time(),
    }
}

pub fn make_attendee(id: &str, event_id: &str) -> Attendee {
    make_named_attendee(id, event_id, "Test", "Attendee", "test@example.com")
}

pub fn make_named_attendee(
    id: &str,
    event_id: &str,
    first_name: &str,
    last_name: &str,
    email: &str,
) -> Attendee {
    Attendee {
        id: id.to_string(),
        event_id: event_id.to_string(),
        first_name: first_name.to_string(),
        last_name: last_name.to_string(),
        email: email.to_string(),
        phone: None,
        organization: None,
        registered_at: fixed_time(),
    }
}
