// Derived read views over RegistryState. Pure, no input or output.

use crate::modules::registry::core::records::{Attendee, Event};
use crate::modules::registry::core::state::RegistryState;
use chrono::{DateTime, NaiveDate, Utc};
use serde::Serialize;

/// Shown in place of an absent optional attendee field.
pub const PLACEHOLDER: &str = "-";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EventSummary {
    #[serde(flatten)]
    pub event: Event,
    pub attendee_count: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AttendeeRow {
    pub id: String,
    pub event_id: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub organization: String,
    pub registered_at: DateTime<Utc>,
}

impl From<&Attendee> for AttendeeRow {
    fn from(attendee: &Attendee) -> Self {
        Self {
            id: attendee.id.clone(),
            event_id: attendee.event_id.clone(),
            first_name: attendee.first_name.clone(),
            last_name: attendee.last_name.clone(),
            email: attendee.email.clone(),
            phone: attendee
                .phone
                .clone()
                .unwrap_or_else(|| PLACEHOLDER.to_string()),
            organization: attendee
                .organization
                .clone()
                .unwrap_or_else(|| PLACEHOLDER.to_string()),
            registered_at: attendee.registered_at,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AttendeeListView {
    pub event: Option<Event>,
    pub search_term: String,
    pub attendees: Vec<AttendeeRow>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SelectionView {
    pub event: Option<Event>,
    pub search_term: String,
}

/// Pre-fill for an edit form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EventForm {
    pub name: String,
    pub date: NaiveDate,
    pub location: String,
    pub description: String,
}

impl From<&Event> for EventForm {
    fn from(event: &Event) -> Self {
        Self {
            name: event.name.clone(),
            date: event.date,
            location: event.location.clone(),
            description: event.description.clone(),
        }
    }
}

pub fn attendee_count(attendees: &[Attendee], event_id: &str) -> usize {
    attendees.iter().filter(|a| a.event_id == event_id).count()
}

pub fn event_summaries(state: &RegistryState) -> Vec<EventSummary> {
    state
        .events
        .iter()
        .map(|event| EventSummary {
            event: event.clone(),
            attendee_count: attendee_count(&state.attendees, &event.id),
        })
        .collect()
}

/// Attendees of `event_id` whose "first last email" contains `term`, ignoring case.
/// An empty term matches every attendee of the event.
pub fn filter_attendees<'a>(
    attendees: &'a [Attendee],
    event_id: &str,
    term: &str,
) -> Vec<&'a Attendee> {
    let needle = term.to_lowercase();
    attendees
        .iter()
        .filter(|a| a.event_id == event_id)
        .filter(|a| a.search_haystack().contains(&needle))
        .collect()
}

pub fn attendee_list(state: &RegistryState) -> AttendeeListView {
    let event = state.selected_event().cloned();
    let attendees = match &event {
        Some(e) => filter_attendees(&state.attendees, &e.id, &state.search_term)
            .into_iter()
            .map(AttendeeRow::from)
            .collect(),
        None => Vec::new(),
    };
    AttendeeListView {
        event,
        search_term: state.search_term.clone(),
        attendees,
    }
}

pub fn selection(state: &RegistryState) -> SelectionView {
    SelectionView {
        event: state.selected_event().cloned(),
        search_term: state.search_term.clone(),
    }
}
