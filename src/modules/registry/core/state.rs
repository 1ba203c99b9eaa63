// RegistryState is everything the view-model holds: both collections plus the UI
// selection and search term. It is only ever replaced through `evolve`.

use crate::modules::registry::core::records::{Attendee, Event};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RegistryState {
    pub events: Vec<Event>,
    pub attendees: Vec<Attendee>,
    pub selected_event_id: Option<String>,
    pub search_term: String,
}

impl RegistryState {
    /// Freshly loaded collections, nothing selected.
    pub fn loaded(events: Vec<Event>, attendees: Vec<Attendee>) -> Self {
        Self {
            events,
            attendees,
            ..Self::default()
        }
    }

    pub fn event(&self, event_id: &str) -> Option<&Event> {
        self.events.iter().find(|e| e.id == event_id)
    }

    pub fn attendee(&self, attendee_id: &str) -> Option<&Attendee> {
        self.attendees.iter().find(|a| a.id == attendee_id)
    }

    pub fn selected_event(&self) -> Option<&Event> {
        self.selected_event_id
            .as_deref()
            .and_then(|id| self.event(id))
    }
}
