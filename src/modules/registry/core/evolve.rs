use crate::modules::registry::core::changes::RegistryChange;
use crate::modules::registry::core::state::RegistryState;

pub fn evolve(mut state: RegistryState, change: RegistryChange) -> RegistryState {
    match change {
        RegistryChange::EventCreated(event) => {
            state.events.push(event);
        }
        RegistryChange::EventUpdated(updated) => {
            if let Some(existing) = state.events.iter_mut().find(|e| e.id == updated.id) {
                existing.name = updated.name;
                existing.date = updated.date;
                existing.location = updated.location;
                existing.description = updated.description;
            }
        }
        RegistryChange::EventDeleted { event_id } => {
            state.events.retain(|e| e.id != event_id);
            state.attendees.retain(|a| a.event_id != event_id);
            if state.selected_event_id.as_deref() == Some(event_id.as_str()) {
                state.selected_event_id = None;
            }
        }
        RegistryChange::AttendeeRegistered(attendee) => {
            state.attendees.push(attendee);
        }
        RegistryChange::AttendeeRemoved { attendee_id } => {
            state.attendees.retain(|a| a.id != attendee_id);
        }
        RegistryChange::EventSelected { event_id } => {
            state.selected_event_id = Some(event_id);
        }
        RegistryChange::SelectionCleared => {
            state.selected_event_id = None;
        }
        RegistryChange::SearchTermChanged { term } => {
            state.search_term = term;
        }
    }
    state
}
