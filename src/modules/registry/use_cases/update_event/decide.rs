// Pure decision for editing an event. The submitted fields replace name, date, location and
// description; id and createdAt always come from the stored event.

use crate::modules::registry::core::changes::RegistryChange;
use crate::modules::registry::core::decision::{DecideError, Decision, parse_date, require};
use crate::modules::registry::core::records::Event;
use crate::modules::registry::core::state::RegistryState;
use crate::modules::registry::use_cases::update_event::command::UpdateEvent;

pub fn decide_update_event(state: &RegistryState, command: UpdateEvent) -> Decision {
    let existing = state
        .event(&command.event_id)
        .ok_or_else(|| DecideError::EventNotFound(command.event_id.clone()))?;
    let updated = Event {
        id: existing.id.clone(),
        name: require(&command.name, "name")?,
        date: parse_date(&command.date)?,
        location: require(&command.location, "location")?,
        description: command.description.trim().to_string(),
        created_at: existing.created_at,
    };
    Ok(vec![RegistryChange::EventUpdated(updated)])
}
