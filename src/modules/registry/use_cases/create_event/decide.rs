// Pure decision for event creation.
//
// - name, date and location are required; date must be a calendar date.
// - On success emit EventCreated with the caller-assigned id and creation time.

use crate::modules::registry::core::changes::RegistryChange;
use crate::modules::registry::core::decision::{Decision, parse_date, require};
use crate::modules::registry::core::records::Event;
use crate::modules::registry::core::state::RegistryState;
use crate::modules::registry::use_cases::create_event::command::CreateEvent;

pub fn decide_create_event(_state: &RegistryState, command: CreateEvent) -> Decision {
    let event = Event {
        id: command.event_id,
        name: require(&command.name, "name")?,
        date: parse_date(&command.date)?,
        location: require(&command.location, "location")?,
        description: command.description.trim().to_string(),
        created_at: command.created_at,
    };
    Ok(vec![RegistryChange::EventCreated(event)])
}
