// Pure decision for registering an attendee.
//
// - An event must be selected and still exist; the attendee is bound to it.
// - firstName, lastName and email are required. Blank phone or organization is stored as absent.

use crate::modules::registry::core::changes::RegistryChange;
use crate::modules::registry::core::decision::{DecideError, Decision, require};
use crate::modules::registry::core::records::Attendee;
use crate::modules::registry::core::state::RegistryState;
use crate::modules::registry::use_cases::register_attendee::command::RegisterAttendee;
use crate::shared::core::primitives::non_blank;

pub fn decide_register_attendee(state: &RegistryState, command: RegisterAttendee) -> Decision {
    let event_id = state
        .selected_event_id
        .as_deref()
        .ok_or(DecideError::NoEventSelected)?;
    if state.event(event_id).is_none() {
        return Err(DecideError::EventNotFound(event_id.to_string()));
    }
    let attendee = Attendee {
        id: command.attendee_id,
        event_id: event_id.to_string(),
        first_name: require(&command.first_name, "firstName")?,
        last_name: require(&command.last_name, "lastName")?,
        email: require(&command.email, "email")?,
        phone: non_blank(command.phone),
        organization: non_blank(command.organization),
        registered_at: command.registered_at,
    };
    Ok(vec![RegistryChange::AttendeeRegistered(attendee)])
}
