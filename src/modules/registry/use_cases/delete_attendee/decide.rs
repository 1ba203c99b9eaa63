use crate::modules::registry::core::changes::RegistryChange;
use crate::modules::registry::core::decision::{DecideError, Decision};
use crate::modules::registry::core::state::RegistryState;
use crate::modules::registry::use_cases::delete_attendee::command::DeleteAttendee;

pub fn decide_delete_attendee(state: &RegistryState, command: DeleteAttendee) -> Decision {
    if !command.confirmed {
        return Err(DecideError::NotConfirmed);
    }
    if state.attendee(&command.attendee_id).is_none() {
        return Err(DecideError::AttendeeNotFound(command.attendee_id));
    }
    Ok(vec![RegistryChange::AttendeeRemoved {
        attendee_id: command.attendee_id,
    }])
}
