use crate::modules::registry::core::changes::RegistryChange;
use crate::modules::registry::core::decision::{DecideError, Decision};
use crate::modules::registry::core::state::RegistryState;
use crate::modules::registry::use_cases::delete_event::command::DeleteEvent;

/// Emits a single EventDeleted; `evolve` takes the event's attendees and the selection with it.
pub fn decide_delete_event(state: &RegistryState, command: DeleteEvent) -> Decision {
    if !command.confirmed {
        return Err(DecideError::NotConfirmed);
    }
    if state.event(&command.event_id).is_none() {
        return Err(DecideError::EventNotFound(command.event_id));
    }
    Ok(vec![RegistryChange::EventDeleted {
        event_id: command.event_id,
    }])
}
