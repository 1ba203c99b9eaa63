use crate::modules::registry::core::changes::RegistryChange;
use crate::modules::registry::core::decision::{DecideError, Decision};
use crate::modules::registry::core::state::RegistryState;
use crate::modules::registry::use_cases::select_event::command::SelectionCommand;

pub fn decide_selection(state: &RegistryState, command: SelectionCommand) -> Decision {
    match command {
        SelectionCommand::Select { event_id } => {
            if state.event(&event_id).is_none() {
                return Err(DecideError::EventNotFound(event_id));
            }
            Ok(vec![RegistryChange::EventSelected { event_id }])
        }
        SelectionCommand::Clear => Ok(vec![RegistryChange::SelectionCleared]),
        SelectionCommand::Search { term } => Ok(vec![RegistryChange::SearchTermChanged { term }]),
    }
}
