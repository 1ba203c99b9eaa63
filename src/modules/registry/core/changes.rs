use crate::modules::registry::core::records::{Attendee, Event};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RegistryChange {
    EventCreated(Event),
    EventUpdated(Event),
    /// Cascades to every attendee of the event.
    EventDeleted { event_id: String },
    AttendeeRegistered(Attendee),
    AttendeeRemoved { attendee_id: String },
    EventSelected { event_id: String },
    SelectionCleared,
    SearchTermChanged { term: String },
}

/// Which persisted collections a batch of changes rewrites.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Touched {
    pub events: bool,
    pub attendees: bool,
}

impl Touched {
    pub fn any(&self) -> bool {
        self.events || self.attendees
    }
}

impl RegistryChange {
    pub fn touched(&self) -> Touched {
        match self {
            RegistryChange::EventCreated(_) | RegistryChange::EventUpdated(_) => Touched {
                events: true,
                attendees: false,
            },
            RegistryChange::EventDeleted { .. } => Touched {
                events: true,
                attendees: true,
            },
            RegistryChange::AttendeeRegistered(_) | RegistryChange::AttendeeRemoved { .. } => {
                Touched {
                    events: false,
                    attendees: true,
                }
            }
            RegistryChange::EventSelected { .. }
            | RegistryChange::SelectionCleared
            | RegistryChange::SearchTermChanged { .. } => Touched::default(),
        }
    }
}

pub fn touched_by(changes: &[RegistryChange]) -> Touched {
    changes.iter().fold(Touched::default(), |acc, change| {
        let t = change.touched();
        Touched {
            events: acc.events || t.events,
            attendees: acc.attendees || t.attendees,
        }
    })
}
