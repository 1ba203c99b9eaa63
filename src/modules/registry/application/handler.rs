// Application view-model for the registry.
//
// Holds the single RegistryState and the record store. Every command runs under one lock:
// decide against the current state, fold the changes into a candidate, write the touched
// collections in full, and only then adopt the candidate. A failed write leaves the
// in-memory state exactly as it was.

use crate::modules::registry::adapters::outbound::collections::{
    ATTENDEES_KEY, CollectionError, EVENTS_KEY, load_collection, save_collection,
};
use crate::modules::registry::application::errors::ApplicationError;
use crate::modules::registry::core::changes::{RegistryChange, Touched, touched_by};
use crate::modules::registry::core::decision::{DecideError, Decision};
use crate::modules::registry::core::evolve::evolve;
use crate::modules::registry::core::records::{Attendee, Event};
use crate::modules::registry::core::state::RegistryState;
use crate::modules::registry::core::views::{
    self, AttendeeListView, EventForm, EventSummary, SelectionView,
};
use crate::modules::registry::use_cases::create_event::command::CreateEvent;
use crate::modules::registry::use_cases::create_event::decide::decide_create_event;
use crate::modules::registry::use_cases::delete_attendee::command::DeleteAttendee;
use crate::modules::registry::use_cases::delete_attendee::decide::decide_delete_attendee;
use crate::modules::registry::use_cases::delete_event::command::DeleteEvent;
use crate::modules::registry::use_cases::delete_event::decide::decide_delete_event;
use crate::modules::registry::use_cases::register_attendee::command::RegisterAttendee;
use crate::modules::registry::use_cases::register_attendee::decide::decide_register_attendee;
use crate::modules::registry::use_cases::select_event::command::SelectionCommand;
use crate::modules::registry::use_cases::select_event::decide::decide_selection;
use crate::modules::registry::use_cases::update_event::command::UpdateEvent;
use crate::modules::registry::use_cases::update_event::decide::decide_update_event;
use crate::shared::infrastructure::record_store::RecordStore;
use std::sync::Arc;
use tokio::sync::Mutex;

pub struct RegistryHandler<TStore>
where
    TStore: RecordStore + ?Sized + 'static,
{
    store: Arc<TStore>,
    state: Mutex<RegistryState>,
}

impl<TStore> RegistryHandler<TStore>
where
    TStore: RecordStore + ?Sized + 'static,
{
    /// Reads both collections. Missing keys load as empty collections.
    pub async fn load(store: Arc<TStore>) -> Result<Self, ApplicationError> {
        let events: Vec<Event> = load_collection(&*store, EVENTS_KEY).await?;
        let attendees: Vec<Attendee> = load_collection(&*store, ATTENDEES_KEY).await?;
        tracing::info!(
            events = events.len(),
            attendees = attendees.len(),
            "registry loaded"
        );
        Ok(Self {
            store,
            state: Mutex::new(RegistryState::loaded(events, attendees)),
        })
    }

    pub async fn snapshot(&self) -> RegistryState {
        self.state.lock().await.clone()
    }

    pub async fn event_summaries(&self) -> Vec<EventSummary> {
        views::event_summaries(&*self.state.lock().await)
    }

    pub async fn attendee_list(&self) -> AttendeeListView {
        views::attendee_list(&*self.state.lock().await)
    }

    pub async fn selection(&self) -> SelectionView {
        views::selection(&*self.state.lock().await)
    }

    pub async fn event_form(&self, event_id: &str) -> Result<EventForm, ApplicationError> {
        let state = self.state.lock().await;
        state
            .event(event_id)
            .map(EventForm::from)
            .ok_or_else(|| DecideError::EventNotFound(event_id.to_string()).into())
    }

    pub async fn create_event(&self, command: CreateEvent) -> Result<Event, ApplicationError> {
        let changes = self
            .execute("create_event", |state| decide_create_event(state, command))
            .await?;
        match changes.into_iter().next() {
            Some(RegistryChange::EventCreated(event)) => {
                tracing::info!(event_id = %event.id, name = %event.name, "event created");
                Ok(event)
            }
            other => Err(unexpected("create_event", other)),
        }
    }

    pub async fn update_event(&self, command: UpdateEvent) -> Result<Event, ApplicationError> {
        let changes = self
            .execute("update_event", |state| decide_update_event(state, command))
            .await?;
        match changes.into_iter().next() {
            Some(RegistryChange::EventUpdated(event)) => {
                tracing::info!(event_id = %event.id, "event updated");
                Ok(event)
            }
            other => Err(unexpected("update_event", other)),
        }
    }

    pub async fn delete_event(&self, command: DeleteEvent) -> Result<(), ApplicationError> {
        let event_id = command.event_id.clone();
        self.execute("delete_event", |state| decide_delete_event(state, command))
            .await?;
        tracing::info!(%event_id, "event deleted with its registrations");
        Ok(())
    }

    pub async fn select(&self, command: SelectionCommand) -> Result<SelectionView, ApplicationError> {
        self.execute("select", |state| decide_selection(state, command))
            .await?;
        Ok(self.selection().await)
    }

    pub async fn register_attendee(
        &self,
        command: RegisterAttendee,
    ) -> Result<Attendee, ApplicationError> {
        let changes = self
            .execute("register_attendee", |state| {
                decide_register_attendee(state, command)
            })
            .await?;
        match changes.into_iter().next() {
            Some(RegistryChange::AttendeeRegistered(attendee)) => {
                tracing::info!(
                    attendee_id = %attendee.id,
                    event_id = %attendee.event_id,
                    "attendee registered"
                );
                Ok(attendee)
            }
            other => Err(unexpected("register_attendee", other)),
        }
    }

    pub async fn delete_attendee(&self, command: DeleteAttendee) -> Result<(), ApplicationError> {
        let attendee_id = command.attendee_id.clone();
        self.execute("delete_attendee", |state| {
            decide_delete_attendee(state, command)
        })
        .await?;
        tracing::info!(%attendee_id, "attendee removed");
        Ok(())
    }

    async fn execute<F>(
        &self,
        operation: &'static str,
        decide: F,
    ) -> Result<Vec<RegistryChange>, ApplicationError>
    where
        F: FnOnce(&RegistryState) -> Decision,
    {
        let mut state = self.state.lock().await;
        let changes = decide(&*state).inspect_err(|reason| {
            tracing::debug!(operation, %reason, "command rejected");
        })?;

        let candidate = changes.iter().cloned().fold(state.clone(), evolve);
        let touched = touched_by(&changes);
        if touched.any() {
            self.persist(&state, &candidate, touched)
                .await
                .inspect_err(|error| {
                    tracing::error!(
                        operation,
                        %error,
                        "failed to persist, in-memory state left unchanged"
                    );
                })?;
        }
        *state = candidate;
        Ok(changes)
    }

    async fn persist(
        &self,
        previous: &RegistryState,
        next: &RegistryState,
        touched: Touched,
    ) -> Result<(), CollectionError> {
        if touched.events {
            save_collection(&*self.store, EVENTS_KEY, &next.events).await?;
        }
        if touched.attendees {
            if let Err(error) = save_collection(&*self.store, ATTENDEES_KEY, &next.attendees).await
            {
                if touched.events {
                    // Put the events back so the stored collections stay consistent.
                    if let Err(restore) =
                        save_collection(&*self.store, EVENTS_KEY, &previous.events).await
                    {
                        tracing::error!(error = %restore, "failed to restore events collection");
                    }
                }
                return Err(error);
            }
        }
        Ok(())
    }
}

fn unexpected(operation: &str, change: Option<RegistryChange>) -> ApplicationError {
    ApplicationError::Unexpected(format!("{operation} produced {change:?}"))
}
