// Shared command builders. Defaults come from the JSON fixtures next to this file.

use crate::modules::registry::use_cases::create_event::command::CreateEvent;
use crate::modules::registry::use_cases::register_attendee::command::RegisterAttendee;
use crate::tests::fixtures::records::fixed_time;
use chrono::{DateTime, Utc};
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct CreateEventDto {
    pub event_id: String,
    pub name: String,
    pub date: String,
    pub location: String,
    pub description: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RegisterAttendeeDto {
    pub attendee_id: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: Option<String>,
    pub organization: Option<String>,
}

pub struct CreateEventBuilder {
    inner: CreateEvent,
}

impl Default for CreateEventBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[allow(dead_code)]
impl CreateEventBuilder {
    pub fn new() -> Self {
        let dto: CreateEventDto =
            serde_json::from_str(include_str!("json/create_event.json")).unwrap();
        Self {
            inner: CreateEvent {
                event_id: dto.event_id,
                name: dto.name,
                date: dto.date,
                location: dto.location,
                description: dto.description,
                created_at: fixed_time(),
            },
        }
    }

    pub fn event_id(mut self, v: impl Into<String>) -> Self {
        self.inner.event_id = v.into();
        self
    }

    pub fn name(mut self, v: impl Into<String>) -> Self {
        self.inner.name = v.into();
        self
    }

    pub fn date(mut self, v: impl Into<String>) -> Self {
        self.inner.date = v.into();
        self
    }

    pub fn location(mut self, v: impl Into<String>) -> Self {
        self.inner.location = v.into();
        self
    }

    pub fn description(mut self, v: impl Into<String>) -> Self {
        self.inner.description = v.into();
        self
    }

    pub fn created_at(mut self, v: DateTime<Utc>) -> Self {
        self.inner.created_at = v;
        self
    }

    pub fn build(self) -> CreateEvent {
        self.inner
    }
}

pub struct RegisterAttendeeBuilder {
    inner: RegisterAttendee,
}

impl Default for RegisterAttendeeBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[allow(dead_code)]
impl RegisterAttendeeBuilder {
    pub fn new() -> Self {
        let dto: RegisterAttendeeDto =
            serde_json::from_str(include_str!("json/register_attendee.json")).unwrap();
        Self {
            inner: RegisterAttendee {
                attendee_id: dto.attendee_id,
                first_name: dto.first_name,
                last_name: dto.last_name,
                email: dto.email,
                phone: dto.phone,
                organization: dto.organization,
                registered_at: fixed_time(),
            },
        }
    }

    pub fn attendee_id(mut self, v: impl Into<String>) -> Self {
        self.inner.attendee_id = v.into();
        self
    }

    pub fn first_name(mut self, v: impl Into<String>) -> Self {
        self.inner.first_name = v.into();
        self
    }

    pub fn last_name(mut self, v: impl Into<String>) -> Self {
        self.inner.last_name = v.into();
        self
    }

    pub fn email(mut self, v: impl Into<String>) -> Self {
        self.inner.email = v.into();
        self
    }

    pub fn phone(mut self, v: Option<&str>) -> Self {
        self.inner.phone = v.map(String::from);
        self
    }

    pub fn organization(mut self, v: Option<&str>) -> Self {
        self.inner.organization = v.map(String::from);
        self
    }

    pub fn build(self) -> RegisterAttendee {
        self.inner
    }
}

#[cfg(test)]
mod command_builder_tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn default_delegates_to_new_and_parses_json() {
        let event = CreateEventBuilder::default().build();
        assert_eq!(event.event_id, "e-fixed-0001");
        assert_eq!(event.name, "Launch Day");
        assert_eq!(event.date, "2024-05-01");
        assert_eq!(event.location, "Pad 1");
        assert_eq!(event.created_at, fixed_time());

        let attendee = RegisterAttendeeBuilder::default().build();
        assert_eq!(attendee.attendee_id, "a-fixed-0001");
        assert_eq!(attendee.phone, None);
        assert_eq!(attendee.organization.as_deref(), Some("Analytical Engines"));
    }

    #[rstest]
    fn setters_override_fields_and_build_returns_inner() {
        let event = CreateEventBuilder::new()
            .event_id("e-9")
            .name("Recovery")
            .date("2024-06-01")
            .location("Ocean")
            .description("splashdown")
            .build();
        assert_eq!(event.event_id, "e-9");
        assert_eq!(event.location, "Ocean");

        let attendee = RegisterAttendeeBuilder::new()
            .attendee_id("a-9")
            .first_name("Grace")
            .last_name("Hopper")
            .email("grace@navy.mil")
            .phone(Some("555"))
            .organization(None)
            .build();
        assert_eq!(attendee.first_name, "Grace");
        assert_eq!(attendee.phone.as_deref(), Some("555"));
        assert_eq!(attendee.organization, None);
    }
}
