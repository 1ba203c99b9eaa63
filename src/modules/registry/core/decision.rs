use crate::modules::registry::core::changes::RegistryChange;

#[derive(Debug, Clone, thiserror::Error, PartialEq, Eq)]
pub enum DecideError {
    #[error("{0} is required")]
    MissingField(&'static str),

    #[error("invalid date {0:?}, expected YYYY-MM-DD")]
    InvalidDate(String),

    #[error("event {0} not found")]
    EventNotFound(String),

    #[error("attendee {0} not found")]
    AttendeeNotFound(String),

    #[error("no event selected")]
    NoEventSelected,

    #[error("deletion was not confirmed")]
    NotConfirmed,
}

pub type Decision = Result<Vec<RegistryChange>, DecideError>;

/// Fails with `MissingField(name)` for blank text.
pub fn require(value: &str, name: &'static str) -> Result<String, DecideError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(DecideError::MissingField(name));
    }
    Ok(trimmed.to_string())
}

pub fn parse_date(value: &str) -> Result<chrono::NaiveDate, DecideError> {
    let trimmed = require(value, "date")?;
    chrono::NaiveDate::parse_from_str(&trimmed, "%Y-%m-%d")
        .map_err(|_| DecideError::InvalidDate(trimmed))
}
