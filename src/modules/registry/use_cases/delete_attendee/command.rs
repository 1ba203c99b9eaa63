#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeleteAttendee {
    pub attendee_id: String,
    pub confirmed: bool,
}
