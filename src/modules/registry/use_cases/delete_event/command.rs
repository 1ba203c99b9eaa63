#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeleteEvent {
    pub event_id: String,
    /// The user acknowledged that every registration for the event goes with it.
    pub confirmed: bool,
}
