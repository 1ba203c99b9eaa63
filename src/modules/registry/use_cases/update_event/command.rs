#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateEvent {
    pub event_id: String,
    pub name: String,
    pub date: String,
    pub location: String,
    pub description: String,
}
