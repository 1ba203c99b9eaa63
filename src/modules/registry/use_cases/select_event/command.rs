// UI-state commands. None of these touch the record store.

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectionCommand {
    Select { event_id: String },
    Clear,
    Search { term: String },
}
