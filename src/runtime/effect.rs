/// Analytics event recorded whenever a suggestion rewrites the search.
pub const NOTES_SEARCHED_EVENT: &str = "list_notes_searched";

/// Side effects the host application runs after a suggestion is accepted,
/// in the order they are emitted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Replace the search query and rerun the note search.
    Search(String),
    RecordEvent(&'static str),
    FocusSearch,
}
