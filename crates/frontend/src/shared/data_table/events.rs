use super::sort::SortState;

/// Everything a `DataTable` reports back to its owner.
///
/// Dispatched synchronously from the UI event that caused it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TableEvent {
    /// Page or step button clicked; carries the target page (1-based).
    PageChangeRequested(usize),
    /// Search button clicked; carries the pending query verbatim.
    SearchSubmitted(String),
    /// A sortable header was clicked and the sort state changed.
    SortChanged(SortState),
}

impl TableEvent {
    pub fn kind(&self) -> &'static str {
        match self {
            TableEvent::PageChangeRequested(_) => "page_change_requested",
            TableEvent::SearchSubmitted(_) => "search_submitted",
            TableEvent::SortChanged(_) => "sort_changed",
        }
    }
}
