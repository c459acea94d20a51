/// Placeholder shown when there is nothing to display.
pub const DEFAULT_EMPTY_MESSAGE: &str = "No data available";

/// What the table body shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TablePhase {
    Loading,
    Empty,
    Populated,
}

impl TablePhase {
    /// The loading flag wins; otherwise the record count decides.
    pub fn resolve(loading: bool, record_count: usize) -> Self {
        if loading {
            TablePhase::Loading
        } else if record_count == 0 {
            TablePhase::Empty
        } else {
            TablePhase::Populated
        }
    }
}
