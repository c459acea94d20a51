use super::events::TableEvent;

pub const DEFAULT_SEARCH_PLACEHOLDER: &str = "Search...";

/// Enables the search bar above the table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchConfig {
    pub placeholder: String,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            placeholder: DEFAULT_SEARCH_PLACEHOLDER.to_string(),
        }
    }
}

impl SearchConfig {
    pub fn with_placeholder(placeholder: impl Into<String>) -> Self {
        Self {
            placeholder: placeholder.into(),
        }
    }
}

/// Pending query typed by the user.
///
/// Keystrokes only update the pending text; the owner hears about it on
/// explicit submit. Submitting leaves the text in place.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchBox {
    pending: String,
}

impl SearchBox {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn input(&mut self, text: impl Into<String>) {
        self.pending = text.into();
    }

    pub fn pending(&self) -> &str {
        &self.pending
    }

    pub fn submit(&self) -> TableEvent {
        TableEvent::SearchSubmitted(self.pending.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_typing_does_not_emit() {
        let mut search = SearchBox::new();
        search.input("cem");
        search.input("cement");
        assert_eq!(search.pending(), "cement");
    }

    #[test]
    fn test_submit_keeps_pending_text() {
        let mut search = SearchBox::new();
        search.input("holcim");
        assert_eq!(search.submit(), TableEvent::SearchSubmitted("holcim".into()));
        assert_eq!(search.pending(), "holcim");
        // re-submitting sends the same text again
        assert_eq!(search.submit(), TableEvent::SearchSubmitted("holcim".into()));
    }

    #[test]
    fn test_empty_submit_is_allowed() {
        assert_eq!(SearchBox::new().submit(), TableEvent::SearchSubmitted(String::new()));
    }
}
