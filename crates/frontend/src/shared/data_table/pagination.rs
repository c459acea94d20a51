//! Page-button windowing for the table footer.

use super::events::TableEvent;

/// Most page buttons shown at once.
pub const WINDOW_SIZE: usize = 5;

/// Current page (1-based) and page count, as prepared by the caller.
///
/// The table never adjusts these; it only reports requested transitions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PaginationConfig {
    pub current_page: usize,
    pub total_pages: usize,
}

impl PaginationConfig {
    pub fn new(current_page: usize, total_pages: usize) -> Self {
        Self {
            current_page,
            total_pages,
        }
    }
}

/// Page numbers exposed as buttons.
///
/// Up to five pages: everything when there are few, otherwise pinned to the
/// first or last five near the edges and centered on `current_page` in
/// between.
pub fn page_window(current_page: usize, total_pages: usize) -> Vec<usize> {
    let start = if total_pages <= WINDOW_SIZE || current_page <= 3 {
        1
    } else if current_page + 2 >= total_pages {
        total_pages - 4
    } else {
        current_page - 2
    };
    let end = (start + WINDOW_SIZE - 1).min(total_pages);
    (start..=end).collect()
}

/// Previous / next button.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StepButton {
    pub target: usize,
    pub enabled: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageButton {
    pub page: usize,
    pub active: bool,
}

/// Read model of the pagination footer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pager {
    pub current_page: usize,
    pub total_pages: usize,
    pub previous: StepButton,
    pub next: StepButton,
    pub pages: Vec<PageButton>,
}

impl Pager {
    pub fn new(config: PaginationConfig) -> Self {
        let PaginationConfig {
            current_page,
            total_pages,
        } = config;
        let pages = page_window(current_page, total_pages)
            .into_iter()
            .map(|page| PageButton {
                page,
                active: page == current_page,
            })
            .collect();
        Self {
            current_page,
            total_pages,
            previous: StepButton {
                target: current_page.saturating_sub(1),
                enabled: current_page > 1,
            },
            next: StepButton {
                target: current_page + 1,
                enabled: current_page < total_pages,
            },
            pages,
        }
    }

    /// Event for a click on a page or step button. The target is passed
    /// through as is.
    pub fn activate(target: usize) -> TableEvent {
        TableEvent::PageChangeRequested(target)
    }

    /// "Showing page X of Y" footer text; none when there are no pages.
    pub fn summary(&self) -> Option<String> {
        (self.total_pages > 0)
            .then(|| format!("Showing page {} of {}", self.current_page, self.total_pages))
    }
}

impl From<PaginationConfig> for Pager {
    fn from(config: PaginationConfig) -> Self {
        Pager::new(config)
    }
}
