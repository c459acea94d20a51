//! Generic sortable / searchable / paginated grid.
//!
//! The table is a display and intent-reporting layer only: it draws the
//! records it is handed and reports clicks as [`TableEvent`]s. The owner
//! filters, sorts and slices the data (see `shared::list_utils`).
//!
//! The headless parts (columns, sort controller, page window, search box,
//! body model) have no DOM dependency; [`DataTable`] composes them.

pub mod column;
pub mod component;
pub mod events;
pub mod model;
pub mod pagination;
pub mod phase;
pub mod search;
pub mod sort;

pub use column::{Accessor, CellContent, CellValue, ColumnSpec, TableRecord};
pub use component::DataTable;
pub use events::TableEvent;
pub use pagination::{page_window, PaginationConfig, Pager};
pub use phase::{TablePhase, DEFAULT_EMPTY_MESSAGE};
pub use search::{SearchBox, SearchConfig};
pub use sort::{SortController, SortDirection, SortState};
