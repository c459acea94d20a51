//! Sort intent of a table: which column is the key and in which direction.
//!
//! The controller never touches records. Reordering is done by whoever
//! supplies the data, usually in response to `TableEvent::SortChanged`.

use super::column::ColumnSpec;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

impl SortDirection {
    pub fn toggled(self) -> Self {
        match self {
            SortDirection::Asc => SortDirection::Desc,
            SortDirection::Desc => SortDirection::Asc,
        }
    }

    pub fn is_ascending(self) -> bool {
        self == SortDirection::Asc
    }
}

/// `field == None` means unsorted.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SortState {
    pub field: Option<String>,
    pub direction: SortDirection,
}

impl SortState {
    pub fn by(field: impl Into<String>, direction: SortDirection) -> Self {
        Self {
            field: Some(field.into()),
            direction,
        }
    }

    pub fn is_sorted_by(&self, field: &str) -> bool {
        self.field.as_deref() == Some(field)
    }
}

/// Per-table sort state machine.
#[derive(Debug, Clone, Default)]
pub struct SortController {
    state: SortState,
}

impl SortController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &SortState {
        &self.state
    }

    /// Header click on `column`.
    ///
    /// Same column flips the direction, another column becomes the key
    /// with `Asc`. Non-sortable and derived columns are ignored. Returns the
    /// new state when it changed.
    pub fn request_sort<T, V>(&mut self, column: &ColumnSpec<T, V>) -> Option<SortState> {
        let key = column.sort_key()?;
        if self.state.is_sorted_by(key) {
            self.state.direction = self.state.direction.toggled();
        } else {
            self.state = SortState::by(key, SortDirection::Asc);
        }
        Some(self.state.clone())
    }

    /// Direction to draw next to `column`'s header, if it is the active key.
    pub fn indicator<T, V>(&self, column: &ColumnSpec<T, V>) -> Option<SortDirection> {
        column
            .sort_key()
            .filter(|key| self.state.is_sorted_by(key))
            .map(|_| self.state.direction)
    }
}

/// Arrow shown in a sortable header.
pub fn sort_indicator(direction: Option<SortDirection>) -> &'static str {
    match direction {
        Some(SortDirection::Asc) => " ▲",
        Some(SortDirection::Desc) => " ▼",
        None => " ⇅",
    }
}

pub fn sort_class(direction: Option<SortDirection>) -> &'static str {
    if direction.is_some() {
        "table__sort-indicator table__sort-indicator--active"
    } else {
        "table__sort-indicator"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::data_table::column::{CellValue, TableRecord};

    struct Row;

    impl TableRecord for Row {
        fn field_value(&self, _field: &str) -> CellValue {
            CellValue::Empty
        }
    }

    fn col(key: &'static str) -> ColumnSpec<Row, String> {
        ColumnSpec::field(key, key).sortable()
    }

    #[test]
    fn test_initial_state_is_unsorted() {
        let ctl = SortController::new();
        assert_eq!(ctl.state().field, None);
        assert_eq!(ctl.state().direction, SortDirection::Asc);
    }

    #[test]
    fn test_same_column_toggles_asc_desc_asc() {
        let mut ctl = SortController::new();
        let price = col("price");
        assert_eq!(ctl.request_sort(&price), Some(SortState::by("price", SortDirection::Asc)));
        assert_eq!(ctl.request_sort(&price), Some(SortState::by("price", SortDirection::Desc)));
        assert_eq!(ctl.request_sort(&price), Some(SortState::by("price", SortDirection::Asc)));
    }

    #[test]
    fn test_other_column_resets_to_asc() {
        let mut ctl = SortController::new();
        let price = col("price");
        let stock = col("stock");
        ctl.request_sort(&price);
        ctl.request_sort(&price);
        assert_eq!(ctl.state().direction, SortDirection::Desc);
        ctl.request_sort(&stock);
        assert_eq!(ctl.state(), &SortState::by("stock", SortDirection::Asc));
    }

    #[test]
    fn test_non_sortable_and_derived_are_ignored() {
        let mut ctl = SortController::new();
        ctl.request_sort(&col("price"));
        let before = ctl.state().clone();

        let plain: ColumnSpec<Row, String> = ColumnSpec::field("Brand", "brand");
        let derived: ColumnSpec<Row, String> =
            ColumnSpec::derived("Total", |_: &Row| CellValue::Integer(1)).sortable();
        let rendered: ColumnSpec<Row, String> =
            ColumnSpec::rendered("Actions", |_: &Row| String::from("x")).sortable();

        assert_eq!(ctl.request_sort(&plain), None);
        assert_eq!(ctl.request_sort(&derived), None);
        assert_eq!(ctl.request_sort(&rendered), None);
        assert_eq!(ctl.state(), &before);
    }

    #[test]
    fn test_indicator_only_on_active_column() {
        let mut ctl = SortController::new();
        let price = col("price");
        let stock = col("stock");
        assert_eq!(ctl.indicator(&price), None);
        ctl.request_sort(&price);
        ctl.request_sort(&price);
        assert_eq!(ctl.indicator(&price), Some(SortDirection::Desc));
        assert_eq!(ctl.indicator(&stock), None);
        assert_eq!(sort_indicator(ctl.indicator(&price)), " ▼");
        assert_eq!(sort_indicator(None), " ⇅");
    }
}
