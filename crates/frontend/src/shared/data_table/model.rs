//! Framework-free snapshot of what the table draws. The Leptos component
//! builds its header and rows from these.

use super::column::{CellContent, ColumnSpec, TableRecord};
use super::phase::TablePhase;
use super::sort::{SortController, SortDirection};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderCell {
    pub label: String,
    /// Clickable when set.
    pub sort_key: Option<&'static str>,
    /// Set on the active sort column only.
    pub indicator: Option<SortDirection>,
}

pub struct BodyRow<V> {
    pub key: String,
    pub cells: Vec<CellContent<V>>,
}

/// Body content for a phase. Rows are built per record with [`build_row`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TableBody {
    Loading,
    Empty(String),
    Rows,
}

impl TableBody {
    pub fn for_phase(phase: TablePhase, empty_message: &str) -> Self {
        match phase {
            TablePhase::Loading => TableBody::Loading,
            TablePhase::Empty => TableBody::Empty(empty_message.to_string()),
            TablePhase::Populated => TableBody::Rows,
        }
    }
}

pub fn build_header<T, V>(columns: &[ColumnSpec<T, V>], sort: &SortController) -> Vec<HeaderCell> {
    columns
        .iter()
        .map(|column| HeaderCell {
            label: column.header.clone(),
            sort_key: column.sort_key(),
            indicator: sort.indicator(column),
        })
        .collect()
}

pub fn build_row<T: TableRecord, V>(
    record: &T,
    columns: &[ColumnSpec<T, V>],
    key_field: &str,
) -> BodyRow<V> {
    BodyRow {
        key: record.row_key(key_field),
        cells: columns.iter().map(|column| column.resolve(record)).collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::data_table::column::CellValue;
    use crate::shared::data_table::phase::DEFAULT_EMPTY_MESSAGE;

    #[derive(Clone)]
    struct Brand {
        id: &'static str,
        name: &'static str,
        products: u32,
    }

    impl TableRecord for Brand {
        fn field_value(&self, field: &str) -> CellValue {
            match field {
                "id" => self.id.into(),
                "name" => self.name.into(),
                "products_count" => self.products.into(),
                _ => CellValue::Empty,
            }
        }
    }

    fn columns() -> Vec<ColumnSpec<Brand, String>> {
        vec![
            ColumnSpec::rendered("Brand", |b: &Brand| format!("{} ({})", b.name, b.id)),
            ColumnSpec::field("Products", "products_count")
                .sortable()
                .cell(|b: &Brand| format!("{} products", b.products)),
            ColumnSpec::field("Name", "name"),
        ]
    }

    fn brands() -> Vec<Brand> {
        vec![
            Brand { id: "holcim", name: "Holcim", products: 12 },
            Brand { id: "dulux", name: "Dulux", products: 30 },
        ]
    }

    fn cell_text(cell: &CellContent<String>) -> String {
        match cell {
            CellContent::Rendered(s) => s.clone(),
            CellContent::Value(v) => v.to_string(),
        }
    }

    fn body_of(records: &[Brand], loading: bool, empty_message: &str) -> TableBody {
        TableBody::for_phase(TablePhase::resolve(loading, records.len()), empty_message)
    }

    #[test]
    fn test_empty_records_show_message_and_no_rows() {
        assert_eq!(
            body_of(&[], false, DEFAULT_EMPTY_MESSAGE),
            TableBody::Empty("No data available".to_string())
        );
        assert_eq!(body_of(&[], false, "No brands yet"), TableBody::Empty("No brands yet".to_string()));
    }

    #[test]
    fn test_loading_hides_rows() {
        assert_eq!(body_of(&brands(), true, DEFAULT_EMPTY_MESSAGE), TableBody::Loading);
        assert_eq!(body_of(&[], true, DEFAULT_EMPTY_MESSAGE), TableBody::Loading);
    }

    #[test]
    fn test_rows_keyed_and_resolved_in_column_order() {
        let records = brands();
        assert_eq!(body_of(&records, false, "none"), TableBody::Rows);

        let cols = columns();
        let rows: Vec<BodyRow<String>> = records.iter().map(|b| build_row(b, &cols, "id")).collect();
        assert_eq!(rows.iter().map(|r| r.key.as_str()).collect::<Vec<_>>(), ["holcim", "dulux"]);
        let texts: Vec<String> = rows[1].cells.iter().map(cell_text).collect();
        assert_eq!(texts, ["Dulux (dulux)", "30 products", "Dulux"]);
    }

    #[test]
    fn test_header_reflects_sort_state() {
        let cols = columns();
        let mut sort = SortController::new();
        let header = build_header(&cols, &sort);
        assert_eq!(header[0].sort_key, None);
        assert_eq!(header[1].sort_key, Some("products_count"));
        assert_eq!(header[2].sort_key, None);
        assert!(header.iter().all(|h| h.indicator.is_none()));

        // clicking the renderer-only column does nothing
        assert_eq!(sort.request_sort(&cols[0]), None);
        sort.request_sort(&cols[1]);
        let header = build_header(&cols, &sort);
        assert_eq!(header[1].indicator, Some(SortDirection::Asc));
        assert_eq!(header[0].indicator, None);
    }
}
