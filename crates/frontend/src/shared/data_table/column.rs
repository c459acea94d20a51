//! Column descriptors: how a column pulls a value out of a record and,
//! optionally, how it renders that record.

use leptos::prelude::AnyView;
use std::fmt;
use std::sync::Arc;

/// Value extracted from a record by an accessor.
#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    Text(String),
    Integer(i64),
    Number(f64),
    Bool(bool),
    Empty,
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellValue::Text(s) => f.write_str(s),
            CellValue::Integer(n) => write!(f, "{}", n),
            CellValue::Number(n) => write!(f, "{}", n),
            CellValue::Bool(b) => write!(f, "{}", b),
            CellValue::Empty => Ok(()),
        }
    }
}

impl From<&str> for CellValue {
    fn from(value: &str) -> Self {
        CellValue::Text(value.to_string())
    }
}

impl From<String> for CellValue {
    fn from(value: String) -> Self {
        CellValue::Text(value)
    }
}

impl From<&String> for CellValue {
    fn from(value: &String) -> Self {
        CellValue::Text(value.clone())
    }
}

impl From<i64> for CellValue {
    fn from(value: i64) -> Self {
        CellValue::Integer(value)
    }
}

impl From<i32> for CellValue {
    fn from(value: i32) -> Self {
        CellValue::Integer(value.into())
    }
}

impl From<u32> for CellValue {
    fn from(value: u32) -> Self {
        CellValue::Integer(value.into())
    }
}

impl From<usize> for CellValue {
    fn from(value: usize) -> Self {
        CellValue::Integer(value as i64)
    }
}

impl From<f64> for CellValue {
    fn from(value: f64) -> Self {
        CellValue::Number(value)
    }
}

impl From<bool> for CellValue {
    fn from(value: bool) -> Self {
        CellValue::Bool(value)
    }
}

impl<T: Into<CellValue>> From<Option<T>> for CellValue {
    fn from(value: Option<T>) -> Self {
        value.map(Into::into).unwrap_or(CellValue::Empty)
    }
}

/// Records shown in a `DataTable` expose their fields by name.
///
/// Unknown field names yield `CellValue::Empty`.
pub trait TableRecord {
    fn field_value(&self, field: &str) -> CellValue;

    /// Row identity: the value at `key_field`, as text.
    fn row_key(&self, key_field: &str) -> String {
        self.field_value(key_field).to_string()
    }
}

pub type DerivedFn<T> = Arc<dyn Fn(&T) -> CellValue + Send + Sync>;
pub type CellRenderer<T, V> = Arc<dyn Fn(&T) -> V + Send + Sync>;

/// Where a column reads its value from.
pub enum Accessor<T> {
    /// Direct field of the record, addressable by name. The only kind of
    /// accessor that can be a sort key.
    Field(&'static str),
    /// Value computed from the whole record.
    Derived(DerivedFn<T>),
}

impl<T> Clone for Accessor<T> {
    fn clone(&self) -> Self {
        match self {
            Accessor::Field(key) => Accessor::Field(*key),
            Accessor::Derived(f) => Accessor::Derived(Arc::clone(f)),
        }
    }
}

impl<T> fmt::Debug for Accessor<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Accessor::Field(key) => f.debug_tuple("Field").field(key).finish(),
            Accessor::Derived(_) => f.write_str("Derived(..)"),
        }
    }
}

/// Display content of one cell.
pub enum CellContent<V> {
    /// Output of the column's cell renderer, used verbatim.
    Rendered(V),
    /// Raw accessor value, shown as text.
    Value(CellValue),
}

/// Describes one column of a `DataTable`.
///
/// `V` is what a cell renderer produces; the app uses `AnyView`.
pub struct ColumnSpec<T, V = AnyView> {
    pub header: String,
    pub accessor: Accessor<T>,
    pub cell: Option<CellRenderer<T, V>>,
    pub sortable: bool,
}

impl<T, V> Clone for ColumnSpec<T, V> {
    fn clone(&self) -> Self {
        Self {
            header: self.header.clone(),
            accessor: self.accessor.clone(),
            cell: self.cell.clone(),
            sortable: self.sortable,
        }
    }
}

impl<T, V> ColumnSpec<T, V> {
    /// Column reading a direct field.
    pub fn field(header: impl Into<String>, key: &'static str) -> Self {
        Self {
            header: header.into(),
            accessor: Accessor::Field(key),
            cell: None,
            sortable: false,
        }
    }

    /// Column computing its value from the record.
    pub fn derived<F>(header: impl Into<String>, f: F) -> Self
    where
        F: Fn(&T) -> CellValue + Send + Sync + 'static,
    {
        Self {
            header: header.into(),
            accessor: Accessor::Derived(Arc::new(f)),
            cell: None,
            sortable: false,
        }
    }

    /// Column drawn only by a cell renderer. Its accessor is a derived
    /// placeholder, so it can never become a sort target.
    pub fn rendered<F>(header: impl Into<String>, render: F) -> Self
    where
        F: Fn(&T) -> V + Send + Sync + 'static,
    {
        Self::derived(header, |_| CellValue::Empty).cell(render)
    }

    pub fn cell<F>(mut self, render: F) -> Self
    where
        F: Fn(&T) -> V + Send + Sync + 'static,
    {
        self.cell = Some(Arc::new(render));
        self
    }

    pub fn sortable(mut self) -> Self {
        self.sortable = true;
        self
    }

    /// Field name to sort by, if this column can drive sorting at all.
    /// Derived columns never can, whatever `sortable` says.
    pub fn sort_key(&self) -> Option<&'static str> {
        match (&self.accessor, self.sortable) {
            (Accessor::Field(key), true) => Some(*key),
            _ => None,
        }
    }

    /// Accessor value, ignoring any cell renderer.
    pub fn value(&self, record: &T) -> CellValue
    where
        T: TableRecord,
    {
        match &self.accessor {
            Accessor::Field(key) => record.field_value(key),
            Accessor::Derived(f) => f(record),
        }
    }

    /// Display content: the cell renderer wins, then the accessor.
    pub fn resolve(&self, record: &T) -> CellContent<V>
    where
        T: TableRecord,
    {
        match &self.cell {
            Some(render) => CellContent::Rendered(render(record)),
            None => CellContent::Value(self.value(record)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct Item {
        id: u32,
        name: String,
        price: f64,
    }

    impl TableRecord for Item {
        fn field_value(&self, field: &str) -> CellValue {
            match field {
                "id" => self.id.into(),
                "name" => self.name.as_str().into(),
                "price" => self.price.into(),
                _ => CellValue::Empty,
            }
        }
    }

    fn item() -> Item {
        Item { id: 7, name: "Cement".into(), price: 1250.5 }
    }

    fn text(content: CellContent<String>) -> String {
        match content {
            CellContent::Rendered(s) => format!("rendered:{}", s),
            CellContent::Value(v) => format!("value:{}", v),
        }
    }

    #[test]
    fn test_field_accessor_reads_record() {
        let col: ColumnSpec<Item, String> = ColumnSpec::field("Name", "name");
        assert_eq!(text(col.resolve(&item())), "value:Cement");
    }

    #[test]
    fn test_derived_accessor_is_invoked() {
        let col: ColumnSpec<Item, String> =
            ColumnSpec::derived("Label", |i: &Item| format!("#{} {}", i.id, i.name).into());
        assert_eq!(text(col.resolve(&item())), "value:#7 Cement");
    }

    #[test]
    fn test_cell_renderer_takes_precedence() {
        let col: ColumnSpec<Item, String> = ColumnSpec::field("Price", "price")
            .sortable()
            .cell(|i: &Item| format!("Rs. {}", i.price));
        assert_eq!(text(col.resolve(&item())), "rendered:Rs. 1250.5");
        // the field key still identifies the column for sorting
        assert_eq!(col.sort_key(), Some("price"));
    }

    #[test]
    fn test_renderer_only_column_renders_strictly_via_renderer() {
        let calls = Arc::new(AtomicUsize::new(0));
        let seen = Arc::clone(&calls);
        let col: ColumnSpec<Item, String> = ColumnSpec::rendered("Actions", move |i: &Item| {
            seen.fetch_add(1, Ordering::SeqCst);
            format!("edit {}", i.id)
        })
        .sortable();
        assert_eq!(text(col.resolve(&item())), "rendered:edit 7");
        assert_eq!(calls.load(Ordering::SeqCst), 1);
        assert_eq!(col.sort_key(), None);
    }

    #[test]
    fn test_sort_key_requires_sortable_field() {
        let plain: ColumnSpec<Item, String> = ColumnSpec::field("Name", "name");
        let derived: ColumnSpec<Item, String> =
            ColumnSpec::derived("Name", |i: &Item| i.name.as_str().into()).sortable();
        assert_eq!(plain.sort_key(), None);
        assert_eq!(derived.sort_key(), None);
    }

    #[test]
    fn test_unknown_field_is_empty() {
        let col: ColumnSpec<Item, String> = ColumnSpec::field("Missing", "missing");
        assert_eq!(col.value(&item()), CellValue::Empty);
        assert_eq!(CellValue::Empty.to_string(), "");
    }

    #[test]
    fn test_row_key_uses_key_field() {
        assert_eq!(item().row_key("id"), "7");
        assert_eq!(CellValue::from(None::<String>), CellValue::Empty);
        assert_eq!(CellValue::from(Some("x")), CellValue::Text("x".into()));
    }
}
