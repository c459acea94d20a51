//! Sortable header cell used by `DataTable`.
//!
//! ```ignore
//! <SortableHeaderCell
//!     label="Price"
//!     indicator=Signal::derive(move || sort.with(|s| s.indicator(&column)))
//!     on_sort=Callback::new(move |_| request_sort())
//! />
//! ```

use crate::shared::data_table::sort::{sort_class, sort_indicator, SortDirection};
use leptos::prelude::*;
use thaw::*;

/// Clickable header with a sort arrow (▲ / ▼ on the active column, ⇅ otherwise).
#[component]
pub fn SortableHeaderCell(
    /// Header text
    #[prop(into)]
    label: String,

    /// Direction when this column is the active sort key
    #[prop(into)]
    indicator: Signal<Option<SortDirection>>,

    /// Fired on click
    on_sort: Callback<()>,

    /// Minimum column width
    #[prop(optional, default = 100.0)]
    min_width: f64,

    /// Header alignment (left/right)
    #[prop(optional, default = "left")]
    align: &'static str,
) -> impl IntoView {
    let header_style = if align == "right" {
        "cursor: pointer; justify-content: flex-end; padding-right: 12px;"
    } else {
        "cursor: pointer; padding-right: 12px;"
    };

    view! {
        <TableHeaderCell min_width=min_width>
            <div
                class="table__sortable-header"
                style=header_style
                on:click=move |_| on_sort.run(())
            >
                {label}
                <span class=move || sort_class(indicator.get())>
                    {move || sort_indicator(indicator.get())}
                </span>
            </div>
        </TableHeaderCell>
    }
}
