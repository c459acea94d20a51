use super::column::{CellContent, ColumnSpec, TableRecord};
use super::events::TableEvent;
use super::model::{build_header, build_row, TableBody};
use super::pagination::{PaginationConfig, Pager};
use super::phase::{TablePhase, DEFAULT_EMPTY_MESSAGE};
use super::search::{SearchBox, SearchConfig};
use super::sort::SortController;
use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::components::table::SortableHeaderCell;
use crate::shared::icons::icon;
use leptos::prelude::*;
use thaw::*;

fn dispatch(on_event: Option<Callback<TableEvent>>, event: TableEvent) {
    log::debug!("data table: {} {:?}", event.kind(), event);
    if let Some(handler) = on_event {
        handler.run(event);
    }
}

/// Generic grid for any `TableRecord`.
///
/// Shows the records it is given, in the given order. Sorting, filtering and
/// paging are reported through `on_event`; the owner recomputes `data` and
/// `pagination` in response.
///
/// ```ignore
/// <DataTable
///     data=Signal::derive(move || page.get().items)
///     columns=vec![
///         ColumnSpec::field("Brand", "brand").sortable(),
///         ColumnSpec::rendered("Actions", |p: &Product| actions(p)),
///     ]
///     key_field="id"
///     loading=loading
///     pagination=Signal::derive(move || page.get().pagination())
///     search=SearchConfig::default()
///     on_event=Callback::new(move |ev| query.update(|q| q.apply_event(ev)))
/// />
/// ```
#[component]
pub fn DataTable<T>(
    /// Records of the current page
    #[prop(into)]
    data: Signal<Vec<T>>,

    /// Column definitions, in display order
    columns: Vec<ColumnSpec<T>>,

    /// Field holding each record's unique key
    key_field: &'static str,

    /// Spinner instead of rows while true
    #[prop(optional, into)]
    loading: MaybeProp<bool>,

    /// Footer with page buttons; hidden when absent
    #[prop(optional, into)]
    pagination: Option<Signal<PaginationConfig>>,

    /// Search bar above the grid; hidden when absent
    #[prop(optional)]
    search: Option<SearchConfig>,

    /// Text for an empty result
    #[prop(optional, into)]
    empty_message: Option<String>,

    /// Receives page, search and sort requests
    #[prop(optional, into)]
    on_event: Option<Callback<TableEvent>>,
) -> impl IntoView
where
    T: TableRecord + Clone + Send + Sync + 'static,
{
    let column_count = columns.len().max(1).to_string();
    let columns = StoredValue::new(columns);
    let empty_message = empty_message.unwrap_or_else(|| DEFAULT_EMPTY_MESSAGE.to_string());

    // Local UI state, discarded with the component
    let sort = RwSignal::new(SortController::new());
    let search_box = RwSignal::new(SearchBox::new());

    let phase = Memo::new(move |_| {
        TablePhase::resolve(loading.get().unwrap_or(false), data.with(Vec::len))
    });

    let header = columns.with_value(|cols| {
        build_header(cols, &SortController::new())
            .into_iter()
            .enumerate()
            .map(|(idx, cell)| {
                if cell.sort_key.is_none() {
                    return view! {
                        <TableHeaderCell min_width=100.0>
                            <span class="table__header-label">{cell.label}</span>
                        </TableHeaderCell>
                    }
                    .into_any();
                }
                let indicator = Signal::derive(move || {
                    columns.with_value(|cols| sort.with(|s| s.indicator(&cols[idx])))
                });
                let on_sort = Callback::new(move |_: ()| {
                    let changed = columns
                        .with_value(|cols| sort.try_update(|s| s.request_sort(&cols[idx])))
                        .flatten();
                    if let Some(state) = changed {
                        dispatch(on_event, TableEvent::SortChanged(state));
                    }
                });
                view! { <SortableHeaderCell label=cell.label indicator=indicator on_sort=on_sort /> }
                    .into_any()
            })
            .collect::<Vec<_>>()
    });

    let render_row = move |record: T| {
        let row = columns.with_value(|cols| build_row(&record, cols, key_field));
        log::trace!("data table: render row {}", row.key);
        let cells = row
            .cells
            .into_iter()
            .map(|cell| {
                let content = match cell {
                    CellContent::Rendered(view) => view,
                    CellContent::Value(value) => value.to_string().into_any(),
                };
                view! {
                    <TableCell>
                        <TableCellLayout truncate=true>{content}</TableCellLayout>
                    </TableCell>
                }
            })
            .collect_view();
        view! { <TableRow>{cells}</TableRow> }
    };

    let body = move || match TableBody::for_phase(phase.get(), &empty_message) {
        TableBody::Loading => {
            let span = column_count.clone();
            view! {
                <TableRow>
                    <TableCell attr:colspan=span>
                        <div class="data-table__loading">
                            <div class="data-table__spinner"></div>
                        </div>
                    </TableCell>
                </TableRow>
            }
            .into_any()
        }
        TableBody::Empty(message) => {
            let span = column_count.clone();
            view! {
                <TableRow>
                    <TableCell attr:colspan=span>
                        <div class="data-table__empty">{message}</div>
                    </TableCell>
                </TableRow>
            }
            .into_any()
        }
        TableBody::Rows => view! {
            <For
                each=move || data.get()
                key=move |record: &T| record.row_key(key_field)
                children=render_row
            />
        }
        .into_any(),
    };

    let search_bar = search.map(|config| {
        view! {
            <div class="data-table__search">
                <div class="data-table__search-input">
                    {icon("search")}
                    <input
                        type="text"
                        class="form__input"
                        placeholder=config.placeholder
                        prop:value=move || search_box.with(|s| s.pending().to_string())
                        on:input=move |ev| search_box.update(|s| s.input(event_target_value(&ev)))
                    />
                </div>
                <Button
                    appearance=ButtonAppearance::Primary
                    on_click=move |_| dispatch(on_event, search_box.with_untracked(SearchBox::submit))
                >
                    "Search"
                </Button>
            </div>
        }
    });

    let footer = pagination.map(|config| {
        view! {
            <PaginationControls
                config=config
                on_page_change=Callback::new(move |page| dispatch(on_event, Pager::activate(page)))
            />
        }
    });

    view! {
        <div class="data-table">
            {search_bar}
            <div class="table-wrapper">
                <Table attr:style="width: 100%;">
                    <TableHeader>
                        <TableRow>{header}</TableRow>
                    </TableHeader>
                    <TableBody>{body}</TableBody>
                </Table>
            </div>
            {footer}
        </div>
    }
}
