use crate::domain::a003_brand::api::fetch_brands;
use crate::shared::components::error_banner::ErrorBanner;
use crate::shared::components::page_header::{BreadcrumbItem, PageHeader};
use crate::shared::config::use_config;
use crate::shared::data_table::{CellValue, ColumnSpec, DataTable, SortState, TableEvent, TableRecord};
use crate::shared::icons::icon;
use crate::shared::list_resource::{confirm, ListResource};
use crate::shared::list_utils::{sort_list, Sortable};
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_LIST;
use contracts::domain::a003_brand::aggregate::Brand;
use leptos::prelude::*;
use std::cmp::Ordering;

impl TableRecord for Brand {
    fn field_value(&self, field: &str) -> CellValue {
        match field {
            "id" => self.id.as_str().into(),
            "name" => self.name.as_str().into(),
            "description" => self.description.as_str().into(),
            "products_count" => self.products_count.into(),
            _ => CellValue::Empty,
        }
    }
}

impl Sortable for Brand {
    fn compare_by_field(&self, other: &Self, field: &str) -> Ordering {
        match field {
            "name" => self.name.to_lowercase().cmp(&other.name.to_lowercase()),
            "products_count" => self.products_count.cmp(&other.products_count),
            _ => Ordering::Equal,
        }
    }
}

/// Whole list in sort order; brands are few, so there is no paging.
fn sorted(all: &[Brand], sort: &SortState) -> Vec<Brand> {
    let mut items = all.to_vec();
    if let Some(field) = sort.field.as_deref() {
        sort_list(&mut items, field, sort.direction);
    }
    items
}

fn columns(on_delete: Callback<String>) -> Vec<ColumnSpec<Brand>> {
    vec![
        ColumnSpec::rendered("Brand", |b: &Brand| {
            view! {
                <div class="cell-media">
                    <img class="cell-media__thumb" src=b.logo.clone() alt=b.name.clone() />
                    <div>
                        <div class="cell-media__title">{b.name.clone()}</div>
                        <div class="cell-media__subtitle">{b.id.clone()}</div>
                    </div>
                </div>
            }
            .into_any()
        }),
        ColumnSpec::field("Products", "products_count")
            .sortable()
            .cell(|b: &Brand| format!("{} products", b.products_count).into_any()),
        ColumnSpec::field("Description", "description"),
        ColumnSpec::rendered("Actions", move |b: &Brand| {
            let id = b.id.clone();
            view! {
                <div class="cell-actions">
                    <button
                        class="cell-actions__btn cell-actions__btn--danger"
                        title="Delete brand"
                        on:click=move |_| on_delete.run(id.clone())
                    >
                        {icon("trash")}
                    </button>
                </div>
            }
            .into_any()
        }),
    ]
}

#[component]
#[allow(non_snake_case)]
pub fn BrandList() -> impl IntoView {
    let delay_ms = use_config().load_delay_ms;
    let brands = ListResource::load(move || fetch_brands(delay_ms));
    let sort = RwSignal::new(SortState::default());

    let rows = Memo::new(move |_| brands.items.with(|all| sort.with(|s| sorted(all, s))));

    let on_delete = Callback::new(move |id: String| {
        if confirm("Are you sure you want to delete this brand?") {
            brands.remove_where(|b| b.id == id);
        }
    });

    // Only sort events can arrive: no search bar, no pager.
    let on_event = Callback::new(move |ev: TableEvent| {
        if let TableEvent::SortChanged(state) = ev {
            sort.set(state);
        }
    });

    view! {
        <PageFrame page_id="a003_brand--list" category=PAGE_CAT_LIST>
            <PageHeader
                title="Brands"
                description="Manage product brands and manufacturers"
                breadcrumb=vec![BreadcrumbItem::current("Brands")]
            />

            <ErrorBanner error=brands.error />

            <div class="page__content">
                <DataTable
                    data=rows
                    columns=columns(on_delete)
                    key_field="id"
                    loading=brands.loading
                    empty_message="No brands found. Add your first brand to get started."
                    on_event=on_event
                />
            </div>
        </PageFrame>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::data_table::SortDirection;

    fn brand(id: &str, count: u32) -> Brand {
        Brand {
            id: id.into(),
            name: id.to_uppercase(),
            logo: String::new(),
            description: String::new(),
            products_count: count,
            created_at: None,
            updated_at: None,
        }
    }

    #[test]
    fn test_sorted_by_products_count() {
        let all = vec![brand("holcim", 12), brand("dulux", 30), brand("melwa", 15)];

        let unsorted = sorted(&all, &SortState::default());
        assert_eq!(unsorted, all);

        let asc = sorted(&all, &SortState::by("products_count", SortDirection::Asc));
        let counts: Vec<u32> = asc.iter().map(|b| b.products_count).collect();
        assert_eq!(counts, vec![12, 15, 30]);

        let desc = sorted(&all, &SortState::by("products_count", SortDirection::Desc));
        assert_eq!(desc[0].id, "dulux");
    }
}
