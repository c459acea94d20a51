use crate::domain::a002_category::api::fetch_categories;
use crate::shared::components::error_banner::ErrorBanner;
use crate::shared::components::page_header::{BreadcrumbItem, PageHeader};
use crate::shared::config::use_config;
use crate::shared::data_table::{CellValue, ColumnSpec, DataTable, SearchConfig, TableRecord};
use crate::shared::icons::icon;
use crate::shared::list_resource::{confirm, ListResource};
use crate::shared::list_utils::{apply_query, contains_ci, ListQuery, Searchable, Sortable};
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_LIST;
use contracts::domain::a002_category::aggregate::Category;
use leptos::prelude::*;
use std::cmp::Ordering;

impl TableRecord for Category {
    fn field_value(&self, field: &str) -> CellValue {
        match field {
            "id" => self.id.as_str().into(),
            "name" => self.name.as_str().into(),
            "subcategories" => self.subcategories.len().into(),
            _ => CellValue::Empty,
        }
    }
}

impl Searchable for Category {
    fn matches_filter(&self, query: &str) -> bool {
        contains_ci(&self.name, query)
            || self.subcategories.iter().any(|s| contains_ci(&s.name, query))
    }
}

impl Sortable for Category {
    fn compare_by_field(&self, other: &Self, field: &str) -> Ordering {
        match field {
            "name" => self.name.to_lowercase().cmp(&other.name.to_lowercase()),
            "subcategories" => self.subcategories.len().cmp(&other.subcategories.len()),
            _ => Ordering::Equal,
        }
    }
}

fn columns(on_delete: Callback<String>) -> Vec<ColumnSpec<Category>> {
    vec![
        ColumnSpec::rendered("Category", |c: &Category| {
            view! {
                <div class="cell-media">
                    <img class="cell-media__thumb" src=c.image_url.clone() alt=c.name.clone() />
                    <div class="cell-media__title">{c.name.clone()}</div>
                </div>
            }
            .into_any()
        }),
        ColumnSpec::field("Subcategories", "subcategories")
            .sortable()
            .cell(|c: &Category| {
                view! {
                    <div>
                        <div class="cell-media__title">{c.subcategories.len()}</div>
                        <div class="cell-media__subtitle">{c.subcategory_names()}</div>
                    </div>
                }
                .into_any()
            }),
        ColumnSpec::rendered("Actions", move |c: &Category| {
            let id = c.id.clone();
            view! {
                <div class="cell-actions">
                    <button
                        class="cell-actions__btn cell-actions__btn--danger"
                        title="Delete category"
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
pub fn CategoryList() -> impl IntoView {
    let config = use_config();
    let delay_ms = config.load_delay_ms;
    let categories = ListResource::load(move || fetch_categories(delay_ms));
    let query = RwSignal::new(ListQuery::new(config.page_size));

    let slice =
        Memo::new(move |_| categories.items.with(|all| query.with(|q| apply_query(all, q))));

    let on_delete = Callback::new(move |id: String| {
        if confirm("Are you sure you want to delete this category?") {
            categories.remove_where(|c| c.id == id);
            let last_page = slice.with_untracked(|s| s.total_pages).max(1);
            query.update(|q| q.page = q.page.min(last_page));
        }
    });

    view! {
        <PageFrame page_id="a002_category--list" category=PAGE_CAT_LIST>
            <PageHeader
                title="Categories"
                description="Manage product categories and subcategories"
                breadcrumb=vec![BreadcrumbItem::current("Categories")]
            />

            <ErrorBanner error=categories.error />

            <div class="page__content">
                <DataTable
                    data=Signal::derive(move || slice.with(|s| s.items.clone()))
                    columns=columns(on_delete)
                    key_field="id"
                    loading=categories.loading
                    pagination=Signal::derive(move || slice.with(|s| s.pagination()))
                    search=SearchConfig::with_placeholder("Search categories...")
                    empty_message="No categories found. Add your first category to get started."
                    on_event=Callback::new(move |ev| query.update(|q| q.apply_event(ev)))
                />
            </div>
        </PageFrame>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a002_category::aggregate::SubCategory;

    fn category(name: &str, subs: &[&str]) -> Category {
        Category {
            id: name.to_lowercase(),
            name: name.into(),
            image_url: String::new(),
            subcategories: subs
                .iter()
                .map(|s| SubCategory {
                    id: s.to_lowercase(),
                    name: s.to_string(),
                    image_url: String::new(),
                })
                .collect(),
            created_at: None,
            updated_at: None,
        }
    }

    #[test]
    fn test_search_reaches_subcategories() {
        let electrical = category("Electrical", &["Lighting", "Wiring"]);
        assert!(electrical.matches_filter("wiring"));
        assert!(electrical.matches_filter("elec"));
        assert!(!electrical.matches_filter("paint"));
    }

    #[test]
    fn test_subcategory_count_value() {
        let plumbing = category("Plumbing", &["Pipes", "Pumps", "Faucets"]);
        assert_eq!(plumbing.field_value("subcategories"), CellValue::Integer(3));
    }
}
