use crate::domain::a004_service::api::fetch_services;
use crate::shared::components::error_banner::ErrorBanner;
use crate::shared::components::page_header::{BreadcrumbItem, PageHeader};
use crate::shared::config::use_config;
use crate::shared::data_table::{CellValue, ColumnSpec, DataTable, SearchConfig, TableRecord};
use crate::shared::icons::icon;
use crate::shared::list_resource::{confirm, ListResource};
use crate::shared::list_utils::{
    apply_query, contains_ci, highlight_matches, ListQuery, Searchable, Sortable,
};
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_LIST;
use contracts::domain::a004_service::aggregate::Service;
use leptos::prelude::*;
use std::cmp::Ordering;

impl TableRecord for Service {
    fn field_value(&self, field: &str) -> CellValue {
        match field {
            "id" => self.id.as_str().into(),
            "name" => self.name.as_str().into(),
            "category" => self.category.as_str().into(),
            "subcategory" => self.subcategory.as_str().into(),
            "description" => self.description.as_str().into(),
            "provider_count" => self.provider_count.into(),
            _ => CellValue::Empty,
        }
    }
}

impl Searchable for Service {
    fn matches_filter(&self, query: &str) -> bool {
        contains_ci(&self.name, query)
            || contains_ci(&self.category, query)
            || contains_ci(&self.description, query)
    }
}

impl Sortable for Service {
    fn compare_by_field(&self, other: &Self, field: &str) -> Ordering {
        match field {
            "name" => self.name.to_lowercase().cmp(&other.name.to_lowercase()),
            "provider_count" => self.provider_count.cmp(&other.provider_count),
            _ => Ordering::Equal,
        }
    }
}

fn columns(query: RwSignal<ListQuery>, on_delete: Callback<String>) -> Vec<ColumnSpec<Service>> {
    vec![
        ColumnSpec::rendered("Service", move |s: &Service| {
            let name = s.name.clone();
            view! {
                <div class="cell-media">
                    <img class="cell-media__thumb" src=s.image_url.clone() alt=s.name.clone() />
                    <div class="cell-media__title">
                        {move || query.with(|q| highlight_matches(&name, &q.search_query))}
                    </div>
                </div>
            }
            .into_any()
        }),
        ColumnSpec::field("Category", "category").cell(|s: &Service| {
            view! {
                <div>
                    <div class="cell-media__title">{s.category.clone()}</div>
                    <div class="cell-media__subtitle">{s.subcategory.clone()}</div>
                </div>
            }
            .into_any()
        }),
        ColumnSpec::field("Providers", "provider_count")
            .sortable()
            .cell(|s: &Service| format!("{} providers", s.provider_count).into_any()),
        ColumnSpec::field("Description", "description"),
        ColumnSpec::rendered("Actions", move |s: &Service| {
            let id = s.id.clone();
            view! {
                <div class="cell-actions">
                    <button
                        class="cell-actions__btn cell-actions__btn--danger"
                        title="Delete service"
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
pub fn ServiceList() -> impl IntoView {
    let config = use_config();
    let delay_ms = config.load_delay_ms;
    let services = ListResource::load(move || fetch_services(delay_ms));
    let query = RwSignal::new(ListQuery::new(config.page_size));

    let slice = Memo::new(move |_| services.items.with(|all| query.with(|q| apply_query(all, q))));

    let on_delete = Callback::new(move |id: String| {
        if confirm("Are you sure you want to delete this service?") {
            services.remove_where(|s| s.id == id);
            let last_page = slice.with_untracked(|s| s.total_pages).max(1);
            query.update(|q| q.page = q.page.min(last_page));
        }
    });

    view! {
        <PageFrame page_id="a004_service--list" category=PAGE_CAT_LIST>
            <PageHeader
                title="Services"
                description="Manage construction services"
                breadcrumb=vec![BreadcrumbItem::current("Services")]
            />

            <ErrorBanner error=services.error />

            <div class="page__content">
                <DataTable
                    data=Signal::derive(move || slice.with(|s| s.items.clone()))
                    columns=columns(query, on_delete)
                    key_field="id"
                    loading=services.loading
                    pagination=Signal::derive(move || slice.with(|s| s.pagination()))
                    search=SearchConfig::with_placeholder("Search services...")
                    empty_message="No services found. Add your first service to get started."
                    on_event=Callback::new(move |ev| query.update(|q| q.apply_event(ev)))
                />
            </div>
        </PageFrame>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::data_table::{SortDirection, SortState, TableEvent};

    fn service(id: &str, category: &str, providers: u32) -> Service {
        Service {
            id: id.into(),
            name: id.replace('-', " "),
            category: category.into(),
            subcategory: String::new(),
            description: String::new(),
            image_url: String::new(),
            provider_count: providers,
            created_at: None,
            updated_at: None,
        }
    }

    #[test]
    fn test_search_then_sort_by_providers() {
        let all = vec![
            service("civil-construction", "General Construction Services", 34),
            service("architectural-services", "Architectural and Engineering Services", 48),
            service("building-construction", "General Construction Services", 52),
        ];
        let mut query = ListQuery::new(10);
        query.apply_event(TableEvent::SortChanged(SortState::by(
            "provider_count",
            SortDirection::Desc,
        )));
        query.apply_event(TableEvent::SearchSubmitted("general".into()));

        let ids: Vec<_> = apply_query(&all, &query).items.into_iter().map(|s| s.id).collect();
        assert_eq!(ids, vec!["building-construction", "civil-construction"]);
    }
}
