use crate::domain::a001_product::api::fetch_products;
use crate::layout::registry::AdminPage;
use crate::shared::components::badge::{badge, BadgeTone};
use crate::shared::components::error_banner::ErrorBanner;
use crate::shared::components::page_header::{BreadcrumbItem, PageHeader};
use crate::shared::components::table::format_rupees;
use crate::shared::config::use_config;
use crate::shared::data_table::{CellValue, ColumnSpec, DataTable, SearchConfig, TableRecord};
use crate::shared::icons::icon;
use crate::shared::list_resource::{confirm, ListResource};
use crate::shared::list_utils::{
    apply_query, contains_ci, highlight_matches, ListQuery, Searchable, Sortable,
};
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_LIST;
use contracts::domain::a001_product::aggregate::{Product, StockLevel};
use leptos::prelude::*;
use std::cmp::Ordering;

impl TableRecord for Product {
    fn field_value(&self, field: &str) -> CellValue {
        match field {
            "id" => self.id.as_str().into(),
            "name" => self.name.as_str().into(),
            "category" => self.category.as_str().into(),
            "subcategory" => self.subcategory.as_str().into(),
            "brand" => self.brand.as_str().into(),
            "price" => self.price.into(),
            "stock" => self.stock.into(),
            "rating" => self.rating.into(),
            _ => CellValue::Empty,
        }
    }
}

impl Searchable for Product {
    fn matches_filter(&self, query: &str) -> bool {
        contains_ci(&self.name, query)
            || contains_ci(&self.brand, query)
            || contains_ci(&self.category, query)
    }
}

impl Sortable for Product {
    fn compare_by_field(&self, other: &Self, field: &str) -> Ordering {
        match field {
            "name" => self.name.to_lowercase().cmp(&other.name.to_lowercase()),
            "brand" => self.brand.to_lowercase().cmp(&other.brand.to_lowercase()),
            "price" => self.price.partial_cmp(&other.price).unwrap_or(Ordering::Equal),
            "stock" => self.stock.cmp(&other.stock),
            _ => Ordering::Equal,
        }
    }
}

fn stock_badge(product: &Product) -> AnyView {
    match product.stock_level() {
        StockLevel::Healthy => badge(BadgeTone::Success, format!("{} in stock", product.stock)),
        StockLevel::Low => badge(BadgeTone::Warning, format!("{} in stock", product.stock)),
        StockLevel::OutOfStock => badge(BadgeTone::Error, "Out of stock"),
    }
}

fn columns(query: RwSignal<ListQuery>, on_delete: Callback<String>) -> Vec<ColumnSpec<Product>> {
    vec![
        ColumnSpec::rendered("Product", move |p: &Product| {
            let name = p.name.clone();
            view! {
                <div class="cell-media">
                    <img class="cell-media__thumb" src=p.image_url.clone() alt=p.name.clone() />
                    <div>
                        <div class="cell-media__title">
                            {move || query.with(|q| highlight_matches(&name, &q.search_query))}
                        </div>
                        <div class="cell-media__subtitle">{p.id.clone()}</div>
                    </div>
                </div>
            }
            .into_any()
        }),
        ColumnSpec::field("Category", "category").cell(|p: &Product| {
            view! {
                <div>
                    <div class="cell-media__title">{p.category.clone()}</div>
                    <div class="cell-media__subtitle">{p.subcategory.clone()}</div>
                </div>
            }
            .into_any()
        }),
        ColumnSpec::field("Brand", "brand").sortable(),
        ColumnSpec::field("Price", "price")
            .sortable()
            .cell(|p: &Product| format_rupees(p.price).into_any()),
        ColumnSpec::field("Stock", "stock").sortable().cell(stock_badge),
        ColumnSpec::rendered("Actions", move |p: &Product| {
            let id = p.id.clone();
            view! {
                <div class="cell-actions">
                    <button
                        class="cell-actions__btn cell-actions__btn--danger"
                        title="Delete product"
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
pub fn ProductList() -> impl IntoView {
    let config = use_config();
    let delay_ms = config.load_delay_ms;
    let products = ListResource::load(move || fetch_products(delay_ms));
    let query = RwSignal::new(ListQuery::new(config.page_size));

    let slice = Memo::new(move |_| products.items.with(|all| query.with(|q| apply_query(all, q))));

    let on_delete = Callback::new(move |id: String| {
        if !confirm("Are you sure you want to delete this product?") {
            return;
        }
        let removed = products.remove_where(|p| p.id == id);
        log::info!("products: removed {} record(s) with id {}", removed, id);
        // The current page may have become empty.
        let last_page = slice.with_untracked(|s| s.total_pages).max(1);
        query.update(|q| q.page = q.page.min(last_page));
    });

    view! {
        <PageFrame page_id="a001_product--list" category=PAGE_CAT_LIST>
            <PageHeader
                title="Products"
                description="Manage your product inventory"
                breadcrumb=vec![BreadcrumbItem::current("Products")]
            />

            <ErrorBanner error=products.error />

            <div class="page__content">
                <DataTable
                    data=Signal::derive(move || slice.with(|s| s.items.clone()))
                    columns=columns(query, on_delete)
                    key_field="id"
                    loading=products.loading
                    pagination=Signal::derive(move || slice.with(|s| s.pagination()))
                    search=SearchConfig::with_placeholder("Search products...")
                    empty_message="No products found. Add your first product to get started."
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

    fn product(id: &str, name: &str, brand: &str, price: f64, stock: u32) -> Product {
        Product {
            id: id.into(),
            name: name.into(),
            description: String::new(),
            price,
            image_url: String::new(),
            category: "Building Materials".into(),
            subcategory: "Cement".into(),
            brand: brand.into(),
            rating: 4.5,
            stock,
            created_at: None,
            updated_at: None,
        }
    }

    fn catalogue() -> Vec<Product> {
        vec![
            product("1", "Premium Cement Bag", "Holcim", 1250.0, 500),
            product("2", "Construction Sand", "Local", 9500.0, 0),
            product("3", "Tokyo Super Cement", "Tokyo Cement", 1180.0, 12),
        ]
    }

    #[test]
    fn test_search_matches_name_brand_and_category() {
        let all = catalogue();
        let mut query = ListQuery::new(10);

        query.apply_event(TableEvent::SearchSubmitted("cement".into()));
        let ids: Vec<_> = apply_query(&all, &query).items.into_iter().map(|p| p.id).collect();
        // every row is in "Building Materials", only names/brands say cement
        assert_eq!(ids, vec!["1", "3"]);

        query.apply_event(TableEvent::SearchSubmitted("LOCAL".into()));
        assert_eq!(apply_query(&all, &query).items[0].id, "2");

        query.apply_event(TableEvent::SearchSubmitted("materials".into()));
        assert_eq!(apply_query(&all, &query).total_count, 3);
    }

    #[test]
    fn test_price_sort() {
        let all = catalogue();
        let mut query = ListQuery::new(10);
        query.apply_event(TableEvent::SortChanged(SortState::by("price", SortDirection::Desc)));

        let prices: Vec<f64> = apply_query(&all, &query).items.iter().map(|p| p.price).collect();
        assert_eq!(prices, vec![9500.0, 1250.0, 1180.0]);
    }

    #[test]
    fn test_sortable_columns() {
        let cols = columns(RwSignal::new(ListQuery::new(10)), Callback::new(|_: String| {}));
        let keys: Vec<_> = cols.iter().filter_map(|c| c.sort_key()).collect();
        assert_eq!(keys, vec!["brand", "price", "stock"]);
    }

    #[test]
    fn test_field_values() {
        let p = product("7", "Tile", "Rocell", 5600.0, 18);
        assert_eq!(p.row_key("id"), "7");
        assert_eq!(p.field_value("stock"), CellValue::Integer(18));
        assert_eq!(p.field_value("missing"), CellValue::Empty);
    }
}
