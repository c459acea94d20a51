use crate::domain::a001_product::api::fetch_products;
use crate::domain::a002_category::api::fetch_categories;
use crate::domain::a003_brand::api::fetch_brands;
use crate::domain::a004_service::api::fetch_services;
use crate::domain::a005_order::api::{fetch_orders, recent_orders};
use crate::domain::a005_order::ui::list::order_columns;
use crate::layout::global_context::use_global_context;
use crate::layout::registry::AdminPage;
use crate::shared::components::error_banner::ErrorBanner;
use crate::shared::components::page_header::PageHeader;
use crate::shared::components::stat_card::StatCard;
use crate::shared::components::table::format_rupees;
use crate::shared::config::use_config;
use crate::shared::data_table::DataTable;
use crate::shared::list_resource::ListResource;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_DASHBOARD;
use crate::system::users::api::fetch_users;
use contracts::domain::a001_product::aggregate::{Product, StockLevel};
use contracts::domain::a005_order::aggregate::Order;
use contracts::enums::order_status::OrderStatus;
use leptos::prelude::*;
use leptos::task::spawn_local;

const RECENT_ORDERS: usize = 5;

/// Record counts behind the stat cards.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OverviewStats {
    pub products: usize,
    pub low_stock: usize,
    pub categories: usize,
    pub brands: usize,
    pub services: usize,
    pub orders: usize,
    pub revenue: f64,
    pub users: usize,
}

impl OverviewStats {
    pub fn with_products(mut self, products: &[Product]) -> Self {
        self.products = products.len();
        self.low_stock = products
            .iter()
            .filter(|p| p.stock_level() != StockLevel::Healthy)
            .count();
        self
    }

    /// Cancelled orders do not count towards revenue.
    pub fn with_orders(mut self, orders: &[Order]) -> Self {
        self.orders = orders.len();
        self.revenue = orders
            .iter()
            .filter(|o| o.status != OrderStatus::Cancelled)
            .map(|o| o.total_amount)
            .sum();
        self
    }
}

async fn load_stats(orders: &[Order]) -> Result<OverviewStats, String> {
    // Orders already paid the simulated latency
    let products = fetch_products(0).await?;
    let stats = OverviewStats {
        categories: fetch_categories(0).await?.len(),
        brands: fetch_brands(0).await?.len(),
        services: fetch_services(0).await?.len(),
        users: fetch_users(0).await?.len(),
        ..OverviewStats::default()
    };
    Ok(stats.with_products(&products).with_orders(orders))
}

#[component]
pub fn OverviewDashboard() -> impl IntoView {
    let ctx = use_global_context();
    let delay_ms = use_config().load_delay_ms;
    let orders = ListResource::load(move || fetch_orders(delay_ms));
    let stats = RwSignal::new(None::<OverviewStats>);

    Effect::new(move |_| {
        if orders.loading.get() {
            return;
        }
        let all = orders.items.get_untracked();
        spawn_local(async move {
            match load_stats(&all).await {
                Ok(loaded) => {
                    stats.try_set(Some(loaded));
                }
                Err(e) => {
                    log::error!("dashboard: {}", e);
                    orders.error.try_set(Some(e));
                }
            }
        });
    });

    let count = move |pick: fn(&OverviewStats) -> usize| {
        Signal::derive(move || stats.with(|s| s.as_ref().map(pick)))
    };
    let recent = Signal::derive(move || orders.items.with(|all| recent_orders(all, RECENT_ORDERS)));

    view! {
        <PageFrame page_id="d001_overview--dashboard" category=PAGE_CAT_DASHBOARD>
            <PageHeader
                title="Dashboard"
                description="Overview of your business performance and statistics"
            />

            <ErrorBanner error=orders.error />

            <div class="stat-grid">
                <StatCard
                    label="Products"
                    icon_name="products"
                    value=count(|s| s.products)
                    subtitle=Signal::derive(move || {
                        stats.with(|s| s.as_ref().map(|s| format!("{} low or out of stock", s.low_stock)))
                    })
                />
                <StatCard label="Categories" icon_name="categories" value=count(|s| s.categories) />
                <StatCard label="Brands" icon_name="brands" value=count(|s| s.brands) />
                <StatCard label="Services" icon_name="services" value=count(|s| s.services) />
                <StatCard
                    label="Orders"
                    icon_name="orders"
                    value=count(|s| s.orders)
                    subtitle=Signal::derive(move || {
                        stats.with(|s| s.as_ref().map(|s| format!("{} revenue", format_rupees(s.revenue))))
                    })
                />
                <StatCard label="Users" icon_name="users" value=count(|s| s.users) />
            </div>

            <div class="dashboard-panel">
                <div class="dashboard-panel__header">
                    <h3 class="dashboard-panel__title">"Recent Orders"</h3>
                    <a class="dashboard-panel__link" on:click=move |_| ctx.navigate(AdminPage::Orders)>
                        "View all"
                    </a>
                </div>
                <DataTable
                    data=recent
                    columns=order_columns()
                    key_field="id"
                    loading=orders.loading
                    empty_message="No orders yet."
                />
            </div>
        </PageFrame>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product(stock: u32) -> Product {
        Product {
            id: stock.to_string(),
            name: "Cement".into(),
            description: String::new(),
            price: 1250.0,
            image_url: String::new(),
            category: "Building Materials".into(),
            subcategory: "Cement".into(),
            brand: "Holcim".into(),
            rating: 4.7,
            stock,
            created_at: None,
            updated_at: None,
        }
    }

    #[test]
    fn test_low_stock_count() {
        let stats = OverviewStats::default().with_products(&[product(500), product(12), product(0)]);
        assert_eq!(stats.products, 3);
        assert_eq!(stats.low_stock, 2);
    }

    #[test]
    fn test_revenue_skips_cancelled() {
        use contracts::enums::order_status::PaymentStatus;

        let order = |id: &str, total: f64, status: OrderStatus| Order {
            id: id.into(),
            customer_id: "1".into(),
            customer_name: "John Doe".into(),
            customer_email: "john@example.com".into(),
            items: Vec::new(),
            total_amount: total,
            status,
            payment_status: PaymentStatus::Paid,
            created_at: "2024-01-20T10:00:00Z".into(),
            updated_at: "2024-01-20T10:00:00Z".into(),
        };
        let stats = OverviewStats::default().with_orders(&[
            order("A", 1000.0, OrderStatus::Delivered),
            order("B", 250.0, OrderStatus::Pending),
            order("C", 9999.0, OrderStatus::Cancelled),
        ]);
        assert_eq!(stats.orders, 3);
        assert_eq!(stats.revenue, 1250.0);
    }
}
