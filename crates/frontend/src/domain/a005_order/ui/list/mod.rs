use crate::domain::a005_order::api::fetch_orders;
use crate::layout::global_context::use_global_context;
use crate::shared::components::badge::{badge, BadgeTone};
use crate::shared::components::error_banner::ErrorBanner;
use crate::shared::components::page_header::{BreadcrumbItem, PageHeader};
use crate::shared::components::table::format_rupees;
use crate::shared::config::use_config;
use crate::shared::data_table::{CellValue, ColumnSpec, DataTable, TableRecord};
use crate::shared::date_utils::format_date;
use crate::shared::icons::icon;
use crate::shared::list_resource::ListResource;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_LIST;
use contracts::domain::a005_order::aggregate::Order;
use contracts::enums::order_status::OrderStatus;
use leptos::prelude::*;

impl TableRecord for Order {
    fn field_value(&self, field: &str) -> CellValue {
        match field {
            "id" => self.id.as_str().into(),
            "customer_name" => self.customer_name.as_str().into(),
            "created_at" => self.created_at.as_str().into(),
            "total_amount" => self.total_amount.into(),
            "status" => self.status.code().into(),
            "payment_status" => self.payment_status.display_name().into(),
            _ => CellValue::Empty,
        }
    }
}

pub fn status_tone(status: OrderStatus) -> BadgeTone {
    match status {
        OrderStatus::Delivered => BadgeTone::Success,
        OrderStatus::Processing | OrderStatus::Shipped => BadgeTone::Info,
        OrderStatus::Cancelled => BadgeTone::Error,
        OrderStatus::Pending => BadgeTone::Warning,
    }
}

/// Columns shared by the orders page and the dashboard.
pub fn order_columns() -> Vec<ColumnSpec<Order>> {
    vec![
        ColumnSpec::rendered("Order", |o: &Order| {
            view! {
                <div class="cell-media">
                    <div class="cell-media__icon">{icon("orders")}</div>
                    <div>
                        <div class="cell-media__title">{format!("#{}", o.id)}</div>
                        <div class="cell-media__subtitle">{o.customer_name.clone()}</div>
                    </div>
                </div>
            }
            .into_any()
        }),
        ColumnSpec::field("Date", "created_at").cell(|o: &Order| format_date(&o.created_at).into_any()),
        ColumnSpec::field("Total", "total_amount")
            .cell(|o: &Order| format_rupees(o.total_amount).into_any()),
        ColumnSpec::derived("Items", |o: &Order| o.item_count().into())
            .cell(|o: &Order| format!("{} items", o.item_count()).into_any()),
        ColumnSpec::field("Status", "status")
            .cell(|o: &Order| badge(status_tone(o.status), o.status.display_name())),
    ]
}

#[component]
#[allow(non_snake_case)]
pub fn OrderList() -> impl IntoView {
    let ctx = use_global_context();
    let delay_ms = use_config().load_delay_ms;
    let orders = ListResource::load(move || fetch_orders(delay_ms));

    let mut columns = order_columns();
    columns.push(ColumnSpec::field("Payment", "payment_status"));
    columns.push(ColumnSpec::rendered("Actions", move |o: &Order| {
        let id = o.id.clone();
        view! {
            <div class="cell-actions">
                <button
                    class="cell-actions__btn"
                    title="View order details"
                    on:click=move |_| ctx.open_order(id.clone())
                >
                    {icon("eye")}
                </button>
            </div>
        }
        .into_any()
    }));

    view! {
        <PageFrame page_id="a005_order--list" category=PAGE_CAT_LIST>
            <PageHeader
                title="Orders"
                description="Manage customer orders and track their status"
                breadcrumb=vec![BreadcrumbItem::current("Orders")]
            />

            <ErrorBanner error=orders.error />

            <div class="page__content">
                <DataTable
                    data=orders.items
                    columns=columns
                    key_field="id"
                    loading=orders.loading
                    empty_message="No orders found."
                />
            </div>
        </PageFrame>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::data_table::CellContent;
    use contracts::domain::a005_order::aggregate::OrderItem;
    use contracts::enums::order_status::PaymentStatus;

    fn order() -> Order {
        let line = |id: &str, quantity: u32| OrderItem {
            id: id.into(),
            product_id: id.into(),
            product_name: "Tile".into(),
            quantity,
            price: 100.0,
            total: 100.0 * quantity as f64,
        };
        Order {
            id: "ORD010".into(),
            customer_id: "1".into(),
            customer_name: "John Doe".into(),
            customer_email: "john@example.com".into(),
            items: vec![line("1", 2), line("2", 3)],
            total_amount: 500.0,
            status: OrderStatus::Shipped,
            payment_status: PaymentStatus::Paid,
            created_at: "2024-01-20T10:00:00Z".into(),
            updated_at: "2024-01-20T10:00:00Z".into(),
        }
    }

    #[test]
    fn test_item_count_is_derived() {
        let columns = order_columns();
        let items = columns.iter().find(|c| c.header == "Items").unwrap();
        assert_eq!(items.value(&order()), CellValue::Integer(5));
        assert_eq!(items.sort_key(), None);
    }

    #[test]
    fn test_plain_payment_column() {
        let column: ColumnSpec<Order> = ColumnSpec::field("Payment", "payment_status");
        match column.resolve(&order()) {
            CellContent::Value(v) => assert_eq!(v.to_string(), "Paid"),
            CellContent::Rendered(_) => panic!("expected a plain value"),
        }
    }

    #[test]
    fn test_status_tones() {
        assert_eq!(status_tone(OrderStatus::Delivered), BadgeTone::Success);
        assert_eq!(status_tone(OrderStatus::Pending), BadgeTone::Warning);
        assert_eq!(status_tone(OrderStatus::Cancelled), BadgeTone::Error);
    }
}
