//! Read-only view of one order: customer, status and line items.

use crate::domain::a005_order::api::{fetch_orders, find_order};
use crate::domain::a005_order::ui::list::status_tone;
use crate::layout::global_context::use_global_context;
use crate::layout::registry::AdminPage;
use crate::shared::components::badge::{badge, BadgeTone};
use crate::shared::components::error_banner::ErrorBanner;
use crate::shared::components::page_header::{BreadcrumbItem, PageHeader};
use crate::shared::components::table::format_rupees;
use crate::shared::config::use_config;
use crate::shared::data_table::{CellValue, ColumnSpec, DataTable, TableRecord};
use crate::shared::date_utils::format_datetime;
use crate::shared::icons::icon;
use crate::shared::list_resource::ListResource;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_DETAIL;
use contracts::domain::a005_order::aggregate::{Order, OrderItem};
use contracts::enums::order_status::PaymentStatus;
use leptos::prelude::*;

impl TableRecord for OrderItem {
    fn field_value(&self, field: &str) -> CellValue {
        match field {
            "id" => self.id.as_str().into(),
            "product_name" => self.product_name.as_str().into(),
            "quantity" => self.quantity.into(),
            "price" => self.price.into(),
            "total" => self.total.into(),
            _ => CellValue::Empty,
        }
    }
}

pub fn payment_tone(status: PaymentStatus) -> BadgeTone {
    match status {
        PaymentStatus::Paid => BadgeTone::Success,
        PaymentStatus::Pending => BadgeTone::Warning,
        PaymentStatus::Failed => BadgeTone::Error,
        PaymentStatus::Refunded => BadgeTone::Neutral,
    }
}

pub fn item_columns() -> Vec<ColumnSpec<OrderItem>> {
    vec![
        ColumnSpec::field("Product", "product_name"),
        ColumnSpec::field("Quantity", "quantity"),
        ColumnSpec::field("Price", "price").cell(|i: &OrderItem| format_rupees(i.price).into_any()),
        ColumnSpec::field("Total", "total").cell(|i: &OrderItem| format_rupees(i.total).into_any()),
    ]
}

fn info_row(icon_name: &'static str, label: &'static str, value: AnyView) -> impl IntoView {
    view! {
        <div class="info-list__row">
            {icon(icon_name)}
            <span class="info-list__label">{label}</span>
            <span class="info-list__value">{value}</span>
        </div>
    }
}

fn order_info(order: Order) -> AnyView {
    let total = format_rupees(order.total_amount);
    view! {
        <div class="dashboard-panel">
            <h2 class="dashboard-panel__title">"Order Information"</h2>
            <div class="info-list">
                {info_row("orders", "Order", format!("#{}", order.id).into_any())}
                {info_row("users", "Customer", order.customer_name.into_any())}
                {info_row("mail", "Email", order.customer_email.into_any())}
                {info_row("dashboard", "Placed", format_datetime(&order.created_at).into_any())}
                {info_row("services", "Status", badge(status_tone(order.status), order.status.display_name()))}
                {info_row(
                    "package",
                    "Payment",
                    badge(payment_tone(order.payment_status), order.payment_status.display_name()),
                )}
            </div>
            <div class="info-list__total">
                <span>"Total"</span>
                <span>{total}</span>
            </div>
        </div>
    }
    .into_any()
}

/// Details of the order held in `AppGlobalContext::selected_order`.
#[component]
#[allow(non_snake_case)]
pub fn OrderDetails() -> impl IntoView {
    let ctx = use_global_context();
    let delay_ms = use_config().load_delay_ms;
    let order_id = ctx.selected_order.get_untracked().unwrap_or_default();
    let orders = ListResource::load(move || fetch_orders(delay_ms));

    let order = Memo::new({
        let order_id = order_id.clone();
        move |_| orders.items.with(|all| find_order(all, &order_id))
    });
    let items = Signal::derive(move || {
        order.with(|o| o.as_ref().map(|o| o.items.clone()).unwrap_or_default())
    });
    let not_found = Signal::derive(move || {
        !orders.loading.get() && orders.error.with(Option::is_none) && order.with(Option::is_none)
    });
    let title = format!("Order #{}", order_id);
    let missing = format!("Order #{} was not found.", order_id);

    view! {
        <PageFrame page_id="a005_order--detail" category=PAGE_CAT_DETAIL>
            <PageHeader
                title=title
                description="View order details"
                breadcrumb=vec![
                    BreadcrumbItem::link("Orders", AdminPage::Orders),
                    BreadcrumbItem::current("Details"),
                ]
            >
                <button class="button button--secondary" on:click=move |_| ctx.navigate(AdminPage::Orders)>
                    {icon("arrow-left")}
                    "Back to Orders"
                </button>
            </PageHeader>

            <ErrorBanner error=orders.error />

            <Show when=move || not_found.get()>
                <div class="warning-box" role="status">
                    <span class="warning-box__text">{missing.clone()}</span>
                </div>
            </Show>

            <div class="page__content page__content--split">
                <div class="dashboard-panel">
                    <h2 class="dashboard-panel__title">"Order Items"</h2>
                    <DataTable
                        data=items
                        columns=item_columns()
                        key_field="id"
                        loading=orders.loading
                        empty_message="No items in this order."
                    />
                </div>
                {move || order.get().map(order_info)}
            </div>
        </PageFrame>
    }
}
