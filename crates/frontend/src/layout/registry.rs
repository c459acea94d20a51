//! Admin pages: the sidebar entries plus pages opened from a list.

use crate::dashboards::d001_overview::ui::dashboard::OverviewDashboard;
use crate::domain::a001_product::ui::list::ProductList;
use crate::domain::a002_category::ui::list::CategoryList;
use crate::domain::a003_brand::ui::list::BrandList;
use crate::domain::a004_service::ui::list::ServiceList;
use crate::domain::a005_order::ui::details::OrderDetails;
use crate::domain::a005_order::ui::list::OrderList;
use crate::system::users::ui::list::UsersList;
use leptos::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AdminPage {
    Dashboard,
    Products,
    Categories,
    Services,
    Brands,
    Users,
    Orders,
    /// Opened from an order row; the order id lives in the global context
    OrderDetails,
}

impl AdminPage {
    /// Every page, including those not listed in the sidebar
    pub fn all() -> Vec<AdminPage> {
        let mut pages = Self::nav();
        pages.push(AdminPage::OrderDetails);
        pages
    }

    /// Sidebar entries, in display order
    pub fn nav() -> Vec<AdminPage> {
        vec![
            AdminPage::Dashboard,
            AdminPage::Products,
            AdminPage::Categories,
            AdminPage::Services,
            AdminPage::Brands,
            AdminPage::Users,
            AdminPage::Orders,
        ]
    }

    /// URL / DOM key
    pub fn key(&self) -> &'static str {
        match self {
            AdminPage::Dashboard => "dashboard",
            AdminPage::Products => "products",
            AdminPage::Categories => "categories",
            AdminPage::Services => "services",
            AdminPage::Brands => "brands",
            AdminPage::Users => "users",
            AdminPage::Orders => "orders",
            AdminPage::OrderDetails => "order-details",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            AdminPage::Dashboard => "Dashboard",
            AdminPage::Products => "Products",
            AdminPage::Categories => "Categories",
            AdminPage::Services => "Services",
            AdminPage::Brands => "Brands",
            AdminPage::Users => "Users",
            AdminPage::Orders => "Orders",
            AdminPage::OrderDetails => "Order Details",
        }
    }

    /// Icon name for `icons::icon`; sidebar keys double as icon names
    pub fn icon(&self) -> &'static str {
        match self {
            AdminPage::OrderDetails => "orders",
            page => page.key(),
        }
    }

    /// Sidebar entry highlighted while this page is shown
    pub fn nav_parent(&self) -> AdminPage {
        match self {
            AdminPage::OrderDetails => AdminPage::Orders,
            page => *page,
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::all().into_iter().find(|p| p.key() == key)
    }

    pub fn render(&self) -> AnyView {
        match self {
            AdminPage::Dashboard => view! { <OverviewDashboard /> }.into_any(),
            AdminPage::Products => view! { <ProductList /> }.into_any(),
            AdminPage::Categories => view! { <CategoryList /> }.into_any(),
            AdminPage::Services => view! { <ServiceList /> }.into_any(),
            AdminPage::Brands => view! { <BrandList /> }.into_any(),
            AdminPage::Users => view! { <UsersList /> }.into_any(),
            AdminPage::Orders => view! { <OrderList /> }.into_any(),
            AdminPage::OrderDetails => view! { <OrderDetails /> }.into_any(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_keys_are_unique_and_parse_back() {
        let pages = AdminPage::all();
        for page in &pages {
            assert_eq!(AdminPage::from_key(page.key()), Some(*page));
        }
        let keys: HashSet<_> = pages.iter().map(|p| p.key()).collect();
        assert_eq!(keys.len(), pages.len());
    }

    #[test]
    fn test_details_page_is_not_in_sidebar() {
        let nav = AdminPage::nav();
        assert_eq!(nav.len(), 7);
        assert!(!nav.contains(&AdminPage::OrderDetails));
        assert!(AdminPage::all().contains(&AdminPage::OrderDetails));
        assert_eq!(AdminPage::OrderDetails.icon(), "orders");
        assert_eq!(AdminPage::Brands.icon(), "brands");
        assert_eq!(AdminPage::OrderDetails.nav_parent(), AdminPage::Orders);
        assert_eq!(AdminPage::Users.nav_parent(), AdminPage::Users);
    }
}
