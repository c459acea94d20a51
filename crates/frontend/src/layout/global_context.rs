use crate::layout::registry::AdminPage;
use leptos::prelude::*;
use serde::Serialize;
use std::collections::HashMap;
use web_sys::window;

/// App-wide navigation state: which admin page is shown, which order the
/// details page shows, and whether the sidebar is open.
#[derive(Clone, Copy)]
pub struct AppGlobalContext {
    pub active: RwSignal<AdminPage>,
    pub selected_order: RwSignal<Option<String>>,
    pub left_open: RwSignal<bool>,
}

impl AppGlobalContext {
    pub fn new() -> Self {
        Self {
            active: RwSignal::new(AdminPage::Dashboard),
            selected_order: RwSignal::new(None),
            left_open: RwSignal::new(true),
        }
    }

    /// Restore the page from `?active=` (and `&order=`) and keep the URL in
    /// sync afterwards.
    pub fn init_router_integration(&self) {
        let search = window()
            .and_then(|w| w.location().search().ok())
            .unwrap_or_default();
        match route_from_query(&search) {
            Some(Route { order: Some(id), .. }) => self.open_order(id),
            Some(Route { page, .. }) => self.navigate(page),
            None => {}
        }

        let this = *self;
        Effect::new(move |_| {
            let route = Route {
                page: this.active.get(),
                order: this.selected_order.get(),
            };
            let new_url = query_for(&route);

            let current_search = window()
                .and_then(|w| w.location().search().ok())
                .unwrap_or_default();

            if current_search != new_url {
                if let Some(w) = window() {
                    if let Ok(history) = w.history() {
                        let _ = history.replace_state_with_url(
                            &wasm_bindgen::JsValue::NULL,
                            "",
                            Some(&new_url),
                        );
                    }
                }
            }
        });
    }

    pub fn navigate(&self, page: AdminPage) {
        log::info!("navigate: {}", page.key());
        self.active.set(page);
    }

    /// Show the details page for order `id`.
    pub fn open_order(&self, id: String) {
        log::info!("navigate: {} {}", AdminPage::OrderDetails.key(), id);
        self.selected_order.set(Some(id));
        self.active.set(AdminPage::OrderDetails);
    }

    pub fn toggle_left(&self) {
        self.left_open.update(|val| *val = !*val);
    }
}

impl Default for AppGlobalContext {
    fn default() -> Self {
        Self::new()
    }
}

pub fn use_global_context() -> AppGlobalContext {
    use_context::<AppGlobalContext>().expect("AppGlobalContext context not found")
}

/// Page plus the order shown on the details page.
#[derive(Debug, Clone, PartialEq)]
struct Route {
    page: AdminPage,
    order: Option<String>,
}

/// `?active=order-details` without an order id falls back to the order list.
fn route_from_query(search: &str) -> Option<Route> {
    let params: HashMap<String, String> =
        serde_qs::from_str(search.trim_start_matches('?')).unwrap_or_default();
    let page = params.get("active").and_then(|key| AdminPage::from_key(key))?;
    let order = params.get("order").filter(|id| !id.is_empty()).cloned();
    Some(match (page, order) {
        (AdminPage::OrderDetails, None) => Route { page: AdminPage::Orders, order: None },
        (AdminPage::OrderDetails, order) => Route { page, order },
        (page, _) => Route { page, order: None },
    })
}

#[derive(Serialize)]
struct RouteQuery<'a> {
    active: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    order: Option<&'a str>,
}

fn query_for(route: &Route) -> String {
    let query = RouteQuery {
        active: route.page.key(),
        order: route.order.as_deref().filter(|_| route.page == AdminPage::OrderDetails),
    };
    format!("?{}", serde_qs::to_string(&query).unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn details_route(id: &str) -> Route {
        Route { page: AdminPage::OrderDetails, order: Some(id.into()) }
    }

    fn page_of(search: &str) -> Option<AdminPage> {
        route_from_query(search).map(|r| r.page)
    }

    #[test]
    fn test_page_from_query() {
        assert_eq!(page_of("?active=orders"), Some(AdminPage::Orders));
        assert_eq!(page_of("?active=nowhere"), None);
        assert_eq!(page_of(""), None);
    }

    #[test]
    fn test_order_details_route() {
        assert_eq!(
            route_from_query("?active=order-details&order=ORD003"),
            Some(Route { page: AdminPage::OrderDetails, order: Some("ORD003".into()) })
        );
        // no id: back to the list
        assert_eq!(page_of("?active=order-details"), Some(AdminPage::Orders));
        assert_eq!(page_of("?active=order-details&order="), Some(AdminPage::Orders));
        // stray id on another page is ignored
        assert_eq!(
            route_from_query("?active=brands&order=ORD003"),
            Some(Route { page: AdminPage::Brands, order: None })
        );
    }

    #[test]
    fn test_query_for_roundtrips() {
        for page in AdminPage::nav() {
            let route = Route { page, order: None };
            assert_eq!(route_from_query(&query_for(&route)), Some(route));
        }
        let details = Route { page: AdminPage::OrderDetails, order: Some("ORD001".into()) };
        assert_eq!(route_from_query(&query_for(&details)), Some(details));
        // the order id is only written for the details page
        let list = Route { page: AdminPage::Orders, order: Some("ORD001".into()) };
        assert_eq!(query_for(&list), "?active=orders");
        assert_eq!(query_for(&details_route("ORD002")), "?active=order-details&order=ORD002");
    }
}
