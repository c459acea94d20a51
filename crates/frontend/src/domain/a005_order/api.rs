use crate::shared::api_utils::{fetch_fixture, parse_fixture, Fixture};
use contracts::domain::a005_order::aggregate::Order;
use once_cell::sync::Lazy;

static ORDERS: Fixture<Order> =
    Lazy::new(|| parse_fixture(include_str!("../../../fixtures/orders.json"), "orders"));

pub async fn fetch_orders(delay_ms: u32) -> Result<Vec<Order>, String> {
    fetch_fixture(&ORDERS, "orders", delay_ms).await
}

/// Newest first, at most `limit`.
pub fn recent_orders(orders: &[Order], limit: usize) -> Vec<Order> {
    let mut recent = orders.to_vec();
    recent.sort_by(|a, b| b.created_at.cmp(&a.created_at));
    recent.truncate(limit);
    recent
}

pub fn find_order(orders: &[Order], id: &str) -> Option<Order> {
    orders.iter().find(|o| o.id == id).cloned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixture_totals_match_lines() {
        let orders = ORDERS.as_ref().unwrap();
        assert_eq!(orders.len(), 5);
        for order in orders {
            let lines: f64 = order.items.iter().map(|i| i.total).sum();
            assert_eq!(order.total_amount, lines, "order {}", order.id);
        }
    }

    #[test]
    fn test_recent_orders() {
        let orders = ORDERS.as_ref().unwrap();
        let recent = recent_orders(orders, 3);
        let ids: Vec<_> = recent.iter().map(|o| o.id.as_str()).collect();
        assert_eq!(ids, vec!["ORD001", "ORD002", "ORD003"]);

        assert_eq!(recent_orders(orders, 50).len(), 5);
    }

    #[test]
    fn test_find_order() {
        let orders = ORDERS.as_ref().unwrap();
        let order = find_order(orders, "ORD002").unwrap();
        assert_eq!(order.id, "ORD002");
        assert!(!order.items.is_empty());
        assert_eq!(find_order(orders, "ORD999"), None);
    }
}
