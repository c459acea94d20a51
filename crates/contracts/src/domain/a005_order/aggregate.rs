use crate::enums::order_status::{OrderStatus, PaymentStatus};
use serde::{Deserialize, Serialize};

// ============================================================================
// Aggregate Root
// ============================================================================

/// Customer order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: String,
    pub customer_id: String,
    pub customer_name: String,
    pub customer_email: String,
    pub items: Vec<OrderItem>,
    pub total_amount: f64,
    pub status: OrderStatus,
    pub payment_status: PaymentStatus,
    /// RFC 3339 timestamp
    pub created_at: String,
    pub updated_at: String,
}

// ============================================================================
// Lines
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderItem {
    pub id: String,
    pub product_id: String,
    pub product_name: String,
    pub quantity: u32,
    pub price: f64,
    pub total: f64,
}

impl Order {
    /// Total quantity across all lines
    pub fn item_count(&self) -> u32 {
        self.items.iter().map(|i| i.quantity).sum()
    }
}
