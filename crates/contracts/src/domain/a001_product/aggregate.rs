use serde::{Deserialize, Serialize};

// ============================================================================
// Aggregate Root
// ============================================================================

/// Product of the catalog (building materials, fixtures, etc.)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: String,
    pub name: String,
    pub description: String,
    /// Price in rupees
    pub price: f64,
    pub image_url: String,
    pub category: String,
    pub subcategory: String,
    pub brand: String,
    pub rating: f64,
    pub stock: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
}

/// Stock level bucket used for badges in lists.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StockLevel {
    Healthy,
    Low,
    OutOfStock,
}

impl Product {
    /// More than 20 units is healthy, 1..=20 is low.
    pub fn stock_level(&self) -> StockLevel {
        match self.stock {
            0 => StockLevel::OutOfStock,
            1..=20 => StockLevel::Low,
            _ => StockLevel::Healthy,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product(stock: u32) -> Product {
        Product {
            id: "p".into(),
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
    fn test_stock_level_boundaries() {
        assert_eq!(product(0).stock_level(), StockLevel::OutOfStock);
        assert_eq!(product(1).stock_level(), StockLevel::Low);
        assert_eq!(product(20).stock_level(), StockLevel::Low);
        assert_eq!(product(21).stock_level(), StockLevel::Healthy);
    }

    #[test]
    fn test_serializes_camel_case() {
        let json = serde_json::to_value(product(5)).unwrap();
        assert_eq!(json["imageUrl"], "");
        assert!(json.get("createdAt").is_none());
    }
}
