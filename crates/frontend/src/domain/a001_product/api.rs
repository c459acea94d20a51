use crate::shared::api_utils::{fetch_fixture, parse_fixture, Fixture};
use contracts::domain::a001_product::aggregate::Product;
use once_cell::sync::Lazy;

static PRODUCTS: Fixture<Product> =
    Lazy::new(|| parse_fixture(include_str!("../../../fixtures/products.json"), "products"));

pub async fn fetch_products(delay_ms: u32) -> Result<Vec<Product>, String> {
    fetch_fixture(&PRODUCTS, "products", delay_ms).await
}
