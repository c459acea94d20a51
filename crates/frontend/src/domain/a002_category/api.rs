use crate::shared::api_utils::{fetch_fixture, parse_fixture, Fixture};
use contracts::domain::a002_category::aggregate::Category;
use once_cell::sync::Lazy;

static CATEGORIES: Fixture<Category> =
    Lazy::new(|| parse_fixture(include_str!("../../../fixtures/categories.json"), "categories"));

pub async fn fetch_categories(delay_ms: u32) -> Result<Vec<Category>, String> {
    fetch_fixture(&CATEGORIES, "categories", delay_ms).await
}
