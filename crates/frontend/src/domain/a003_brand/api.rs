use crate::shared::api_utils::{fetch_fixture, parse_fixture, Fixture};
use contracts::domain::a003_brand::aggregate::Brand;
use once_cell::sync::Lazy;

static BRANDS: Fixture<Brand> =
    Lazy::new(|| parse_fixture(include_str!("../../../fixtures/brands.json"), "brands"));

pub async fn fetch_brands(delay_ms: u32) -> Result<Vec<Brand>, String> {
    fetch_fixture(&BRANDS, "brands", delay_ms).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixture_parses() {
        assert_eq!(BRANDS.as_ref().unwrap().len(), 8);
    }
}
