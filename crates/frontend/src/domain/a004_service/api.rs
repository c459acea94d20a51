use crate::shared::api_utils::{fetch_fixture, parse_fixture, Fixture};
use contracts::domain::a004_service::aggregate::Service;
use once_cell::sync::Lazy;

static SERVICES: Fixture<Service> =
    Lazy::new(|| parse_fixture(include_str!("../../../fixtures/services.json"), "services"));

pub async fn fetch_services(delay_ms: u32) -> Result<Vec<Service>, String> {
    fetch_fixture(&SERVICES, "services", delay_ms).await
}
