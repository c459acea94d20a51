use crate::shared::api_utils::{fetch_fixture, parse_fixture, Fixture};
use contracts::system::users::User;
use once_cell::sync::Lazy;

static USERS: Fixture<User> =
    Lazy::new(|| parse_fixture(include_str!("../../../fixtures/users.json"), "users"));

pub async fn fetch_users(delay_ms: u32) -> Result<Vec<User>, String> {
    fetch_fixture(&USERS, "users", delay_ms).await
}
