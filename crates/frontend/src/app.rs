use crate::layout::global_context::AppGlobalContext;
use crate::routes::routes::AppRoutes;
use crate::shared::config::{provide_config, AppConfig};
use leptos::prelude::*;

#[component]
pub fn App(config: AppConfig) -> impl IntoView {
    provide_config(config);

    // Provide the AppGlobalContext store to the whole app via context.
    provide_context(AppGlobalContext::new());

    view! {
        <AppRoutes />
    }
}
