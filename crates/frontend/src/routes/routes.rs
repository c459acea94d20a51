use crate::layout::center::center::Center;
use crate::layout::global_context::use_global_context;
use crate::layout::left::sidebar::Sidebar;
use crate::layout::Shell;
use leptos::prelude::*;

#[component]
fn MainLayout() -> impl IntoView {
    let ctx = use_global_context();

    // Initialize URL integration. This runs once when the component is created.
    ctx.init_router_integration();

    view! {
        <Shell
            left=|| view! { <Sidebar /> }.into_any()
            center=|| view! { <Center /> }.into_any()
        />
    }
}

#[component]
pub fn AppRoutes() -> impl IntoView {
    view! { <MainLayout /> }
}
