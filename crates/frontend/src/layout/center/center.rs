use crate::layout::global_context::use_global_context;
use leptos::prelude::*;

/// Content area: renders the active page, fresh on every switch.
#[component]
pub fn Center() -> impl IntoView {
    let ctx = use_global_context();

    view! {
        <div data-zone="center" class="app-content" style="flex: 1; overflow: auto;">
            {move || ctx.active.get().render()}
        </div>
    }
}
