use crate::layout::global_context::use_global_context;
use leptos::prelude::*;

/// Top bar: sidebar toggle and the current page title.
#[component]
pub fn TopHeader() -> impl IntoView {
    let ctx = use_global_context();

    view! {
        <header class="top-header">
            <button
                class="top-header__toggle"
                title="Toggle sidebar"
                on:click=move |_| ctx.toggle_left()
            >
                "☰"
            </button>
            <span class="top-header__title">{move || ctx.active.get().title()}</span>
        </header>
    }
}
