//! Sidebar navigation: one entry per top-level admin page, active entry highlighted.

use crate::layout::global_context::use_global_context;
use crate::layout::registry::AdminPage;
use crate::shared::icons::icon;
use leptos::prelude::*;

#[component]
pub fn Sidebar() -> impl IntoView {
    let ctx = use_global_context();

    view! {
        <aside class="sidebar">
            <div class="sidebar__brand" on:click=move |_| ctx.navigate(AdminPage::Dashboard)>
                <span class="sidebar__brand-name">"Brick"</span>
                <span class="sidebar__brand-tld">".lk"</span>
                <span class="sidebar__brand-tag">"Admin"</span>
            </div>
            <nav class="sidebar__nav">
                <ul>
                    {AdminPage::nav()
                        .into_iter()
                        .map(|page| {
                            let is_active = move || ctx.active.get().nav_parent() == page;
                            view! {
                                <li
                                    class="sidebar__item"
                                    class:sidebar__item--active=is_active
                                    on:click=move |_| ctx.navigate(page)
                                >
                                    {icon(page.icon())}
                                    <span>{page.title()}</span>
                                </li>
                            }
                        })
                        .collect_view()}
                </ul>
            </nav>
        </aside>
    }
}
