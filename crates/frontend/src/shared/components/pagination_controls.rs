use crate::shared::data_table::pagination::{PaginationConfig, Pager};
use crate::shared::icons::icon;
use leptos::prelude::*;

/// Footer with previous/next steps and a window of page buttons.
///
/// Emits the target page of every enabled button; it never changes the
/// current page on its own.
#[component]
pub fn PaginationControls(
    /// Current page (1-based) and page count
    #[prop(into)]
    config: Signal<PaginationConfig>,

    /// Callback when a page is requested
    on_page_change: Callback<usize>,
) -> impl IntoView {
    let pager = Memo::new(move |_| Pager::new(config.get()));

    view! {
        <div class="pagination-controls">
            <span class="pagination-info">{move || pager.with(Pager::summary)}</span>
            <nav class="pagination-nav" aria-label="Pagination">
                <button
                    class="pagination-btn"
                    on:click=move |_| on_page_change.run(pager.with_untracked(|p| p.previous.target))
                    disabled=move || !pager.with(|p| p.previous.enabled)
                    title="Previous page"
                >
                    {icon("chevron-left")}
                </button>
                {move || {
                    pager
                        .get()
                        .pages
                        .into_iter()
                        .map(|button| {
                            let class = if button.active {
                                "pagination-btn pagination-btn--active"
                            } else {
                                "pagination-btn"
                            };
                            view! {
                                <button class=class on:click=move |_| on_page_change.run(button.page)>
                                    {button.page.to_string()}
                                </button>
                            }
                        })
                        .collect_view()
                }}
                <button
                    class="pagination-btn"
                    on:click=move |_| on_page_change.run(pager.with_untracked(|p| p.next.target))
                    disabled=move || !pager.with(|p| p.next.enabled)
                    title="Next page"
                >
                    {icon("chevron-right")}
                </button>
            </nav>
        </div>
    }
}
