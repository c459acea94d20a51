//! Standard root wrapper for every admin page.
//!
//! Sets `id` (`"{entity}--{category}"`) and `data-page-category` on the root
//! element so a page can be found from the DOM inspector.

use super::page_standard::*;
use leptos::prelude::*;

#[component]
pub fn PageFrame(
    /// HTML id in format `{entity}--{category}`, e.g. `"a001_product--list"`.
    page_id: &'static str,
    /// One of the PAGE_CAT_* constants from `page_standard`.
    category: &'static str,
    children: Children,
) -> impl IntoView {
    debug_assert!(is_valid_page_id(page_id), "bad page id: {page_id}");
    let class = match category {
        PAGE_CAT_DASHBOARD => "page page--dashboard",
        _ => "page",
    };

    view! {
        <div id=page_id class=class data-page-category=category>
            {children()}
        </div>
    }
}
