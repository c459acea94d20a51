use crate::layout::global_context::use_global_context;
use crate::layout::registry::AdminPage;
use crate::shared::icons::icon;
use leptos::prelude::*;

/// One step of the breadcrumb trail. `page: None` renders plain text.
#[derive(Clone, Debug, PartialEq)]
pub struct BreadcrumbItem {
    pub label: &'static str,
    pub page: Option<AdminPage>,
}

impl BreadcrumbItem {
    pub fn link(label: &'static str, page: AdminPage) -> Self {
        Self { label, page: Some(page) }
    }

    pub fn current(label: &'static str) -> Self {
        Self { label, page: None }
    }
}

/// Home link followed by `items`; the last item is never a link.
#[component]
pub fn Breadcrumb(items: Vec<BreadcrumbItem>) -> impl IntoView {
    let ctx = use_global_context();
    let last = items.len().saturating_sub(1);

    view! {
        <nav class="breadcrumb" aria-label="Breadcrumb">
            <ol class="breadcrumb__list">
                <li class="breadcrumb__item">
                    <a class="breadcrumb__link" on:click=move |_| ctx.navigate(AdminPage::Dashboard)>
                        {icon("home")}
                        "Dashboard"
                    </a>
                </li>
                {items
                    .into_iter()
                    .enumerate()
                    .map(|(index, item)| {
                        let crumb = match item.page {
                            Some(page) if index != last => view! {
                                <a class="breadcrumb__link" on:click=move |_| ctx.navigate(page)>
                                    {item.label}
                                </a>
                            }
                            .into_any(),
                            _ => view! { <span class="breadcrumb__current">{item.label}</span> }.into_any(),
                        };
                        view! {
                            <li class="breadcrumb__item">
                                {icon("chevron-right")}
                                {crumb}
                            </li>
                        }
                    })
                    .collect_view()}
            </ol>
        </nav>
    }
}

/// PageHeader component - breadcrumb, title, description and actions
#[component]
pub fn PageHeader(
    /// Page title (required)
    #[prop(into)]
    title: String,

    /// Optional description under the title
    #[prop(optional, into)]
    description: MaybeProp<String>,

    /// Breadcrumb trail after the home link
    #[prop(optional)]
    breadcrumb: Vec<BreadcrumbItem>,

    /// Action buttons
    #[prop(optional)]
    children: Option<Children>,
) -> impl IntoView {
    view! {
        <div class="page-header">
            <Breadcrumb items=breadcrumb />
            <div class="page-header__content">
                <div class="page-header__text">
                    <h1 class="page-header__title">{title}</h1>
                    {move || description.get().map(|s| view! {
                        <div class="page-header__subtitle">{s}</div>
                    })}
                </div>
                <div class="page-header__actions">
                    {children.map(|c| c())}
                </div>
            </div>
        </div>
    }
}
