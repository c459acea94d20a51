use crate::shared::components::table::format_number_int;
use crate::shared::icons::icon;
use leptos::prelude::*;

/// Count tile on the dashboard. `None` shows a dash while loading.
#[component]
pub fn StatCard(
    /// Label displayed above the value
    label: &'static str,
    /// Icon name from the icon() helper
    icon_name: &'static str,
    #[prop(into)]
    value: Signal<Option<usize>>,
    /// Optional subtitle below the value
    #[prop(into, optional)]
    subtitle: Signal<Option<String>>,
) -> impl IntoView {
    let formatted = move || match value.get() {
        Some(v) => format_number_int(v as f64),
        None => "-".to_string(),
    };

    let subtitle_view = move || {
        subtitle.get().map(|s| {
            view! { <div class="stat-card__subtitle">{s}</div> }
        })
    };

    view! {
        <div class="stat-card">
            <div class="stat-card__icon">
                {icon(icon_name)}
            </div>
            <div class="stat-card__content">
                <div class="stat-card__label">{label}</div>
                <div class="stat-card__value">{formatted}</div>
                {subtitle_view}
            </div>
        </div>
    }
}
