use leptos::prelude::*;

/// Red warning box shown above a table when its data failed to load.
#[component]
pub fn ErrorBanner(#[prop(into)] error: Signal<Option<String>>) -> impl IntoView {
    move || {
        error.get().map(|e| {
            view! {
                <div class="warning-box warning-box--error" role="alert">
                    <span class="warning-box__icon">"⚠"</span>
                    <span class="warning-box__text">{e}</span>
                </div>
            }
        })
    }
}
