use leptos::prelude::*;

/// Colour of a status pill.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BadgeTone {
    Success,
    Warning,
    Error,
    Info,
    Neutral,
}

impl BadgeTone {
    pub fn class(&self) -> &'static str {
        match self {
            BadgeTone::Success => "badge badge--success",
            BadgeTone::Warning => "badge badge--warning",
            BadgeTone::Error => "badge badge--error",
            BadgeTone::Info => "badge badge--info",
            BadgeTone::Neutral => "badge badge--neutral",
        }
    }
}

/// Status pill for table cells
pub fn badge(tone: BadgeTone, text: impl Into<String>) -> AnyView {
    view! { <span class=tone.class()>{text.into()}</span> }.into_any()
}
