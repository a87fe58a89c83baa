use dioxus::prelude::*;

// Reusable Error Message Component (BEM: c-error)
#[component]
pub fn ErrorMessage(message: String) -> Element {
    rsx! {
        div { class: "c-error", role: "alert",
            span { class: "c-error__icon", "❌" }
            p { class: "c-error__text", "{message}" }
        }
    }
}

// Rendered when a path resolves to nothing and no fallback view exists
#[component]
pub fn EmptyView() -> Element {
    rsx! {
        div { class: "c-empty" }
    }
}
