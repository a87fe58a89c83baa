use dioxus::prelude::*;

#[component]
pub fn Card(title: Option<String>, children: Element) -> Element {
    rsx! {
        div {
            class: "c-card",
            if let Some(title) = title {
                h2 {
                    class: "c-card__title",
                    "{title}"
                }
            }
            div {
                class: "c-card__body",
                {children}
            }
        }
    }
}
