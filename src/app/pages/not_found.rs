use dioxus::prelude::*;

use crate::app::components::{Button, ButtonVariant, Card};
use crate::app::navigation::go_to;
use crate::app::routes::{Route, WELCOME_ROUTE};
use crate::routing::{FALLBACK_ROUTE_NAME, Renderable, RouteTable};

pub struct NotFoundView;

impl Renderable for NotFoundView {
    fn name(&self) -> &'static str {
        "not-found"
    }

    fn render(&self) -> Element {
        rsx! { NotFoundPage {} }
    }
}

#[component]
pub fn NotFoundPage() -> Element {
    let route = use_route::<Route>();
    let table = use_context::<RouteTable>();
    let navigator = use_navigator();

    rsx! {
        section { class: "c-not-found",
            Card { title: "Página não encontrada".to_string(),
                p { "Não existe nada em " code { "{route}" } "." }
                Button {
                    variant: ButtonVariant::Secondary,
                    onclick: move |_| {
                        go_to(&navigator, &table, FALLBACK_ROUTE_NAME, WELCOME_ROUTE);
                    },
                    "Voltar ao início"
                }
            }
        }
    }
}
