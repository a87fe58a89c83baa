use dioxus::prelude::*;

use crate::app::components::{Button, Card};
use crate::app::navigation::go_to;
use crate::app::routes::{REGISTRATION_ROUTE, WELCOME_ROUTE};
use crate::routing::{Renderable, RouteTable};

pub struct WelcomeView;

impl Renderable for WelcomeView {
    fn name(&self) -> &'static str {
        "welcome"
    }

    fn render(&self) -> Element {
        rsx! { WelcomePage {} }
    }
}

#[component]
pub fn WelcomePage() -> Element {
    let table = use_context::<RouteTable>();
    let navigator = use_navigator();

    rsx! {
        section { class: "c-welcome",
            h1 { class: "c-welcome__title", "Bem-vindo!" }
            Card {
                p { "Faça seu cadastro conversando com o nosso assistente. Leva menos de um minuto." }
                Button {
                    onclick: move |_| {
                        go_to(&navigator, &table, WELCOME_ROUTE, REGISTRATION_ROUTE);
                    },
                    "Começar cadastro"
                }
            }
        }
    }
}
