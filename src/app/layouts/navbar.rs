use dioxus::prelude::*;

use crate::app::components::RouteLink;
use crate::app::routes::{REGISTRATION_ROUTE, WELCOME_ROUTE};

/// Global navbar: logo back to the welcome screen, link to the registration chat
#[component]
pub fn Navbar() -> Element {
    rsx! {
        nav { class: "c-navbar",
            RouteLink { name: WELCOME_ROUTE.to_string(), class: "c-navbar__logo".to_string(),
                "💬 Cadastro"
            }
            div { class: "c-navbar__links",
                RouteLink { name: WELCOME_ROUTE.to_string(), class: "c-navbar__link".to_string(), "Início" }
                RouteLink { name: REGISTRATION_ROUTE.to_string(), class: "c-navbar__link".to_string(), "Cadastrar" }
            }
        }
    }
}
