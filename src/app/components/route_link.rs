use dioxus::prelude::*;

use crate::app::navigation::route_for;
use crate::routing::RouteTable;

/// `Link` addressed by route name instead of path.
#[component]
pub fn RouteLink(name: String, class: Option<String>, children: Element) -> Element {
    let table = use_context::<RouteTable>();
    let class = class.unwrap_or_default();

    match route_for(&table, &name) {
        Ok(route) => rsx! {
            Link { to: route, class: "{class}", {children} }
        },
        Err(e) => {
            tracing::error!(route = %name, error = %e, "Cannot link to route");
            rsx! {
                span { class: "{class}", {children} }
            }
        }
    }
}
