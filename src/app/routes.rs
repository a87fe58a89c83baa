use std::sync::Arc;

use dioxus::prelude::*;

use crate::app::components::{EmptyView, ErrorMessage};
use crate::app::layouts::Navbar;
use crate::app::pages::{NotFoundView, RegistrationChatView, WelcomeView};
use crate::config::AppConfig;
use crate::routing::{Resolution, RouteDescriptor, RouteTable, WebHistory};
use crate::shared::errors::{Result, RouteTableError};
use crate::shared::logging::{log_outside_base, log_route_manifest, log_route_table_error};

pub const WELCOME_ROUTE: &str = "welcome";
pub const REGISTRATION_ROUTE: &str = "registration";

/// The application's route table: welcome, registration chat, and a
/// not-found catch-all.
pub fn app_routes(config: &AppConfig) -> std::result::Result<RouteTable, RouteTableError> {
    RouteTable::builder(WebHistory::new(config))
        .route(RouteDescriptor::new("/", WELCOME_ROUTE, Arc::new(WelcomeView)))
        .route(RouteDescriptor::new(
            "/cadastro",
            REGISTRATION_ROUTE,
            Arc::new(RegistrationChatView),
        ))
        .fallback(Arc::new(NotFoundView))
        .build()
}

pub fn route_manifest_json(table: &RouteTable) -> Result<String> {
    Ok(serde_json::to_string(&table.manifest())?)
}

/// Build the application table and log its manifest.
pub fn load_app_routes(config: &AppConfig) -> Result<RouteTable> {
    let table = app_routes(config)?;
    log_route_manifest(&route_manifest_json(&table)?);
    Ok(table)
}

// The Dioxus router owns browser history (rooted at the configured base in
// main.rs); every location is handed to the route table for resolution.
#[derive(Clone, Routable, Debug, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Layout)]
    #[route("/")]
    Root {},

    #[route("/:..segments")]
    Page { segments: Vec<String> },
}

#[component]
pub fn App() -> Element {
    let config = try_use_context::<AppConfig>().unwrap_or_else(AppConfig::from_env);

    let routes = use_hook(move || {
        load_app_routes(&config).map_err(|e| {
            log_route_table_error(&e.to_string());
            e.to_string()
        })
    });

    match routes {
        Ok(table) => rsx! { RoutedApp { table } },
        Err(e) => rsx! {
            ErrorMessage { message: format!("Falha ao iniciar a aplicação: {}", e) }
        },
    }
}

/// Route the router parses for a full browser location, or `None` when the
/// location is outside the base URL.
pub fn route_from_location(table: &RouteTable, location: &str) -> Option<Route> {
    table.history().strip_base(location)?.parse::<Route>().ok()
}

/// Resolution for a route the router has already parsed. Catch-all
/// segments arrive percent-decoded and are matched as-is.
pub fn resolve_route(table: &RouteTable, route: &Route) -> Resolution {
    match route {
        Route::Root {} => table.resolve_segments(&[]),
        Route::Page { segments } => table.resolve_segments(segments),
    }
}

fn location_under_base(table: &RouteTable, location: Option<&str>) -> bool {
    match location {
        Some(location) if route_from_location(table, location).is_none() => {
            log_outside_base(location, table.history().base());
            false
        }
        _ => true,
    }
}

fn current_location() -> Option<String> {
    #[cfg(target_arch = "wasm32")]
    {
        web_sys::window().and_then(|window| window.location().pathname().ok())
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        None
    }
}

#[component]
fn RoutedApp(table: RouteTable) -> Element {
    let table = use_context_provider(|| table);
    let under_base = use_hook(|| location_under_base(&table, current_location().as_deref()));

    // The router would push the base onto any outside location
    if !under_base {
        let base = table.history().base().to_string();
        return rsx! {
            ErrorMessage { message: format!("Esta aplicação está publicada em {}", base) }
        };
    }

    rsx! {
        Router::<Route> {}
    }
}

#[component]
fn Layout() -> Element {
    const BUNDLE_CSS: Asset = asset!("/assets/dist/bundle.css");

    rsx! {
        document::Link {
            rel: "stylesheet",
            href: BUNDLE_CSS
        },
        div { class: "c-layout",
            Navbar {}
            main { class: "c-layout__main",
                Outlet::<Route> {}
            }
        }
    }
}

#[component]
fn Root() -> Element {
    rsx! {
        ResolvedView { route: Route::Root {} }
    }
}

#[component]
fn Page(segments: Vec<String>) -> Element {
    rsx! {
        ResolvedView { route: Route::Page { segments } }
    }
}

/// Mounts whatever view the route table resolves `route` to.
#[component]
fn ResolvedView(route: Route) -> Element {
    let table = use_context::<RouteTable>();
    let resolution = resolve_route(&table, &route);

    match resolution.view() {
        Some(view) => view.render(),
        None => rsx! { EmptyView {} },
    }
}
