//! Navigation by route name.

use std::fmt::Debug;

use dioxus::router::Navigator;

use super::routes::Route;
use crate::routing::RouteTable;
use crate::shared::errors::RouteTableError;
use crate::shared::logging::{log_navigation, log_navigation_failure};

/// Typed router target for a route name.
pub fn route_for(table: &RouteTable, name: &str) -> Result<Route, RouteTableError> {
    let path = table.path_for(name)?;
    path.parse::<Route>()
        .map_err(|e| RouteTableError::InvalidPath {
            reason: e.to_string(),
            path,
        })
}

/// Push the named route onto the browser history. Returns whether the
/// router accepted the navigation.
pub fn go_to(navigator: &Navigator, table: &RouteTable, from: &str, name: &str) -> bool {
    log_navigation(from, name);
    match route_for(table, name) {
        Ok(route) => push_succeeded(name, navigator.push(route)),
        Err(e) => {
            log_navigation_failure(name, &e.to_string());
            false
        }
    }
}

fn push_succeeded<F: Debug>(name: &str, failure: Option<F>) -> bool {
    match failure {
        Some(failure) => {
            log_navigation_failure(name, &format!("{:?}", failure));
            false
        }
        None => true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::routes::{REGISTRATION_ROUTE, WELCOME_ROUTE, app_routes};
    use crate::config::AppConfig;

    #[test]
    fn test_route_for_known_names() {
        let table = app_routes(&AppConfig::default()).unwrap();
        assert_eq!(route_for(&table, WELCOME_ROUTE).unwrap(), Route::Root {});
        assert_eq!(
            route_for(&table, REGISTRATION_ROUTE).unwrap(),
            Route::Page {
                segments: vec!["cadastro".to_string()]
            }
        );
    }

    #[test]
    fn test_route_for_unknown_name() {
        let table = app_routes(&AppConfig::default()).unwrap();
        assert_eq!(
            route_for(&table, "perfil"),
            Err(RouteTableError::UnknownRouteName("perfil".to_string()))
        );
    }

    #[test]
    fn test_push_failure_is_reported() {
        assert!(push_succeeded(REGISTRATION_ROUTE, None::<String>));
        assert!(!push_succeeded(
            REGISTRATION_ROUTE,
            Some("external navigation blocked".to_string())
        ));
    }
}
