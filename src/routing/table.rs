//! Route table builder and path resolution.
//!
//! A table is built once at startup from an ordered list of
//! `(path, name, view)` descriptors, validated, and then shared read-only.
//! Resolution walks the routes in declaration order; the first match wins.

use std::collections::HashSet;
use std::sync::Arc;

use serde::Serialize;

use super::history::WebHistory;
use super::pattern::{PathPattern, RouteParams, split_request_path};
use super::view::ViewRef;
use crate::shared::errors::RouteTableError;
use crate::shared::logging::{log_outside_base, log_resolution, log_route_table_built};

pub const FALLBACK_ROUTE_NAME: &str = "not-found";
pub const FALLBACK_ROUTE_PATH: &str = "/:..path";

/// Input triple for the builder.
#[derive(Debug, Clone)]
pub struct RouteDescriptor {
    pub path: &'static str,
    pub name: &'static str,
    pub view: ViewRef,
}

impl RouteDescriptor {
    pub fn new(path: &'static str, name: &'static str, view: ViewRef) -> Self {
        Self { path, name, view }
    }
}

#[derive(Debug, Clone)]
pub struct RouteRecord {
    pub pattern: PathPattern,
    pub name: &'static str,
    pub view: ViewRef,
}

#[derive(Debug, Clone)]
pub enum Resolution {
    Matched {
        name: &'static str,
        path: String,
        params: RouteParams,
        view: ViewRef,
    },
    /// Nothing matched; the table's catch-all view handles it
    Fallback { path: String, view: ViewRef },
    /// Nothing matched and the table has no catch-all
    NoMatch { path: String },
}

impl Resolution {
    pub fn route_name(&self) -> Option<&'static str> {
        match self {
            Resolution::Matched { name, .. } => Some(*name),
            Resolution::Fallback { .. } => Some(FALLBACK_ROUTE_NAME),
            Resolution::NoMatch { .. } => None,
        }
    }

    pub fn view(&self) -> Option<&ViewRef> {
        match self {
            Resolution::Matched { view, .. } | Resolution::Fallback { view, .. } => Some(view),
            Resolution::NoMatch { .. } => None,
        }
    }

    pub fn view_name(&self) -> Option<&'static str> {
        self.view().map(|view| view.name())
    }

    pub fn path(&self) -> &str {
        match self {
            Resolution::Matched { path, .. }
            | Resolution::Fallback { path, .. }
            | Resolution::NoMatch { path } => path,
        }
    }

    pub fn param(&self, key: &str) -> Option<&str> {
        match self {
            Resolution::Matched { params, .. } => params.get(key).map(String::as_str),
            _ => None,
        }
    }
}

/// Serializable summary of one route, for startup logs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RouteSummary {
    pub name: String,
    pub path: String,
    pub href: String,
    pub view: String,
    pub fallback: bool,
}

pub struct RouteTableBuilder {
    history: WebHistory,
    descriptors: Vec<RouteDescriptor>,
    fallbacks: Vec<ViewRef>,
}

impl RouteTableBuilder {
    pub fn route(mut self, descriptor: RouteDescriptor) -> Self {
        self.descriptors.push(descriptor);
        self
    }

    pub fn routes(mut self, descriptors: impl IntoIterator<Item = RouteDescriptor>) -> Self {
        self.descriptors.extend(descriptors);
        self
    }

    /// Catch-all view for paths no declared route matches.
    pub fn fallback(mut self, view: ViewRef) -> Self {
        self.fallbacks.push(view);
        self
    }

    pub fn build(self) -> Result<RouteTable, RouteTableError> {
        if self.descriptors.is_empty() {
            return Err(RouteTableError::EmptyTable);
        }
        if self.fallbacks.len() > 1 {
            return Err(RouteTableError::DuplicateFallback);
        }

        let mut seen_paths = HashSet::new();
        let mut seen_names = HashSet::new();
        let mut routes = Vec::with_capacity(self.descriptors.len());

        for descriptor in self.descriptors {
            let pattern = PathPattern::parse(descriptor.path)?;

            if descriptor.name.trim().is_empty() {
                return Err(RouteTableError::InvalidPath {
                    path: descriptor.path.to_string(),
                    reason: "route name is empty".to_string(),
                });
            }
            if !seen_paths.insert(pattern.canonical()) {
                return Err(RouteTableError::DuplicatePath(descriptor.path.to_string()));
            }
            if descriptor.name == FALLBACK_ROUTE_NAME || !seen_names.insert(descriptor.name) {
                return Err(RouteTableError::DuplicateName(descriptor.name.to_string()));
            }

            routes.push(RouteRecord {
                pattern,
                name: descriptor.name,
                view: descriptor.view,
            });
        }

        let fallback = match self.fallbacks.into_iter().next() {
            Some(view) => Some(RouteRecord {
                pattern: PathPattern::parse(FALLBACK_ROUTE_PATH)?,
                name: FALLBACK_ROUTE_NAME,
                view,
            }),
            None => None,
        };

        log_route_table_built(routes.len(), fallback.is_some(), self.history.base());

        Ok(RouteTable {
            inner: Arc::new(RouteTableInner {
                history: self.history,
                routes,
                fallback,
            }),
        })
    }
}

struct RouteTableInner {
    history: WebHistory,
    routes: Vec<RouteRecord>,
    fallback: Option<RouteRecord>,
}

/// Immutable, cheaply clonable route table.
#[derive(Clone)]
pub struct RouteTable {
    inner: Arc<RouteTableInner>,
}

impl PartialEq for RouteTable {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }
}

impl std::fmt::Debug for RouteTable {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RouteTable")
            .field("base", &self.inner.history.base())
            .field("routes", &self.names())
            .field("fallback", &self.has_fallback())
            .finish()
    }
}

impl RouteTable {
    pub fn builder(history: WebHistory) -> RouteTableBuilder {
        RouteTableBuilder {
            history,
            descriptors: Vec::new(),
            fallbacks: Vec::new(),
        }
    }

    pub fn history(&self) -> &WebHistory {
        &self.inner.history
    }

    pub fn routes(&self) -> &[RouteRecord] {
        &self.inner.routes
    }

    pub fn names(&self) -> Vec<&'static str> {
        self.inner.routes.iter().map(|route| route.name).collect()
    }

    pub fn has_fallback(&self) -> bool {
        self.inner.fallback.is_some()
    }

    /// Resolve a route path (base already stripped, still percent-encoded).
    pub fn resolve(&self, path: &str) -> Resolution {
        self.resolve_segments(&split_request_path(path))
    }

    /// Resolve segments that are already split and percent-decoded, as the
    /// Dioxus router hands them over. They are matched verbatim; empty ones
    /// (trailing or doubled slashes) are skipped.
    pub fn resolve_segments(&self, segments: &[String]) -> Resolution {
        let segments: Vec<String> = segments
            .iter()
            .filter(|segment| !segment.is_empty())
            .cloned()
            .collect();
        let normalized = format!("/{}", segments.join("/"));

        let resolution = self
            .inner
            .routes
            .iter()
            .find_map(|route| {
                route.pattern.matches(&segments).map(|params| Resolution::Matched {
                    name: route.name,
                    path: normalized.clone(),
                    params,
                    view: route.view.clone(),
                })
            })
            .unwrap_or_else(|| match &self.inner.fallback {
                Some(fallback) => Resolution::Fallback {
                    path: normalized.clone(),
                    view: fallback.view.clone(),
                },
                None => Resolution::NoMatch {
                    path: normalized.clone(),
                },
            });

        log_resolution(&normalized, &resolution);
        resolution
    }

    /// Resolve a full browser location, including the base URL.
    pub fn resolve_location(&self, location: &str) -> Option<Resolution> {
        match self.inner.history.strip_base(location) {
            Some(path) => Some(self.resolve(&path)),
            None => {
                log_outside_base(location, self.inner.history.base());
                None
            }
        }
    }

    fn find(&self, name: &str) -> Result<&RouteRecord, RouteTableError> {
        self.inner
            .routes
            .iter()
            .find(|route| route.name == name)
            .ok_or_else(|| RouteTableError::UnknownRouteName(name.to_string()))
    }

    /// Route path for a route name.
    pub fn path_for(&self, name: &str) -> Result<String, RouteTableError> {
        let route = self.find(name)?;
        if !route.pattern.is_static() {
            return Err(RouteTableError::ParameterizedPath {
                name: name.to_string(),
                path: route.pattern.to_string(),
            });
        }
        Ok(route.pattern.as_str().to_string())
    }

    /// Browser URL (base included) for a route name.
    pub fn href_for(&self, name: &str) -> Result<String, RouteTableError> {
        let path = self.path_for(name)?;
        Ok(self.inner.history.href(&path))
    }

    pub fn manifest(&self) -> Vec<RouteSummary> {
        let history = &self.inner.history;
        let mut summaries: Vec<RouteSummary> = self
            .inner
            .routes
            .iter()
            .map(|route| RouteSummary {
                name: route.name.to_string(),
                path: route.pattern.to_string(),
                href: history.href(route.pattern.as_str()),
                view: route.view.name().to_string(),
                fallback: false,
            })
            .collect();

        if let Some(fallback) = &self.inner.fallback {
            summaries.push(RouteSummary {
                name: fallback.name.to_string(),
                path: fallback.pattern.to_string(),
                href: history.href(fallback.pattern.as_str()),
                view: fallback.view.name().to_string(),
                fallback: true,
            });
        }

        summaries
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AppConfig;
    use crate::routing::view::Renderable;
    use dioxus::prelude::*;

    struct StubView(&'static str);

    impl Renderable for StubView {
        fn name(&self) -> &'static str {
            self.0
        }

        fn render(&self) -> Element {
            rsx! {}
        }
    }

    fn view(name: &'static str) -> ViewRef {
        Arc::new(StubView(name))
    }

    fn two_routes() -> RouteTableBuilder {
        RouteTable::builder(WebHistory::root())
            .route(RouteDescriptor::new("/", "welcome", view("welcome-view")))
            .route(RouteDescriptor::new("/cadastro", "registration", view("registration-view")))
    }

    #[test]
    fn test_resolve_declared_paths() {
        let table = two_routes().build().unwrap();

        let root = table.resolve("/");
        assert_eq!(root.route_name(), Some("welcome"));
        assert_eq!(root.view_name(), Some("welcome-view"));

        let cadastro = table.resolve("/cadastro");
        assert_eq!(cadastro.route_name(), Some("registration"));
        assert_eq!(cadastro.view_name(), Some("registration-view"));
    }

    #[test]
    fn test_resolve_tolerates_trailing_slash_query_and_fragment() {
        let table = two_routes().build().unwrap();
        for path in ["/cadastro/", "/cadastro?step=1", "/cadastro#form", "//cadastro"] {
            let resolution = table.resolve(path);
            assert_eq!(resolution.route_name(), Some("registration"), "path {}", path);
            assert_eq!(resolution.path(), "/cadastro");
        }
    }

    #[test]
    fn test_unknown_path_without_fallback_is_no_match() {
        // Documents the gap of a table with no catch-all: nothing renders.
        let table = two_routes().build().unwrap();
        let resolution = table.resolve("/unknown");
        assert!(matches!(resolution, Resolution::NoMatch { ref path } if path == "/unknown"));
        assert!(resolution.view().is_none());
        assert_eq!(resolution.route_name(), None);
    }

    #[test]
    fn test_unknown_path_with_fallback() {
        let table = two_routes().fallback(view("not-found-view")).build().unwrap();
        let resolution = table.resolve("/unknown/deep");
        assert!(matches!(resolution, Resolution::Fallback { .. }));
        assert_eq!(resolution.route_name(), Some(FALLBACK_ROUTE_NAME));
        assert_eq!(resolution.view_name(), Some("not-found-view"));
        assert_eq!(resolution.path(), "/unknown/deep");

        // Declared routes still take precedence over the catch-all
        assert_eq!(table.resolve("/").route_name(), Some("welcome"));
    }

    #[test]
    fn test_name_path_roundtrip() {
        let table = two_routes().build().unwrap();
        for name in ["welcome", "registration"] {
            let path = table.path_for(name).unwrap();
            assert_eq!(table.resolve(&path).route_name(), Some(name));
        }
        assert_eq!(table.path_for("welcome").unwrap(), "/");
        assert_eq!(table.path_for("registration").unwrap(), "/cadastro");
    }

    #[test]
    fn test_decoded_segments_are_not_decoded_again() {
        let table = two_routes().fallback(view("not-found-view")).build().unwrap();

        // `/%2563adastro` in the address bar decodes once to `%63adastro`
        let resolution = table.resolve_segments(&["%63adastro".to_string()]);
        assert_eq!(resolution.route_name(), Some(FALLBACK_ROUTE_NAME));
        assert_eq!(resolution.path(), "/%63adastro");

        // a decoded `%2F` stays inside its segment
        let resolution = table.resolve_segments(&["x/cadastro".to_string()]);
        assert_eq!(resolution.route_name(), Some(FALLBACK_ROUTE_NAME));

        let resolution = table.resolve_segments(&["cadastro".to_string()]);
        assert_eq!(resolution.route_name(), Some("registration"));
        let trailing = table.resolve_segments(&["cadastro".to_string(), String::new()]);
        assert_eq!(trailing.route_name(), Some("registration"));
        assert_eq!(table.resolve_segments(&[]).route_name(), Some("welcome"));
    }

    #[test]
    fn test_path_for_unknown_name() {
        let table = two_routes().build().unwrap();
        assert_eq!(
            table.path_for("cadastro"),
            Err(RouteTableError::UnknownRouteName("cadastro".to_string()))
        );
    }

    #[test]
    fn test_path_for_parameterized_route() {
        let table = RouteTable::builder(WebHistory::root())
            .route(RouteDescriptor::new("/users/:id", "user", view("user-view")))
            .build()
            .unwrap();
        assert!(matches!(
            table.path_for("user"),
            Err(RouteTableError::ParameterizedPath { .. })
        ));
        assert_eq!(table.resolve("/users/7").param("id"), Some("7"));
    }

    #[test]
    fn test_duplicate_name_rejected() {
        let result = two_routes()
            .route(RouteDescriptor::new("/other", "welcome", view("other")))
            .build();
        assert_eq!(
            result.unwrap_err(),
            RouteTableError::DuplicateName("welcome".to_string())
        );
    }

    #[test]
    fn test_duplicate_path_rejected() {
        let result = two_routes()
            .route(RouteDescriptor::new("/cadastro", "signup", view("other")))
            .build();
        assert_eq!(
            result.unwrap_err(),
            RouteTableError::DuplicatePath("/cadastro".to_string())
        );

        let result = RouteTable::builder(WebHistory::root())
            .route(RouteDescriptor::new("/u/:id", "a", view("a")))
            .route(RouteDescriptor::new("/u/:uid", "b", view("b")))
            .build();
        assert!(matches!(result, Err(RouteTableError::DuplicatePath(_))));
    }

    #[test]
    fn test_reserved_fallback_name_rejected() {
        let result = two_routes()
            .route(RouteDescriptor::new("/404", FALLBACK_ROUTE_NAME, view("x")))
            .build();
        assert!(matches!(result, Err(RouteTableError::DuplicateName(_))));
    }

    #[test]
    fn test_invalid_configuration_rejected() {
        assert_eq!(
            RouteTable::builder(WebHistory::root()).build().unwrap_err(),
            RouteTableError::EmptyTable
        );

        let result = two_routes()
            .route(RouteDescriptor::new("cadastro", "bad", view("x")))
            .build();
        assert!(matches!(result, Err(RouteTableError::InvalidPath { .. })));

        let result = two_routes()
            .fallback(view("a"))
            .fallback(view("b"))
            .build();
        assert_eq!(result.unwrap_err(), RouteTableError::DuplicateFallback);
    }

    #[test]
    fn test_first_match_wins() {
        let table = RouteTable::builder(WebHistory::root())
            .route(RouteDescriptor::new("/cadastro", "static", view("static-view")))
            .route(RouteDescriptor::new("/:page", "dynamic", view("dynamic-view")))
            .build()
            .unwrap();
        assert_eq!(table.resolve("/cadastro").route_name(), Some("static"));
        assert_eq!(table.resolve("/outra").route_name(), Some("dynamic"));
    }

    #[test]
    fn test_resolve_location_strips_base() {
        let config = AppConfig::new("/app").unwrap();
        let table = RouteTable::builder(WebHistory::new(&config))
            .route(RouteDescriptor::new("/", "welcome", view("welcome-view")))
            .route(RouteDescriptor::new("/cadastro", "registration", view("registration-view")))
            .build()
            .unwrap();

        let resolution = table.resolve_location("/app/cadastro").unwrap();
        assert_eq!(resolution.route_name(), Some("registration"));
        assert_eq!(
            table.resolve_location("/app").unwrap().route_name(),
            Some("welcome")
        );
        assert!(table.resolve_location("/cadastro").is_none());

        assert_eq!(table.href_for("registration").unwrap(), "/app/cadastro");
    }

    #[test]
    fn test_manifest_lists_routes_in_order() {
        let table = two_routes().fallback(view("not-found-view")).build().unwrap();
        let manifest = table.manifest();
        let names: Vec<&str> = manifest.iter().map(|route| route.name.as_str()).collect();
        assert_eq!(names, vec!["welcome", "registration", FALLBACK_ROUTE_NAME]);
        assert!(manifest[2].fallback);

        let json = serde_json::to_value(&manifest).unwrap();
        assert_eq!(json[1]["path"], "/cadastro");
        assert_eq!(json[1]["view"], "registration-view");
    }

    #[test]
    fn test_clones_share_the_same_table() {
        let table = two_routes().build().unwrap();
        let clone = table.clone();
        assert_eq!(table, clone);
        assert_ne!(table, two_routes().build().unwrap());
        assert_eq!(table.names(), vec!["welcome", "registration"]);
    }
}
