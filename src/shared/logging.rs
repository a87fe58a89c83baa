//! Structured logging for the route table and navigation.
//!
//! Every event carries an `operation` field so logs can be filtered by
//! stage (config load, table build, resolution).

use crate::routing::Resolution;

#[derive(Debug, Clone, Copy)]
pub enum LogOperation {
    ConfigLoad,
    RouteTableBuild,
    Resolution,
    Navigation,
}

impl LogOperation {
    pub fn as_str(&self) -> &'static str {
        match self {
            LogOperation::ConfigLoad => "config_load",
            LogOperation::RouteTableBuild => "route_table_build",
            LogOperation::Resolution => "resolution",
            LogOperation::Navigation => "navigation",
        }
    }
}

pub fn log_config_loaded(base_url: &str, source: &str) {
    tracing::info!(
        operation = LogOperation::ConfigLoad.as_str(),
        base_url = base_url,
        source = source,
        "Configuration loaded"
    );
}

pub fn log_config_error(value: &str, error: &str) {
    tracing::error!(
        operation = LogOperation::ConfigLoad.as_str(),
        value = value,
        error = error,
        "Invalid configuration, falling back to defaults"
    );
}

pub fn log_route_table_built(route_count: usize, has_fallback: bool, base: &str) {
    tracing::info!(
        operation = LogOperation::RouteTableBuild.as_str(),
        route_count = route_count,
        has_fallback = has_fallback,
        base = base,
        "Route table built"
    );
}

/// Dumps the table as JSON at debug level
pub fn log_route_manifest(manifest: &str) {
    tracing::debug!(
        operation = LogOperation::RouteTableBuild.as_str(),
        manifest = manifest,
        "Route manifest"
    );
}

pub fn log_route_table_error(error: &str) {
    tracing::error!(
        operation = LogOperation::RouteTableBuild.as_str(),
        error = error,
        "Failed to build route table"
    );
}

pub fn log_resolution(path: &str, resolution: &Resolution) {
    match resolution {
        Resolution::Matched { name, view, .. } => {
            tracing::debug!(
                operation = LogOperation::Resolution.as_str(),
                path = path,
                route = *name,
                view = view.name(),
                "Path resolved"
            );
        }
        Resolution::Fallback { view, .. } => {
            tracing::info!(
                operation = LogOperation::Resolution.as_str(),
                path = path,
                view = view.name(),
                "No route matched, rendering fallback"
            );
        }
        Resolution::NoMatch { .. } => {
            tracing::warn!(
                operation = LogOperation::Resolution.as_str(),
                path = path,
                "No route matched and no fallback declared"
            );
        }
    }
}

pub fn log_outside_base(location: &str, base: &str) {
    tracing::warn!(
        operation = LogOperation::Navigation.as_str(),
        location = location,
        base = base,
        "Location is outside the application base URL"
    );
}

pub fn log_navigation(from: &str, to_name: &str) {
    tracing::debug!(
        operation = LogOperation::Navigation.as_str(),
        from = from,
        to = to_name,
        "Navigating by route name"
    );
}

pub fn log_navigation_failure(to_name: &str, error: &str) {
    tracing::error!(
        operation = LogOperation::Navigation.as_str(),
        to = to_name,
        error = error,
        "Navigation by route name failed"
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_operation_as_str() {
        assert_eq!(LogOperation::ConfigLoad.as_str(), "config_load");
        assert_eq!(LogOperation::RouteTableBuild.as_str(), "route_table_build");
        assert_eq!(LogOperation::Resolution.as_str(), "resolution");
        assert_eq!(LogOperation::Navigation.as_str(), "navigation");
    }
}
