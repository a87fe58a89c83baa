//! Application configuration.
//!
//! The only setting is the base URL the app is mounted under. It comes from
//! the build environment (`BASE_URL` at compile time) and, on native
//! targets, can be overridden by the `BASE_URL` runtime variable.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::shared::errors::ConfigError;
use crate::shared::logging::{log_config_error, log_config_loaded};

pub const DEFAULT_BASE_URL: &str = "/";
pub const BASE_URL_ENV: &str = "BASE_URL";

const BUILD_BASE_URL: Option<&str> = option_env!("BASE_URL");

// scheme://host prefix of an absolute deploy URL
static ORIGIN_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z][A-Za-z0-9+.-]*://[^/]*").expect("valid origin regex"));

static BASE_PATH_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(/[A-Za-z0-9._~!$&'()*+,;=:@%-]+)*$").expect("valid base path regex")
});

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Normalized: leading slash, no trailing slash, `/` for the root
    pub base_url: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }
}

impl AppConfig {
    pub fn new(base_url: &str) -> Result<Self, ConfigError> {
        Ok(Self {
            base_url: normalize_base_url(base_url)?,
        })
    }

    /// Load from the environment, logging and falling back to the default
    /// base when the configured value is invalid.
    pub fn from_env() -> Self {
        #[cfg(not(target_arch = "wasm32"))]
        let runtime = std::env::var(BASE_URL_ENV).ok();
        #[cfg(target_arch = "wasm32")]
        let runtime: Option<String> = None;

        Self::from_sources(runtime.as_deref(), BUILD_BASE_URL)
    }

    fn from_sources(runtime: Option<&str>, build: Option<&str>) -> Self {
        let (raw, source) = match (runtime, build) {
            (Some(value), _) => (value, "runtime_env"),
            (None, Some(value)) => (value, "build_env"),
            (None, None) => (DEFAULT_BASE_URL, "default"),
        };

        match Self::new(raw) {
            Ok(config) => {
                log_config_loaded(&config.base_url, source);
                config
            }
            Err(e) => {
                log_config_error(raw, &e.to_string());
                Self::default()
            }
        }
    }

    pub fn is_root(&self) -> bool {
        self.base_url == DEFAULT_BASE_URL
    }
}

/// Normalize a base URL the way browser-history routers do: drop any
/// `scheme://host` origin, force a leading slash, drop trailing slashes.
pub fn normalize_base_url(raw: &str) -> Result<String, ConfigError> {
    let trimmed = raw.trim();
    let without_origin = ORIGIN_RE.replace(trimmed, "");
    // `./app` and `.` are relative to the document root
    let path = match &*without_origin {
        "." => "",
        other => other.strip_prefix("./").unwrap_or(other),
    };

    if path.contains(['?', '#']) {
        return Err(ConfigError::InvalidBaseUrl {
            value: raw.to_string(),
            reason: "query strings and fragments are not allowed".to_string(),
        });
    }

    let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();
    if segments.iter().any(|s| *s == "." || *s == "..") {
        return Err(ConfigError::InvalidBaseUrl {
            value: raw.to_string(),
            reason: "dot segments are not allowed".to_string(),
        });
    }
    if segments.is_empty() {
        return Ok(DEFAULT_BASE_URL.to_string());
    }

    let normalized = format!("/{}", segments.join("/"));
    if !BASE_PATH_RE.is_match(&normalized) {
        return Err(ConfigError::InvalidBaseUrl {
            value: raw.to_string(),
            reason: "contains characters that are not valid in a URL path".to_string(),
        });
    }

    Ok(normalized)
}
