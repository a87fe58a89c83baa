//! Browser history mode (`/cadastro`, not `/#/cadastro`) under a base URL.

use crate::config::AppConfig;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WebHistory {
    // empty when mounted at the root
    prefix: String,
}

impl WebHistory {
    pub fn new(config: &AppConfig) -> Self {
        let prefix = if config.is_root() {
            String::new()
        } else {
            config.base_url.clone()
        };
        Self { prefix }
    }

    pub fn root() -> Self {
        Self {
            prefix: String::new(),
        }
    }

    pub fn base(&self) -> &str {
        if self.prefix.is_empty() { "/" } else { &self.prefix }
    }

    /// Route path for a full browser location, or `None` when the location
    /// is not under the base. Query and fragment are kept.
    pub fn strip_base(&self, location: &str) -> Option<String> {
        let rest = location.strip_prefix(self.prefix.as_str())?;

        if rest.is_empty() {
            return Some("/".to_string());
        }
        match rest.chars().next() {
            Some('/') => Some(rest.to_string()),
            Some('?') | Some('#') => Some(format!("/{}", rest)),
            // `/app` must not match `/application`
            _ => None,
        }
    }

    /// Browser URL for a route path.
    pub fn href(&self, path: &str) -> String {
        if path.starts_with('/') {
            format!("{}{}", self.prefix, path)
        } else {
            format!("{}/{}", self.prefix, path)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn history(base: &str) -> WebHistory {
        WebHistory::new(&AppConfig::new(base).unwrap())
    }

    #[test]
    fn test_root_history() {
        let history = WebHistory::root();
        assert_eq!(history.base(), "/");
        assert_eq!(history.strip_base("/cadastro").as_deref(), Some("/cadastro"));
        assert_eq!(history.strip_base("").as_deref(), Some("/"));
        assert_eq!(history.href("/cadastro"), "/cadastro");
        assert_eq!(history, self::history("/"));
    }

    #[test]
    fn test_strip_base_with_prefix() {
        let history = history("/app/");
        assert_eq!(history.base(), "/app");
        assert_eq!(history.strip_base("/app").as_deref(), Some("/"));
        assert_eq!(history.strip_base("/app/").as_deref(), Some("/"));
        assert_eq!(history.strip_base("/app/cadastro").as_deref(), Some("/cadastro"));
        assert_eq!(history.strip_base("/app?x=1").as_deref(), Some("/?x=1"));
    }

    #[test]
    fn test_strip_base_rejects_outside_locations() {
        let history = history("/app");
        assert_eq!(history.strip_base("/cadastro"), None);
        assert_eq!(history.strip_base("/application"), None);
        assert_eq!(history.strip_base("/"), None);
    }

    #[test]
    fn test_href_with_prefix() {
        let history = history("https://example.com/app");
        assert_eq!(history.href("/"), "/app/");
        assert_eq!(history.href("/cadastro"), "/app/cadastro");
        assert_eq!(history.href("cadastro"), "/app/cadastro");
    }
}
