//! URL path patterns: `/`, `/cadastro`, `/users/:id`, `/:..rest`.

use std::collections::BTreeMap;
use std::fmt;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::shared::errors::RouteTableError;

static STATIC_SEGMENT_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z0-9._~!$&'()*+,;=@%-]+$").expect("valid static segment regex")
});

static PARAM_NAME_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z_][A-Za-z0-9_]*$").expect("valid param name regex"));

pub type RouteParams = BTreeMap<String, String>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    Static(String),
    Param(String),
    /// Matches the remaining segments, possibly none. Only valid last.
    CatchAll(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathPattern {
    raw: String,
    segments: Vec<Segment>,
}

fn invalid(path: &str, reason: impl Into<String>) -> RouteTableError {
    RouteTableError::InvalidPath {
        path: path.to_string(),
        reason: reason.into(),
    }
}

impl PathPattern {
    pub fn parse(raw: &str) -> Result<Self, RouteTableError> {
        if !raw.starts_with('/') {
            return Err(invalid(raw, "must start with '/'"));
        }
        if raw.contains(['?', '#']) {
            return Err(invalid(raw, "query strings and fragments are not allowed"));
        }
        if raw == "/" {
            return Ok(Self {
                raw: raw.to_string(),
                segments: Vec::new(),
            });
        }

        let parts: Vec<&str> = raw[1..].split('/').collect();
        let mut segments = Vec::with_capacity(parts.len());
        let mut param_names: Vec<String> = Vec::new();

        for (index, part) in parts.iter().enumerate() {
            if part.is_empty() {
                return Err(invalid(raw, "empty segment"));
            }

            let segment = if let Some(name) = part.strip_prefix(":..") {
                if index != parts.len() - 1 {
                    return Err(invalid(raw, "catch-all segment must be last"));
                }
                Segment::CatchAll(name.to_string())
            } else if let Some(name) = part.strip_prefix(':') {
                Segment::Param(name.to_string())
            } else {
                if !STATIC_SEGMENT_RE.is_match(part) {
                    return Err(invalid(raw, format!("invalid characters in segment '{}'", part)));
                }
                Segment::Static(part.to_string())
            };

            if let Segment::Param(name) | Segment::CatchAll(name) = &segment {
                if !PARAM_NAME_RE.is_match(name) {
                    return Err(invalid(raw, format!("invalid parameter name '{}'", name)));
                }
                if param_names.contains(name) {
                    return Err(invalid(raw, format!("duplicate parameter '{}'", name)));
                }
                param_names.push(name.clone());
            }

            segments.push(segment);
        }

        Ok(Self {
            raw: raw.to_string(),
            segments,
        })
    }

    pub fn as_str(&self) -> &str {
        &self.raw
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    pub fn is_static(&self) -> bool {
        self.segments
            .iter()
            .all(|segment| matches!(segment, Segment::Static(_)))
    }

    /// Shape of the pattern with parameter names erased, so `/u/:id` and
    /// `/u/:uid` compare equal.
    pub fn canonical(&self) -> String {
        if self.segments.is_empty() {
            return "/".to_string();
        }
        self.segments
            .iter()
            .map(|segment| match segment {
                Segment::Static(value) => format!("/{}", value),
                Segment::Param(_) => "/:".to_string(),
                Segment::CatchAll(_) => "/:..".to_string(),
            })
            .collect()
    }

    /// Match already-split, decoded request segments.
    pub fn matches(&self, request: &[String]) -> Option<RouteParams> {
        let mut params = RouteParams::new();

        for (index, segment) in self.segments.iter().enumerate() {
            match segment {
                Segment::CatchAll(name) => {
                    let rest = request.get(index..).unwrap_or_default().join("/");
                    params.insert(name.clone(), rest);
                    return Some(params);
                }
                Segment::Static(expected) => {
                    if request.get(index) != Some(expected) {
                        return None;
                    }
                }
                Segment::Param(name) => {
                    let value = request.get(index)?;
                    params.insert(name.clone(), value.clone());
                }
            }
        }

        (request.len() == self.segments.len()).then_some(params)
    }
}

impl fmt::Display for PathPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

/// Split a requested path into decoded segments. Query string and fragment
/// are dropped, empty segments (duplicate or trailing slashes) are ignored.
pub fn split_request_path(path: &str) -> Vec<String> {
    let end = path.find(['?', '#']).unwrap_or(path.len());
    path[..end]
        .split('/')
        .filter(|segment| !segment.is_empty())
        .map(|segment| match urlencoding::decode(segment) {
            Ok(decoded) => decoded.into_owned(),
            Err(_) => segment.to_string(),
        })
        .collect()
}
