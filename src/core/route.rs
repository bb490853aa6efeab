use crate::utils::error::{FunctionError, Result};
use std::fmt;

/// Directory the hosting platform scans for HTTP functions.
pub const API_DIR: &str = "api";

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Route {
    segments: Vec<String>,
}

impl Route {
    pub fn is_dynamic(&self) -> bool {
        self.segments.iter().any(|s| is_dynamic_segment(s))
    }

    /// Matches a request path, treating `[name]` segments as wildcards.
    pub fn matches(&self, request_path: &str) -> bool {
        let requested = split_request_path(request_path);
        requested.len() == self.segments.len()
            && self
                .segments
                .iter()
                .zip(requested.iter())
                .all(|(pattern, actual)| is_dynamic_segment(pattern) || pattern == actual)
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "/{}", self.segments.join("/"))
    }
}

/// Derives the platform route for a function source file,
/// e.g. `api/generate-content.js` becomes `/api/generate-content`.
pub fn route_for_path(source_path: &str) -> Result<Route> {
    let route_error = |reason: &str| FunctionError::RouteError {
        path: source_path.to_string(),
        reason: reason.to_string(),
    };

    let normalized = source_path.replace('\\', "/");
    let trimmed = normalized
        .strip_prefix("./")
        .unwrap_or(&normalized)
        .trim_start_matches('/');

    let mut segments: Vec<String> = trimmed.split('/').map(str::to_string).collect();

    if segments.first().map(String::as_str) != Some(API_DIR) {
        return Err(route_error("function sources must live under the api/ directory"));
    }
    if segments.len() < 2 {
        return Err(route_error("path names the api/ directory, not a function file"));
    }

    if let Some(last) = segments.last_mut() {
        if let Some((stem, _ext)) = last.rsplit_once('.') {
            if stem.is_empty() {
                return Err(route_error("function file name has an empty stem"));
            }
            *last = stem.to_string();
        }
    }

    if segments.last().map(String::as_str) == Some("index") {
        segments.pop();
    }

    for segment in &segments {
        if segment.is_empty() {
            return Err(route_error("path contains an empty segment"));
        }
        if segment.chars().all(|c| c == '.') {
            return Err(route_error("path contains a relative '.' or '..' segment"));
        }
        if !is_dynamic_segment(segment) && !segment.chars().all(is_route_char) {
            return Err(route_error(&format!(
                "segment '{}' contains characters not allowed in a route",
                segment
            )));
        }
    }

    Ok(Route { segments })
}

fn is_route_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '-' || c == '_' || c == '.'
}

fn is_dynamic_segment(segment: &str) -> bool {
    segment.len() > 2
        && segment.starts_with('[')
        && segment.ends_with(']')
        && segment[1..segment.len() - 1].chars().all(is_route_char)
}

fn split_request_path(request_path: &str) -> Vec<&str> {
    let path = request_path
        .split_once('?')
        .map(|(p, _)| p)
        .unwrap_or(request_path);
    path.split('/').filter(|s| !s.is_empty()).collect()
}
