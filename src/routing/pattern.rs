//! Path templates with named parameter segments.
//!
//! # Responsibilities
//! - Compile a template like `/read/:bookId/:chapterId` into segments
//! - Match concrete paths and extract parameter values
//!
//! # Design Decisions
//! - Matching is case-sensitive and segment-exact (no prefixes)
//! - Query string and fragment are ignored when matching
//! - A single trailing slash is tolerated (`/rank/` matches `/rank`)
//! - Parameter names within one template must be unique

use std::collections::HashMap;

use thiserror::Error;

/// One segment of a compiled pattern.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Segment {
    /// Must equal the path segment exactly.
    Static(String),
    /// Captures the path segment under this name.
    Param(String),
}

/// Errors from compiling a path template.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PatternError {
    #[error("pattern '{0}' must start with '/'")]
    NotAbsolute(String),

    #[error("pattern '{0}' has an empty parameter name")]
    EmptyParamName(String),

    #[error("pattern '{pattern}' declares parameter ':{name}' more than once")]
    DuplicateParam { pattern: String, name: String },
}

/// A compiled path template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoutePattern {
    raw: String,
    segments: Vec<Segment>,
}

impl RoutePattern {
    /// Compile a template. Segments starting with `:` become named
    /// parameters; everything else matches literally.
    pub fn parse(pattern: &str) -> Result<Self, PatternError> {
        if !pattern.starts_with('/') {
            return Err(PatternError::NotAbsolute(pattern.to_string()));
        }

        let mut segments = Vec::new();
        for part in pattern.split('/').filter(|s| !s.is_empty()) {
            match part.strip_prefix(':') {
                Some("") => {
                    return Err(PatternError::EmptyParamName(pattern.to_string()));
                }
                Some(name) => {
                    let duplicate = segments
                        .iter()
                        .any(|s| matches!(s, Segment::Param(n) if n == name));
                    if duplicate {
                        return Err(PatternError::DuplicateParam {
                            pattern: pattern.to_string(),
                            name: name.to_string(),
                        });
                    }
                    segments.push(Segment::Param(name.to_string()));
                }
                None => segments.push(Segment::Static(part.to_string())),
            }
        }

        Ok(Self {
            raw: pattern.to_string(),
            segments,
        })
    }

    /// The template as written.
    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// Match a concrete path, extracting named parameters.
    ///
    /// Returns `None` if the path does not match. The map is empty for
    /// parameterless patterns.
    pub fn matches(&self, path: &str) -> Option<HashMap<String, String>> {
        let path = match path.find(['?', '#']) {
            Some(i) => &path[..i],
            None => path,
        };
        if !path.starts_with('/') {
            return None;
        }

        // Exactly one trailing slash is tolerated; empty segments from
        // doubled slashes are not.
        let path = if path.len() > 1 {
            path.strip_suffix('/').unwrap_or(path)
        } else {
            path
        };

        let rest = &path[1..];
        let parts: Vec<&str> = if rest.is_empty() {
            Vec::new()
        } else {
            rest.split('/').collect()
        };
        if parts.len() != self.segments.len() {
            return None;
        }

        let mut params = HashMap::new();
        for (segment, part) in self.segments.iter().zip(&parts) {
            if part.is_empty() {
                return None;
            }
            match segment {
                Segment::Static(expected) => {
                    if expected.as_str() != *part {
                        return None;
                    }
                }
                Segment::Param(name) => {
                    params.insert(name.clone(), (*part).to_string());
                }
            }
        }
        Some(params)
    }
}
