//! The route table: URL path → page identifier.
//!
//! # Responsibilities
//! - Hold the ordered, compiled route entries
//! - Resolve a path to a page plus extracted parameters
//! - Return an explicit no-match for unregistered paths
//!
//! # Design Decisions
//! - Immutable after construction (shared without locks)
//! - Linear scan in registration order, first match wins
//! - Duplicate path patterns rejected at construction

use std::collections::HashMap;
use std::fmt;

use thiserror::Error;

use crate::routing::pattern::{PatternError, RoutePattern};

/// Identifier of a page component. The components themselves live
/// outside this crate; the table only names them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Page {
    Home,
    BookDetail,
    Read,
    Category,
    Rank,
    Search,
    History,
    Failures,
    Datasource,
}

impl Page {
    /// Stable name, as used in route registration and logs.
    pub fn name(self) -> &'static str {
        match self {
            Page::Home => "Home",
            Page::BookDetail => "BookDetail",
            Page::Read => "Read",
            Page::Category => "Category",
            Page::Rank => "Rank",
            Page::Search => "Search",
            Page::History => "History",
            Page::Failures => "Failures",
            Page::Datasource => "Datasource",
        }
    }
}

impl fmt::Display for Page {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// When a page's implementation is fetched.
///
/// Purely a load-time policy; resolution results are identical either
/// way. Only the landing page is eager.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadPolicy {
    /// Loaded at startup.
    Eager,
    /// Loaded on first navigation to the route.
    Deferred,
}

/// One registered route entry.
#[derive(Debug, Clone)]
pub struct Route {
    pattern: RoutePattern,
    page: Page,
    load: LoadPolicy,
}

impl Route {
    pub fn new(pattern: &str, page: Page, load: LoadPolicy) -> Result<Self, PatternError> {
        Ok(Self {
            pattern: RoutePattern::parse(pattern)?,
            page,
            load,
        })
    }

    pub fn pattern(&self) -> &RoutePattern {
        &self.pattern
    }

    pub fn page(&self) -> Page {
        self.page
    }

    pub fn load_policy(&self) -> LoadPolicy {
        self.load
    }
}

/// A successful resolution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteMatch {
    pub page: Page,
    pub params: HashMap<String, String>,
    pub load: LoadPolicy,
}

impl RouteMatch {
    /// Convenience accessor for one extracted parameter.
    pub fn param(&self, name: &str) -> Option<&str> {
        self.params.get(name).map(String::as_str)
    }
}

/// Errors from building a route table.
#[derive(Debug, Error)]
pub enum RouteTableError {
    #[error(transparent)]
    Pattern(#[from] PatternError),

    #[error("duplicate route pattern '{0}'")]
    DuplicatePattern(String),
}

/// The ordered, immutable table of registered routes.
#[derive(Debug, Clone)]
pub struct RouteTable {
    routes: Vec<Route>,
}

impl RouteTable {
    /// Build a table, rejecting duplicate path patterns.
    pub fn new(routes: Vec<Route>) -> Result<Self, RouteTableError> {
        for (i, route) in routes.iter().enumerate() {
            let raw = route.pattern().raw();
            if routes[..i].iter().any(|r| r.pattern().raw() == raw) {
                return Err(RouteTableError::DuplicatePattern(raw.to_string()));
            }
        }
        Ok(Self { routes })
    }

    /// The platform's route registration, in precedence order.
    pub fn standard() -> Result<Self, RouteTableError> {
        Self::new(vec![
            Route::new("/", Page::Home, LoadPolicy::Eager)?,
            Route::new("/book/:id", Page::BookDetail, LoadPolicy::Deferred)?,
            Route::new("/read/:bookId/:chapterId", Page::Read, LoadPolicy::Deferred)?,
            Route::new("/category/:id", Page::Category, LoadPolicy::Deferred)?,
            Route::new("/rank", Page::Rank, LoadPolicy::Deferred)?,
            Route::new("/search", Page::Search, LoadPolicy::Deferred)?,
            Route::new("/history", Page::History, LoadPolicy::Deferred)?,
            Route::new("/admin/failures", Page::Failures, LoadPolicy::Deferred)?,
            Route::new("/admin/datasource", Page::Datasource, LoadPolicy::Deferred)?,
        ])
    }

    /// Resolve a path against the table.
    ///
    /// `None` is the platform-default not-found outcome, not an error.
    pub fn resolve(&self, path: &str) -> Option<RouteMatch> {
        if !path.starts_with('/') {
            return None;
        }
        for route in &self.routes {
            if let Some(params) = route.pattern().matches(path) {
                return Some(RouteMatch {
                    page: route.page(),
                    params,
                    load: route.load_policy(),
                });
            }
        }
        None
    }

    /// The registered routes, in precedence order.
    pub fn routes(&self) -> &[Route] {
        &self.routes
    }
}
