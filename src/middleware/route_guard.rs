use axum::{
    extract::Request,
    http::{header, HeaderMap},
    middleware::Next,
    response::{IntoResponse, Redirect, Response},
};
use serde::Serialize;

/// Name of the cookie whose presence marks an authenticated visitor
pub const SESSION_COOKIE: &str = "session";

/// Where unauthenticated visitors are sent from protected pages
pub const LOGIN_PATH: &str = "/login";

/// Where authenticated visitors are sent from login/signup pages
pub const DASHBOARD_PATH: &str = "/dashboard";

/// This path and everything below it belong to the serving layer itself and
/// are never guarded
pub const INTERNAL_PREFIX: &str = "/_internal";

/// Classification of a request path
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RouteClass {
    /// Requires a session
    Protected,
    /// Only meant for visitors without a session
    Auth,
    /// Matches no rule
    Public,
}

/// A single `{prefix, class}` entry of the route table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RouteRule {
    pub prefix: &'static str,
    pub class: RouteClass,
}

impl RouteRule {
    pub const fn new(prefix: &'static str, class: RouteClass) -> Self {
        Self { prefix, class }
    }

    fn matches(&self, path: &str) -> bool {
        path.starts_with(self.prefix)
    }
}

const REFERENCE_RULES: &[RouteRule] = &[
    RouteRule::new("/dashboard", RouteClass::Protected),
    RouteRule::new("/api/protected", RouteClass::Protected),
    RouteRule::new("/login", RouteClass::Auth),
    RouteRule::new("/signup", RouteClass::Auth),
];

/// Ordered rule table. Matching is a plain case-sensitive prefix comparison
/// and the first matching rule wins.
#[derive(Debug, Clone, Copy)]
pub struct RouteTable {
    rules: &'static [RouteRule],
}

impl RouteTable {
    pub const fn new(rules: &'static [RouteRule]) -> Self {
        Self { rules }
    }

    /// Protected: `/dashboard`, `/api/protected`. Auth: `/login`, `/signup`.
    pub const fn reference() -> Self {
        Self::new(REFERENCE_RULES)
    }

    pub fn classify(&self, path: &str) -> RouteClass {
        self.rules
            .iter()
            .find(|rule| rule.matches(path))
            .map(|rule| rule.class)
            .unwrap_or(RouteClass::Public)
    }
}

impl Default for RouteTable {
    fn default() -> Self {
        Self::reference()
    }
}

/// Outcome of guarding a single request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "action", content = "location", rename_all = "snake_case")]
pub enum GuardDecision {
    Continue,
    Redirect(&'static str),
}

/// Session-presence route guard over a [`RouteTable`]
#[derive(Debug, Clone, Copy, Default)]
pub struct RouteGuard {
    table: RouteTable,
}

impl RouteGuard {
    pub const fn new(table: RouteTable) -> Self {
        Self { table }
    }

    /// Static assets (a `.` in the last segment) and internal paths are skipped
    /// entirely. `/_internalfoo` is not internal.
    pub fn is_excluded(path: &str) -> bool {
        if let Some(rest) = path.strip_prefix(INTERNAL_PREFIX) {
            if rest.is_empty() || rest.starts_with('/') {
                return true;
            }
        }
        path.rsplit('/').next().is_some_and(|segment| segment.contains('.'))
    }

    /// Route class of the path, or `None` when the path is excluded
    pub fn classify(&self, path: &str) -> Option<RouteClass> {
        if Self::is_excluded(path) {
            None
        } else {
            Some(self.table.classify(path))
        }
    }

    pub fn decide(&self, path: &str, session_present: bool) -> GuardDecision {
        match (self.classify(path), session_present) {
            (Some(RouteClass::Protected), false) => GuardDecision::Redirect(LOGIN_PATH),
            (Some(RouteClass::Auth), true) => GuardDecision::Redirect(DASHBOARD_PATH),
            _ => GuardDecision::Continue,
        }
    }
}

/// True when a non-empty `session` cookie is carried by the request.
/// Unreadable cookie headers count as absent.
pub fn session_present(headers: &HeaderMap) -> bool {
    headers
        .get_all(header::COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .flat_map(|cookies| cookies.split(';'))
        .filter_map(|pair| pair.trim().split_once('='))
        .any(|(name, value)| name.trim() == SESSION_COOKIE && !value.trim().is_empty())
}

/// Redirects between protected and auth pages based on session presence.
/// Only the presence flag is logged, never the cookie itself.
pub async fn route_guard_middleware(request: Request, next: Next) -> Response {
    let guard = RouteGuard::new(RouteTable::reference());
    let path = request.uri().path();
    let has_session = session_present(request.headers());

    match guard.decide(path, has_session) {
        GuardDecision::Redirect(location) => {
            tracing::debug!(path, session_present = has_session, location, "route guard redirect");
            Redirect::temporary(location).into_response()
        }
        GuardDecision::Continue => next.run(request).await,
    }
}
