//! Route classification.
//!
//! # Responsibilities
//! - Decide, once per request, what kind of handling it gets
//! - Strip the API prefix for proxied requests
//!
//! # Design Decisions
//! - Immutable after construction (thread-safe without locks)
//! - Closed enum of outcomes, matched exhaustively by the server
//! - Pre-flight wins over every other rule

use axum::http::Method;

use crate::routing::matcher::PathPrefixMatcher;

/// What the server does with a request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RouteKind {
    /// CORS pre-flight: empty 200, upstream untouched.
    Preflight,
    /// Forward to the upstream at `upstream_path` (prefix removed).
    Proxy { upstream_path: String },
    /// Hand the unchanged path to the static file resolver.
    Static,
    /// Reject with 405.
    MethodNotAllowed,
}

/// Classifies inbound requests by method and path.
#[derive(Debug, Clone)]
pub struct RequestRouter {
    api: PathPrefixMatcher,
}

impl RequestRouter {
    pub fn new(api_prefix: impl Into<String>) -> Self {
        Self {
            api: PathPrefixMatcher::new(api_prefix),
        }
    }

    /// Classify a request. `path` is the URL path without the query string.
    pub fn classify(&self, method: &Method, path: &str) -> RouteKind {
        if method == Method::OPTIONS {
            return RouteKind::Preflight;
        }

        if let Some(rest) = self.api.strip(path) {
            return match *method {
                Method::GET | Method::POST => RouteKind::Proxy {
                    upstream_path: rest.to_string(),
                },
                _ => RouteKind::MethodNotAllowed,
            };
        }

        match *method {
            Method::GET | Method::HEAD => RouteKind::Static,
            _ => RouteKind::MethodNotAllowed,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn router() -> RequestRouter {
        RequestRouter::new("/api/")
    }

    #[test]
    fn api_paths_are_proxied_with_prefix_removed() {
        assert_eq!(
            router().classify(&Method::GET, "/api/v1/models"),
            RouteKind::Proxy {
                upstream_path: "v1/models".into()
            }
        );
        assert_eq!(
            router().classify(&Method::POST, "/api/v1/chat/completions"),
            RouteKind::Proxy {
                upstream_path: "v1/chat/completions".into()
            }
        );
    }

    #[test]
    fn non_api_get_is_static() {
        for path in ["/", "/index.html", "/api", "/assets/api/x.js", "/script.js"] {
            assert_eq!(router().classify(&Method::GET, path), RouteKind::Static, "{path}");
        }
        assert_eq!(router().classify(&Method::HEAD, "/index.html"), RouteKind::Static);
    }

    #[test]
    fn options_is_preflight_everywhere() {
        for path in ["/api/v1/models", "/index.html", "/nope"] {
            assert_eq!(router().classify(&Method::OPTIONS, path), RouteKind::Preflight);
        }
    }

    #[test]
    fn other_methods_are_rejected() {
        assert_eq!(
            router().classify(&Method::POST, "/index.html"),
            RouteKind::MethodNotAllowed
        );
        assert_eq!(
            router().classify(&Method::DELETE, "/index.html"),
            RouteKind::MethodNotAllowed
        );
        assert_eq!(
            router().classify(&Method::PUT, "/api/v1/models"),
            RouteKind::MethodNotAllowed
        );
        assert_eq!(
            router().classify(&Method::HEAD, "/api/v1/models"),
            RouteKind::MethodNotAllowed
        );
    }

    #[test]
    fn custom_prefix() {
        let router = RequestRouter::new("/llm/");
        assert_eq!(
            router.classify(&Method::GET, "/llm/v1/models"),
            RouteKind::Proxy {
                upstream_path: "v1/models".into()
            }
        );
        assert_eq!(router.classify(&Method::GET, "/api/v1/models"), RouteKind::Static);
    }
}
