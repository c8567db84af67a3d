use axum::{
    body::Body,
    http::Request,
    middleware::Next,
    response::{IntoResponse, Redirect, Response},
};
use career_services::{AuthProvider, RequestSession};
use tracing::debug;

/// Where unauthenticated visitors of a protected page are sent.
pub const AUTH_PAGE: &str = "/auth";

#[derive(Clone)]
pub struct AppState {
    pub auth_provider: AuthProvider,
}

/// Whether a client route needs a signed-in recruiter: `/dashboard`,
/// `/page-builder/{slug}` and `/{slug}/manage-jobs`.
pub fn is_protected(path: &str) -> bool {
    let segments: Vec<&str> = path
        .trim_matches('/')
        .split('/')
        .filter(|s| !s.is_empty())
        .collect();

    matches!(
        segments.as_slice(),
        ["dashboard"] | ["page-builder", _] | [_, "manage-jobs"]
    )
}

/// Middleware for page routes: redirects protected pages to `/auth` unless
/// the request carries a session cookie.
pub async fn require_page_auth(request: Request<Body>, next: Next) -> Response {
    let path = request.uri().path();

    if !is_protected(path) {
        return next.run(request).await;
    }

    let session = RequestSession::from_headers(request.headers());
    if !session.is_signed_in() {
        debug!("no session for {path}, redirecting to {AUTH_PAGE}");
        return Redirect::to(AUTH_PAGE).into_response();
    }

    next.run(request).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn protected_routes() {
        assert!(is_protected("/dashboard"));
        assert!(is_protected("/dashboard/"));
        assert!(is_protected("/page-builder/acme"));
        assert!(is_protected("/acme/manage-jobs"));
    }

    #[test]
    fn public_routes() {
        assert!(!is_protected("/"));
        assert!(!is_protected("/auth"));
        assert!(!is_protected("/page-builder"));
        assert!(!is_protected("/acme/careers"));
        assert!(!is_protected("/acme/jobs/4"));
        assert!(!is_protected("/pkg/career-console.js"));
        assert!(!is_protected("/api/get_company"));
    }
}
