use career_types::Failure;
use leptos::prelude::ServerFnError;

/// Reduces a server function error to the failure a view reacts to.
pub fn to_failure(err: ServerFnError<Failure>) -> Failure {
    match err {
        ServerFnError::WrappedServerError(failure) => failure,
        other => Failure::Network(other.to_string()),
    }
}

/// Server-side plumbing shared by every server function.
#[cfg(feature = "ssr")]
pub mod ssr {
    use career_services::{ApiError, AuthProvider, Backend, Gateway, RequestSession};
    use career_types::Failure;
    use leptos::prelude::{use_context, ServerFnError};

    /// Session of the request currently being served.
    pub fn request_session() -> RequestSession {
        use_context::<http::request::Parts>()
            .map(|parts| RequestSession::from_headers(&parts.headers))
            .unwrap_or_default()
    }

    /// Gateway authenticated as the current request's session.
    pub fn gateway() -> Result<Gateway, ServerFnError<Failure>> {
        let backend = use_context::<Backend>()
            .ok_or_else(|| ServerFnError::ServerError("backend context unavailable".into()))?;
        Ok(backend.gateway(request_session()))
    }

    pub fn auth_provider() -> Result<AuthProvider, ServerFnError<Failure>> {
        use_context::<AuthProvider>()
            .ok_or_else(|| ServerFnError::ServerError("auth context unavailable".into()))
    }

    pub fn reject(err: ApiError) -> ServerFnError<Failure> {
        match &err {
            ApiError::Unauthorized | ApiError::NotFound(_) => {
                tracing::debug!("backend call rejected: {err}")
            }
            _ => tracing::warn!("backend call failed: {err}"),
        }
        ServerFnError::WrappedServerError(err.into())
    }
}

/// Sign-in page that expired or missing sessions are sent to.
pub const AUTH_PAGE: &str = "/auth";

/// Full page load of the sign-in page, so the server sees the cleared session.
#[cfg(feature = "hydrate")]
pub fn redirect_to_sign_in() {
    if let Err(e) = leptos::prelude::window().location().set_href(AUTH_PAGE) {
        leptos::logging::error!("redirect to {AUTH_PAGE} failed: {e:?}");
    }
}

/// Surfaces a failure from a user action: expired sessions go to sign-in,
/// everything else becomes a toast.
#[cfg(feature = "hydrate")]
pub fn report(failure: &Failure, toasts: crate::components::toast::ToastContext) {
    if failure.is_unauthorized() {
        redirect_to_sign_in();
    }
    toasts.failure(failure);
}
