use axum::{
    extract::State,
    response::{IntoResponse, Redirect, Response},
    routing::post,
    Router,
};
use axum_extra::extract::cookie::{Cookie, CookieJar};
use career_services::{AccessToken, SESSION_COOKIE};
use tracing::warn;

use crate::middleware::auth::AppState;

pub fn routes(_state: AppState) -> Router<AppState> {
    Router::new().route("/session/logout", post(handle_logout))
}

/// Revokes the provider session if there is one and always clears the
/// cookie, then sends the visitor home.
async fn handle_logout(State(state): State<AppState>, jar: CookieJar) -> Response {
    let token = jar
        .get(SESSION_COOKIE)
        .and_then(|c| AccessToken::parse(c.value()));

    if let Some(token) = token {
        if let Err(e) = state.auth_provider.sign_out(&token).await {
            warn!("auth provider sign-out failed: {e}");
        }
    }

    let jar = jar.remove(Cookie::build(SESSION_COOKIE).path("/"));
    (jar, Redirect::to("/")).into_response()
}
