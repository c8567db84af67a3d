use std::fmt;

use http::{header, HeaderMap};

/// Cookie that carries the auth provider's access token between requests.
pub const SESSION_COOKIE: &str = "session_token";

/// Bearer credential issued by the auth provider.
#[derive(Clone, PartialEq, Eq)]
pub struct AccessToken(String);

impl AccessToken {
    /// Returns `None` for values a half-initialised client may leave behind
    /// (`""`, `"null"`, `"undefined"`).
    pub fn parse(raw: &str) -> Option<Self> {
        let trimmed = raw.trim();
        match trimmed {
            "" | "null" | "undefined" => None,
            _ => Some(Self(trimmed.to_string())),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for AccessToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("AccessToken(..)")
    }
}

/// Source of the current access token. Never fails: an unresolved session
/// is simply absent.
pub trait SessionTokenProvider: Send + Sync {
    fn current_access_token(&self) -> Option<AccessToken>;
}

impl SessionTokenProvider for Option<AccessToken> {
    fn current_access_token(&self) -> Option<AccessToken> {
        self.clone()
    }
}

/// Session resolved from one incoming request's cookies.
#[derive(Clone, Debug, Default)]
pub struct RequestSession {
    token: Option<AccessToken>,
}

impl RequestSession {
    pub fn from_headers(headers: &HeaderMap) -> Self {
        let token = headers
            .get_all(header::COOKIE)
            .iter()
            .filter_map(|v| v.to_str().ok())
            .find_map(|cookieHeader| extract_cookie_value(cookieHeader, SESSION_COOKIE))
            .and_then(|raw| AccessToken::parse(&raw));
        Self { token }
    }

    pub fn is_signed_in(&self) -> bool {
        self.token.is_some()
    }
}

impl SessionTokenProvider for RequestSession {
    fn current_access_token(&self) -> Option<AccessToken> {
        self.token.clone()
    }
}

/// `Set-Cookie` value storing `token` as the session cookie.
pub fn session_cookie(token: &AccessToken, maxAgeSecs: u64) -> String {
    format!(
        "{SESSION_COOKIE}={}; HttpOnly; Secure; SameSite=Strict; Path=/; Max-Age={maxAgeSecs}",
        token.as_str()
    )
}

pub fn extract_cookie_value(cookieHeader: &str, name: &str) -> Option<String> {
    let prefix = format!("{name}=");
    cookieHeader
        .split(';')
        .map(str::trim)
        .find_map(|part| part.strip_prefix(&prefix))
        .map(str::to_string)
}
