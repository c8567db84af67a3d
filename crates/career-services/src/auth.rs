use std::time::Duration;

use reqwest::{Client, StatusCode, Url};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::error::{ApiError, ClientConfigError};
use crate::session::AccessToken;

/// Client for a Supabase-compatible auth provider (`/auth/v1`).
#[derive(Clone, Debug)]
pub struct AuthProvider {
    client: Client,
    base_url: Url,
    publishable_key: String,
}

/// Session handed out by the provider after a password sign-in.
#[derive(Clone, Debug, Deserialize)]
pub struct AuthSession {
    pub access_token: String,
    #[serde(default)]
    pub refresh_token: Option<String>,
    #[serde(default)]
    pub expires_in: Option<u64>,
    #[serde(default)]
    pub user: Option<AuthUser>,
}

#[derive(Clone, Debug, Deserialize)]
pub struct AuthUser {
    pub id: String,
    #[serde(default)]
    pub email: Option<String>,
}

#[derive(Serialize)]
struct Credentials<'a> {
    email: &'a str,
    password: &'a str,
}

#[derive(Deserialize)]
struct ProviderError {
    #[serde(default, alias = "error_description", alias = "msg")]
    message: Option<String>,
}

impl AuthProvider {
    pub fn new(
        baseUrl: &str,
        publishableKey: &str,
        timeout: Duration,
    ) -> Result<Self, ClientConfigError> {
        let base_url = Url::parse(baseUrl)
            .map_err(|e| ClientConfigError::invalid_url("auth provider", baseUrl, e))?;
        if base_url.cannot_be_a_base() {
            return Err(ClientConfigError::NotABase {
                service: "auth provider",
                url: baseUrl.to_string(),
            });
        }
        if publishableKey.is_empty() {
            warn!("auth provider publishable key is empty; sign-in will be rejected");
        }
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            base_url,
            publishable_key: publishableKey.to_string(),
        })
    }

    pub async fn sign_in_with_password(
        &self,
        email: &str,
        password: &str,
    ) -> Result<AuthSession, ApiError> {
        let url = self.endpoint(&["auth", "v1", "token"])?;
        let response = self
            .client
            .post(url)
            .query(&[("grant_type", "password")])
            .header("apikey", &self.publishable_key)
            .json(&Credentials { email, password })
            .send()
            .await?;

        let session: AuthSession = read(response).await?;
        let who = session
            .user
            .as_ref()
            .and_then(|u| u.email.as_deref())
            .unwrap_or(email);
        info!("signed in {who}");
        Ok(session)
    }

    /// Registers an account. Depending on the provider's settings the user
    /// may have to confirm their email before signing in.
    pub async fn sign_up(&self, email: &str, password: &str) -> Result<(), ApiError> {
        let url = self.endpoint(&["auth", "v1", "signup"])?;
        let response = self
            .client
            .post(url)
            .header("apikey", &self.publishable_key)
            .json(&Credentials { email, password })
            .send()
            .await?;

        read::<serde_json::Value>(response).await?;
        Ok(())
    }

    /// Revokes the session server-side. Callers clear their cookie regardless.
    pub async fn sign_out(&self, token: &AccessToken) -> Result<(), ApiError> {
        let url = self.endpoint(&["auth", "v1", "logout"])?;
        let response = self
            .client
            .post(url)
            .header("apikey", &self.publishable_key)
            .bearer_auth(token.as_str())
            .send()
            .await?;

        if response.status().is_success() {
            Ok(())
        } else {
            Err(provider_error(response).await)
        }
    }

    fn endpoint(&self, path: &[&str]) -> Result<Url, ApiError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| ApiError::Network("auth provider url cannot carry a path".into()))?
            .pop_if_empty()
            .extend(path);
        Ok(url)
    }
}

async fn read<T: serde::de::DeserializeOwned>(response: reqwest::Response) -> Result<T, ApiError> {
    if !response.status().is_success() {
        return Err(provider_error(response).await);
    }
    response
        .json::<T>()
        .await
        .map_err(|e| ApiError::Decode(e.to_string()))
}

async fn provider_error(response: reqwest::Response) -> ApiError {
    let status = response.status();
    let body = response.text().await.unwrap_or_default();
    let message = serde_json::from_str::<ProviderError>(&body)
        .ok()
        .and_then(|e| e.message)
        .unwrap_or(body);

    if status == StatusCode::UNAUTHORIZED {
        return ApiError::Unauthorized;
    }
    ApiError::Status {
        status: status.as_u16(),
        message,
    }
}
