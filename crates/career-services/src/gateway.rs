use std::sync::Arc;
use std::time::Duration;

use reqwest::{Client, Method, RequestBuilder, Response, StatusCode, Url};
use serde::{de::DeserializeOwned, Serialize};
use tracing::{debug, warn};

use crate::error::{ApiError, ClientConfigError};
use crate::session::SessionTokenProvider;

/// Connection settings for the backend REST API, shared by every request.
#[derive(Clone, Debug)]
pub struct Backend {
    client: Client,
    base_url: Url,
}

impl Backend {
    pub fn new(baseUrl: &str, timeout: Duration) -> Result<Self, ClientConfigError> {
        let base_url = Url::parse(baseUrl)
            .map_err(|e| ClientConfigError::invalid_url("backend", baseUrl, e))?;
        if base_url.cannot_be_a_base() {
            return Err(ClientConfigError::NotABase {
                service: "backend",
                url: baseUrl.to_string(),
            });
        }
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self { client, base_url })
    }

    /// A gateway that authenticates as whoever `session` resolves to.
    pub fn gateway(&self, session: impl SessionTokenProvider + 'static) -> Gateway {
        Gateway {
            backend: self.clone(),
            session: Arc::new(session),
        }
    }
}

/// The one HTTP client every backend call goes through.
///
/// Attaches `Authorization: Bearer <token>` when the session resolves a token
/// at call time and leaves the header off otherwise. Never retries.
#[derive(Clone)]
pub struct Gateway {
    backend: Backend,
    session: Arc<dyn SessionTokenProvider>,
}

impl Gateway {
    pub async fn get<T: DeserializeOwned>(
        &self,
        path: &[&str],
        query: &[(&str, String)],
    ) -> Result<T, ApiError> {
        let request = self.request(Method::GET, path)?.query(query);
        decode(self.dispatch(request).await?).await
    }

    pub async fn post<B, T>(&self, path: &[&str], body: &B) -> Result<T, ApiError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let request = self.request(Method::POST, path)?.json(body);
        decode(self.dispatch(request).await?).await
    }

    pub async fn patch<B, T>(
        &self,
        path: &[&str],
        body: Option<&B>,
        query: &[(&str, String)],
    ) -> Result<T, ApiError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let mut request = self.request(Method::PATCH, path)?.query(query);
        if let Some(body) = body {
            request = request.json(body);
        }
        decode(self.dispatch(request).await?).await
    }

    pub async fn delete(&self, path: &[&str]) -> Result<(), ApiError> {
        let request = self.request(Method::DELETE, path)?;
        self.dispatch(request).await?;
        Ok(())
    }

    fn url(&self, path: &[&str]) -> Result<Url, ApiError> {
        let mut url = self.backend.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| ApiError::Network("backend url cannot carry a path".into()))?
            .pop_if_empty()
            .extend(path);
        Ok(url)
    }

    fn request(&self, method: Method, path: &[&str]) -> Result<RequestBuilder, ApiError> {
        let url = self.url(path)?;
        let token = self.session.current_access_token();
        debug!(
            "{method} {} (authenticated: {})",
            url.path(),
            token.is_some()
        );

        let mut request = self.backend.client.request(method, url);
        if let Some(token) = token {
            request = request.bearer_auth(token.as_str());
        }
        Ok(request)
    }

    async fn dispatch(&self, request: RequestBuilder) -> Result<Response, ApiError> {
        let response = request.send().await?;
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let path = response.url().path().to_string();
        let message = response.text().await.unwrap_or_default();
        match status {
            StatusCode::UNAUTHORIZED => {
                warn!("backend rejected credentials for {path}");
                Err(ApiError::Unauthorized)
            }
            StatusCode::NOT_FOUND => Err(ApiError::NotFound(message)),
            _ => {
                debug!("backend returned {status} for {path}");
                Err(ApiError::Status {
                    status: status.as_u16(),
                    message,
                })
            }
        }
    }
}

async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    response
        .json::<T>()
        .await
        .map_err(|e| ApiError::Decode(e.to_string()))
}
