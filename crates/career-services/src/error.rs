use career_types::Failure;
use thiserror::Error;

/// Failure of a backend or auth-provider call.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ApiError {
    #[error("unauthorized")]
    Unauthorized,

    #[error("not found: {0}")]
    NotFound(String),

    #[error("backend returned {status}: {message}")]
    Status { status: u16, message: String },

    #[error("network error: {0}")]
    Network(String),

    #[error("unexpected response body: {0}")]
    Decode(String),
}

/// A backend or auth-provider client that cannot be built from its settings.
#[derive(Debug, Error)]
pub enum ClientConfigError {
    #[error("invalid {service} url {url:?}: {reason}")]
    InvalidUrl {
        service: &'static str,
        url: String,
        reason: String,
    },

    #[error("{service} url {url} cannot carry a path")]
    NotABase { service: &'static str, url: String },

    #[error("failed to build http client: {0}")]
    Client(#[from] reqwest::Error),
}

impl ClientConfigError {
    pub(crate) fn invalid_url(service: &'static str, url: &str, reason: impl ToString) -> Self {
        ClientConfigError::InvalidUrl {
            service,
            url: url.to_string(),
            reason: reason.to_string(),
        }
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            ApiError::Decode(err.to_string())
        } else {
            ApiError::Network(err.to_string())
        }
    }
}

impl From<ApiError> for Failure {
    fn from(err: ApiError) -> Self {
        match err {
            ApiError::Unauthorized => Failure::Unauthorized,
            ApiError::NotFound(_) => Failure::NotFound,
            ApiError::Status { status, message } => Failure::Backend { status, message },
            ApiError::Network(message) | ApiError::Decode(message) => Failure::Network(message),
        }
    }
}
