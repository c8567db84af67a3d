use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Failure reported to a view. Travels across the server-function boundary,
/// so `Display` and `FromStr` round-trip.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum Failure {
    /// Missing or expired credential; the view should send the user to `/auth`.
    Unauthorized,
    NotFound,
    /// Rejected before reaching the network.
    Validation(String),
    Backend { status: u16, message: String },
    /// The request never produced a usable response.
    Network(String),
}

const UNAUTHORIZED: &str = "unauthorized";
const NOT_FOUND: &str = "not found";
const VALIDATION_PREFIX: &str = "invalid input: ";
const BACKEND_PREFIX: &str = "backend error ";
const NETWORK_PREFIX: &str = "network failure: ";

impl Failure {
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, Failure::Unauthorized)
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Failure::NotFound)
    }

    /// Short text suitable for a toast or inline notice.
    pub fn user_message(&self) -> String {
        match self {
            Failure::Unauthorized => "Your session has expired. Please sign in again.".into(),
            Failure::NotFound => "Not found.".into(),
            Failure::Validation(message) => message.clone(),
            Failure::Backend { .. } | Failure::Network(_) => {
                "Something went wrong. Please try again.".into()
            }
        }
    }
}

impl fmt::Display for Failure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Failure::Unauthorized => f.write_str(UNAUTHORIZED),
            Failure::NotFound => f.write_str(NOT_FOUND),
            Failure::Validation(message) => write!(f, "{VALIDATION_PREFIX}{message}"),
            Failure::Backend { status, message } => {
                write!(f, "{BACKEND_PREFIX}{status}: {message}")
            }
            Failure::Network(message) => write!(f, "{NETWORK_PREFIX}{message}"),
        }
    }
}

impl FromStr for Failure {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == UNAUTHORIZED {
            return Ok(Failure::Unauthorized);
        }
        if s == NOT_FOUND {
            return Ok(Failure::NotFound);
        }
        if let Some(message) = s.strip_prefix(VALIDATION_PREFIX) {
            return Ok(Failure::Validation(message.to_string()));
        }
        if let Some(rest) = s.strip_prefix(BACKEND_PREFIX) {
            if let Some((status, message)) = rest.split_once(": ") {
                if let Ok(status) = status.parse::<u16>() {
                    return Ok(Failure::Backend {
                        status,
                        message: message.to_string(),
                    });
                }
            }
        }
        if let Some(message) = s.strip_prefix(NETWORK_PREFIX) {
            return Ok(Failure::Network(message.to_string()));
        }
        Ok(Failure::Network(s.to_string()))
    }
}

impl std::error::Error for Failure {}

impl From<crate::job::ValidationFailure> for Failure {
    fn from(err: crate::job::ValidationFailure) -> Self {
        Failure::Validation(err.to_string())
    }
}
