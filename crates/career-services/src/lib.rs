#![allow(non_snake_case)]

pub mod auth;
pub mod company;
pub mod error;
pub mod gateway;
pub mod jobs;
pub mod session;

pub use auth::{AuthProvider, AuthSession};
pub use company::CompanyService;
pub use error::{ApiError, ClientConfigError};
pub use gateway::{Backend, Gateway};
pub use jobs::JobsService;
pub use session::{
    session_cookie, AccessToken, RequestSession, SessionTokenProvider, SESSION_COOKIE,
};
