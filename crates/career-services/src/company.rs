use career_types::{Company, CompanyCreate, CompanyUpdate};

use crate::error::ApiError;
use crate::gateway::Gateway;

/// Company routes of the backend.
pub struct CompanyService<'a> {
    gateway: &'a Gateway,
}

impl<'a> CompanyService<'a> {
    pub fn new(gateway: &'a Gateway) -> Self {
        Self { gateway }
    }

    /// Companies owned by the signed-in recruiter.
    pub async fn list_mine(&self) -> Result<Vec<Company>, ApiError> {
        self.gateway.get(&["api", "companies", "all"], &[]).await
    }

    pub async fn for_edit(&self, slug: &str) -> Result<Company, ApiError> {
        self.gateway
            .get(&["api", "companies", slug, "preview"], &[])
            .await
    }

    /// Published page, readable without a session.
    pub async fn public_page(&self, slug: &str) -> Result<Company, ApiError> {
        self.gateway
            .get(&["api", "companies", slug, "careers"], &[])
            .await
    }

    /// Creates the company; the backend assigns its slug.
    pub async fn create(&self, payload: &CompanyCreate) -> Result<Company, ApiError> {
        self.gateway.post(&["api", "companies"], payload).await
    }

    pub async fn update(&self, slug: &str, payload: &CompanyUpdate) -> Result<Company, ApiError> {
        self.gateway
            .patch(&["api", "companies", slug, "edit"], Some(payload), &[])
            .await
    }
}
