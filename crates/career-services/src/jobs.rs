use career_types::{Job, JobCreate, JobFilters, JobUpdate};

use crate::error::ApiError;
use crate::gateway::Gateway;

/// Job routes of the backend, all scoped by company slug.
pub struct JobsService<'a> {
    gateway: &'a Gateway,
}

impl<'a> JobsService<'a> {
    pub fn new(gateway: &'a Gateway) -> Self {
        Self { gateway }
    }

    /// Lists a company's jobs. Only the filters that are present are sent.
    pub async fn list(&self, slug: &str, filters: &JobFilters) -> Result<Vec<Job>, ApiError> {
        self.gateway
            .get(&["api", slug, "jobs"], &filters.query_pairs())
            .await
    }

    pub async fn get(&self, slug: &str, jobId: i64) -> Result<Job, ApiError> {
        let id = jobId.to_string();
        self.gateway.get(&["api", slug, "jobs", id.as_str()], &[]).await
    }

    pub async fn create(&self, slug: &str, payload: &JobCreate) -> Result<Job, ApiError> {
        self.gateway.post(&["api", slug, "jobs"], payload).await
    }

    pub async fn update(&self, slug: &str, jobId: i64, payload: &JobUpdate) -> Result<Job, ApiError> {
        let id = jobId.to_string();
        self.gateway
            .patch(&["api", slug, "jobs", id.as_str()], Some(payload), &[])
            .await
    }

    pub async fn toggle(&self, slug: &str, jobId: i64, isActive: bool) -> Result<Job, ApiError> {
        let id = jobId.to_string();
        self.gateway
            .patch::<(), Job>(
                &["api", slug, "jobs", id.as_str(), "toggle"],
                None,
                &[("is_active", isActive.to_string())],
            )
            .await
    }

    pub async fn delete(&self, slug: &str, jobId: i64) -> Result<(), ApiError> {
        let id = jobId.to_string();
        self.gateway.delete(&["api", slug, "jobs", id.as_str()]).await
    }
}
