//! Job directory helpers: fetch ordering and the job creation form.

use std::sync::{
    atomic::{AtomicU64, Ordering},
    Arc,
};

use career_types::{description_ready, JobCreate, JobType, ValidationFailure};

/// Hands out increasing tickets so that only the most recently issued fetch
/// may publish its result.
#[derive(Clone, Debug, Default)]
pub struct FetchGeneration {
    latest: Arc<AtomicU64>,
}

impl FetchGeneration {
    pub fn issue(&self) -> u64 {
        self.latest.fetch_add(1, Ordering::SeqCst) + 1
    }

    pub fn is_latest(&self, ticket: u64) -> bool {
        self.latest.load(Ordering::SeqCst) == ticket
    }
}

/// Raw inputs of the "create job" form.
#[derive(Clone, Debug, PartialEq)]
pub struct JobForm {
    pub title: String,
    pub location: String,
    pub description: String,
    pub job_type: JobType,
    pub min_salary: String,
    pub max_salary: String,
    pub currency: String,
}

impl Default for JobForm {
    fn default() -> Self {
        Self {
            title: String::new(),
            location: String::new(),
            description: String::new(),
            job_type: JobType::default(),
            min_salary: String::new(),
            max_salary: String::new(),
            currency: "USD".into(),
        }
    }
}

impl JobForm {
    pub fn can_submit(&self) -> bool {
        description_ready(&self.description)
    }

    pub fn validate(&self) -> Result<JobCreate, ValidationFailure> {
        let title = self.title.trim();
        if title.is_empty() {
            return Err(ValidationFailure::Missing("Title"));
        }
        let location = self.location.trim();
        if location.is_empty() {
            return Err(ValidationFailure::Missing("Location"));
        }
        if !description_ready(&self.description) {
            return Err(ValidationFailure::DescriptionTooShort);
        }

        let currency = match self.currency.trim() {
            "" => "USD".to_string(),
            c => c.to_uppercase(),
        };

        Ok(JobCreate {
            title: title.to_string(),
            location: location.to_string(),
            description: self.description.trim().to_string(),
            job_type: self.job_type,
            min_salary: parse_salary(&self.min_salary, "Minimum salary")?,
            max_salary: parse_salary(&self.max_salary, "Maximum salary")?,
            currency,
        })
    }
}

fn parse_salary(raw: &str, field: &'static str) -> Result<Option<i64>, ValidationFailure> {
    let cleaned: String = raw.trim().chars().filter(|c| *c != ',' && *c != '_').collect();
    if cleaned.is_empty() {
        return Ok(None);
    }
    match cleaned.parse::<i64>() {
        Ok(value) if value >= 0 => Ok(Some(value)),
        _ => Err(ValidationFailure::InvalidSalary { field }),
    }
}
