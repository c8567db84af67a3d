use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Minimum number of characters a job description needs once trimmed.
pub const MIN_DESCRIPTION_CHARS: usize = 10;

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Job {
    pub id: i64,
    pub title: String,
    pub location: String,
    /// Summary listings leave this out.
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub job_type: JobType,
    #[serde(default)]
    pub min_salary: Option<i64>,
    #[serde(default)]
    pub max_salary: Option<i64>,
    #[serde(default = "default_currency")]
    pub currency: String,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}

#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum JobType {
    #[default]
    #[serde(rename = "Full-time")]
    FullTime,
    #[serde(rename = "Part-time")]
    PartTime,
    #[serde(rename = "Contract")]
    Contract,
    #[serde(rename = "Internship")]
    Internship,
}

/// Body of `POST /{slug}/jobs`.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct JobCreate {
    pub title: String,
    pub location: String,
    pub description: String,
    pub job_type: JobType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_salary: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_salary: Option<i64>,
    pub currency: String,
}

/// Body of `PATCH /{slug}/jobs/{id}`.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct JobUpdate {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub job_type: Option<JobType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_salary: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_salary: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,
}

/// Optional narrowing of a job listing. Every present filter must match.
///
/// `search` and `location` are case-insensitive substring matches against
/// the title and the location; `job_type` is an exact match.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct JobFilters {
    pub search: Option<String>,
    pub location: Option<String>,
    pub job_type: Option<JobType>,
}

#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum ValidationFailure {
    #[error("Description must be at least {MIN_DESCRIPTION_CHARS} characters.")]
    DescriptionTooShort,
    #[error("{field} must be a whole number.")]
    InvalidSalary { field: &'static str },
    #[error("{0} is required.")]
    Missing(&'static str),
}

fn default_currency() -> String {
    "USD".into()
}

impl JobType {
    pub const ALL: [JobType; 4] = [
        JobType::FullTime,
        JobType::PartTime,
        JobType::Contract,
        JobType::Internship,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            JobType::FullTime => "Full-time",
            JobType::PartTime => "Part-time",
            JobType::Contract => "Contract",
            JobType::Internship => "Internship",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.label() == label)
    }
}

impl JobFilters {
    /// Builds filters from raw input values; blank inputs impose no constraint.
    pub fn from_inputs(search: &str, location: &str, jobType: &str) -> Self {
        Self {
            search: present(search),
            location: present(location),
            job_type: JobType::from_label(jobType.trim()),
        }
    }

    /// Query parameters for `GET /{slug}/jobs`, omitting absent filters.
    pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        if let Some(search) = &self.search {
            pairs.push(("search", search.clone()));
        }
        if let Some(location) = &self.location {
            pairs.push(("location", location.clone()));
        }
        if let Some(jobType) = &self.job_type {
            pairs.push(("job_type", jobType.label().to_string()));
        }
        pairs
    }

    pub fn matches(&self, job: &Job) -> bool {
        let searchOk = self
            .search
            .as_deref()
            .map_or(true, |needle| contains_ignore_case(&job.title, needle));
        let locationOk = self
            .location
            .as_deref()
            .map_or(true, |needle| contains_ignore_case(&job.location, needle));
        let typeOk = self.job_type.map_or(true, |t| t == job.job_type);
        searchOk && locationOk && typeOk
    }

    pub fn apply(&self, jobs: Vec<Job>) -> Vec<Job> {
        jobs.into_iter().filter(|job| self.matches(job)).collect()
    }
}

/// Whether a description is long enough to enable submission.
pub fn description_ready(description: &str) -> bool {
    description.trim().chars().count() >= MIN_DESCRIPTION_CHARS
}

/// `{currency} {min} - {max}`, or `None` when neither bound is set.
pub fn salary_range(job: &Job) -> Option<String> {
    match (job.min_salary, job.max_salary) {
        (None, None) | (Some(0), Some(0)) | (Some(0), None) | (None, Some(0)) => None,
        (min, max) => Some(format!(
            "{} {} - {}",
            job.currency,
            group_thousands(min.unwrap_or(0)),
            max.map(group_thousands).unwrap_or_else(|| "Max".into()),
        )),
    }
}

fn group_thousands(value: i64) -> String {
    let digits = value.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    if value < 0 {
        format!("-{grouped}")
    } else {
        grouped
    }
}

fn present(value: &str) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}
