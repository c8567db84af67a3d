//! In-process stand-in for the backend REST API.

#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use axum::{
    body::Bytes,
    extract::{Query, State},
    http::{header, HeaderMap, Method, StatusCode, Uri},
    response::{IntoResponse, Response},
    Json, Router,
};
use career_services::{AccessToken, Backend, Gateway};
use career_types::{Company, CompanyCreate, CompanyUpdate, Job, JobCreate, JobFilters, JobUpdate};
use serde_json::json;

pub const VALID_TOKEN: &str = "good-token";

#[derive(Default)]
pub struct Store {
    next_id: i64,
    companies: Vec<Company>,
    jobs: Vec<(String, Job)>,
    pub seen_authorization: Vec<Option<String>>,
}

type Shared = Arc<Mutex<Store>>;

pub struct FakeBackend {
    pub base_url: String,
    pub store: Shared,
}

impl FakeBackend {
    pub async fn spawn() -> Self {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let store: Shared = Arc::new(Mutex::new(Store::default()));

        let app = Router::new().fallback(handle).with_state(store.clone());
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self {
            base_url: format!("http://{addr}"),
            store,
        }
    }

    pub fn backend(&self) -> Backend {
        Backend::new(&self.base_url, Duration::from_secs(5)).unwrap()
    }

    pub fn signed_in(&self) -> Gateway {
        self.backend().gateway(AccessToken::parse(VALID_TOKEN))
    }

    pub fn anonymous(&self) -> Gateway {
        self.backend().gateway(None::<AccessToken>)
    }

    pub fn request_count(&self) -> usize {
        self.store.lock().unwrap().seen_authorization.len()
    }
}

async fn handle(
    State(store): State<Shared>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
    body: Bytes,
) -> Response {
    let authorization = headers
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .map(str::to_string);
    let authed = authorization.as_deref() == Some(format!("Bearer {VALID_TOKEN}").as_str());
    let query: HashMap<String, String> = Query::try_from_uri(&uri)
        .map(|q| q.0)
        .unwrap_or_default();
    let path = uri.path().trim_matches('/').to_string();
    let segments: Vec<&str> = path.split('/').collect();

    let mut store = store.lock().unwrap();
    store.seen_authorization.push(authorization.clone());

    match (method, segments.as_slice()) {
        (Method::GET, ["echo"]) => Json(json!({ "authorization": authorization })).into_response(),
        (Method::GET, ["boom"]) => (StatusCode::INTERNAL_SERVER_ERROR, "kaboom").into_response(),

        (Method::GET, ["api", "companies", "all"]) => {
            if !authed {
                return unauthorized();
            }
            Json(store.companies.clone()).into_response()
        }
        (Method::GET, ["api", "companies", slug, "preview"]) => {
            if !authed {
                return unauthorized();
            }
            company(&store, slug)
        }
        (Method::GET, ["api", "companies", slug, "careers"]) => company(&store, slug),
        (Method::POST, ["api", "companies"]) => {
            if !authed {
                return unauthorized();
            }
            let Ok(payload) = serde_json::from_slice::<CompanyCreate>(&body) else {
                return StatusCode::UNPROCESSABLE_ENTITY.into_response();
            };
            store.next_id += 1;
            let slug = unique_slug(&store, &payload.company_name);
            let created = Company {
                id: store.next_id,
                slug,
                company_name: payload.company_name,
                branding: payload.branding,
                page_content: payload.page_content,
                recruiter_id: Some("recruiter-1".into()),
                created_at: Some(chrono::Utc::now()),
                updated_at: Some(chrono::Utc::now()),
            };
            store.companies.push(created.clone());
            (StatusCode::CREATED, Json(created)).into_response()
        }
        (Method::PATCH, ["api", "companies", slug, "edit"]) => {
            if !authed {
                return unauthorized();
            }
            let Ok(payload) = serde_json::from_slice::<CompanyUpdate>(&body) else {
                return StatusCode::UNPROCESSABLE_ENTITY.into_response();
            };
            let Some(existing) = store.companies.iter_mut().find(|c| c.slug == *slug) else {
                return not_found("Company not found");
            };
            if let Some(branding) = payload.branding {
                existing.branding = branding;
            }
            if let Some(content) = payload.page_content {
                existing.page_content = content;
            }
            Json(existing.clone()).into_response()
        }

        (Method::GET, ["api", slug, "jobs"]) => {
            if !store.companies.iter().any(|c| c.slug == *slug) {
                return not_found("Company not found");
            }
            let param = |name: &str| query.get(name).cloned().unwrap_or_default();
            let filters =
                JobFilters::from_inputs(&param("search"), &param("location"), &param("job_type"));
            let jobs: Vec<Job> = store
                .jobs
                .iter()
                .filter(|(owner, job)| owner == slug && filters.matches(job))
                .map(|(_, job)| job.clone())
                .collect();
            Json(jobs).into_response()
        }
        (Method::POST, ["api", slug, "jobs"]) => {
            if !authed {
                return unauthorized();
            }
            let Ok(payload) = serde_json::from_slice::<JobCreate>(&body) else {
                return StatusCode::UNPROCESSABLE_ENTITY.into_response();
            };
            store.next_id += 1;
            let job = Job {
                id: store.next_id,
                title: payload.title,
                location: payload.location,
                description: payload.description,
                job_type: payload.job_type,
                min_salary: payload.min_salary,
                max_salary: payload.max_salary,
                currency: payload.currency,
                is_active: true,
                created_at: chrono::Utc::now(),
            };
            store.jobs.push((slug.to_string(), job.clone()));
            (StatusCode::CREATED, Json(job)).into_response()
        }
        (Method::GET, ["api", slug, "jobs", id]) => match find_job(&mut store, slug, id) {
            Some(job) => Json(job.clone()).into_response(),
            None => not_found("Job not found"),
        },
        (Method::PATCH, ["api", slug, "jobs", id, "toggle"]) => {
            if !authed {
                return unauthorized();
            }
            let is_active = query.get("is_active").map(String::as_str) == Some("true");
            match find_job(&mut store, slug, id) {
                Some(job) => {
                    job.is_active = is_active;
                    Json(job.clone()).into_response()
                }
                None => not_found("Job not found"),
            }
        }
        (Method::PATCH, ["api", slug, "jobs", id]) => {
            if !authed {
                return unauthorized();
            }
            let Ok(payload) = serde_json::from_slice::<JobUpdate>(&body) else {
                return StatusCode::UNPROCESSABLE_ENTITY.into_response();
            };
            match find_job(&mut store, slug, id) {
                Some(job) => {
                    if let Some(title) = payload.title {
                        job.title = title;
                    }
                    if let Some(location) = payload.location {
                        job.location = location;
                    }
                    if let Some(description) = payload.description {
                        job.description = description;
                    }
                    if let Some(job_type) = payload.job_type {
                        job.job_type = job_type;
                    }
                    Json(job.clone()).into_response()
                }
                None => not_found("Job not found"),
            }
        }
        (Method::DELETE, ["api", slug, "jobs", id]) => {
            if !authed {
                return unauthorized();
            }
            let before = store.jobs.len();
            store
                .jobs
                .retain(|(owner, job)| !(owner == slug && job.id.to_string() == *id));
            if store.jobs.len() == before {
                not_found("Job not found")
            } else {
                StatusCode::NO_CONTENT.into_response()
            }
        }

        _ => not_found("Not Found"),
    }
}

fn company(store: &Store, slug: &str) -> Response {
    match store.companies.iter().find(|c| c.slug == slug) {
        Some(found) => Json(found.clone()).into_response(),
        None => not_found("Company not found"),
    }
}

fn find_job<'a>(store: &'a mut Store, slug: &str, id: &str) -> Option<&'a mut Job> {
    store
        .jobs
        .iter_mut()
        .find(|(owner, job)| owner == slug && job.id.to_string() == id)
        .map(|(_, job)| job)
}

fn unique_slug(store: &Store, name: &str) -> String {
    let base: String = name
        .to_lowercase()
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() { c } else { '-' })
        .collect::<String>()
        .trim_matches('-')
        .to_string();
    let base = if base.is_empty() { "company".to_string() } else { base };

    let mut slug = base.clone();
    let mut suffix = 1;
    while store.companies.iter().any(|c| c.slug == slug) {
        slug = format!("{base}-{suffix}");
        suffix += 1;
    }
    slug
}

fn unauthorized() -> Response {
    (
        StatusCode::UNAUTHORIZED,
        Json(json!({ "detail": "Not authenticated" })),
    )
        .into_response()
}

fn not_found(detail: &str) -> Response {
    (StatusCode::NOT_FOUND, Json(json!({ "detail": detail }))).into_response()
}
