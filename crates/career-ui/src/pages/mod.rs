pub mod auth;
pub mod careers;
pub mod dashboard;
pub mod home;
pub mod job_detail;
pub mod manage_jobs;
pub mod page_builder;
