use career_types::{salary_range, Failure, Job};
use leptos::prelude::*;

#[server]
async fn get_job(slug: String, job_id: i64) -> Result<Job, ServerFnError<Failure>> {
    use crate::backend::ssr::{gateway, reject};
    use career_services::JobsService;

    let gateway = gateway()?;
    JobsService::new(&gateway)
        .get(&slug, job_id)
        .await
        .map_err(reject)
}

/// `job_id` is `None` when the path segment is not a number.
#[component]
pub fn JobDetailPage(slug: String, job_id: Option<i64>) -> impl IntoView {
    let backHref = format!("/{slug}/careers");

    #[allow(unused_variables)]
    let (job, setJob) = signal::<Option<Result<Job, Failure>>>(match job_id {
        Some(_) => None,
        None => Some(Err(Failure::NotFound)),
    });

    #[cfg(feature = "hydrate")]
    {
        use crate::backend::to_failure;
        use wasm_bindgen_futures::spawn_local;

        if let Some(jobId) = job_id {
            let slug = slug.clone();
            spawn_local(async move {
                let result = get_job(slug, jobId).await.map_err(to_failure);
                setJob.set(Some(result));
            });
        }
    }

    view! {
        <div class="job-detail">
            <a class="back-link" href=backHref>
                "\u{2190} All openings"
            </a>
            {move || match job.get() {
                None => view! {
                    <div class="loading">
                        <div class="spinner"></div>
                        "Loading job..."
                    </div>
                }
                .into_any(),
                Some(Err(Failure::NotFound)) => view! {
                    <div class="not-found">
                        <h1>"Job not found"</h1>
                        <p>"This opening may have been filled or removed."</p>
                    </div>
                }
                .into_any(),
                Some(Err(failure)) => view! { <p class="inline-error">{failure.user_message()}</p> }
                    .into_any(),
                Some(Ok(job)) => view! { <JobDetail job=job /> }.into_any(),
            }}
        </div>
    }
}

#[component]
fn JobDetail(job: Job) -> impl IntoView {
    let salary = salary_range(&job);
    let posted = format!("Posted {}", job.created_at.format("%B %-d, %Y"));

    view! {
        <article class="card job-card">
            <h1>{job.title}</h1>
            <div class="job-meta">
                <span>{job.location}</span>
                <span>{job.job_type.label()}</span>
                {salary.map(|s| view! { <span>{s}</span> })}
                <span>{posted}</span>
            </div>
            <div class="job-description">{job.description}</div>
        </article>
    }
}
