use career_types::{salary_range, Failure, Job, JobFilters, JobType};
use leptos::prelude::*;
use leptos::server_fn::codec::Json;

use crate::components::toast::use_toasts;

#[server(input = Json)]
pub async fn list_jobs(slug: String, filters: JobFilters) -> Result<Vec<Job>, ServerFnError<Failure>> {
    use crate::backend::ssr::{gateway, reject};
    use career_services::JobsService;

    let gateway = gateway()?;
    JobsService::new(&gateway)
        .list(&slug, &filters)
        .await
        .map_err(reject)
}

#[server]
pub async fn toggle_job(
    slug: String,
    job_id: i64,
    is_active: bool,
) -> Result<Job, ServerFnError<Failure>> {
    use crate::backend::ssr::{gateway, reject};
    use career_services::JobsService;

    let gateway = gateway()?;
    JobsService::new(&gateway)
        .toggle(&slug, job_id, is_active)
        .await
        .map_err(reject)
}

#[server]
pub async fn delete_job(slug: String, job_id: i64) -> Result<(), ServerFnError<Failure>> {
    use crate::backend::ssr::{gateway, reject};
    use career_services::JobsService;

    let gateway = gateway()?;
    JobsService::new(&gateway)
        .delete(&slug, job_id)
        .await
        .map_err(reject)
}

#[derive(Clone, Copy, Debug)]
#[cfg_attr(not(feature = "hydrate"), allow(dead_code))]
enum JobAction {
    Toggle { job_id: i64, is_active: bool },
    Delete { job_id: i64 },
}

/// Live job listing with search, location and type filters.
///
/// `manage` adds activate/deactivate and delete controls and shows inactive
/// postings; otherwise only active postings are listed. Bumping `refresh`
/// forces a refetch.
#[component]
pub fn JobList(
    #[prop(into)] slug: Signal<String>,
    #[prop(optional)] manage: bool,
    #[prop(optional)] refresh: Option<Signal<u32>>,
) -> impl IntoView {
    let search = RwSignal::new(String::new());
    let location = RwSignal::new(String::new());
    let jobType = RwSignal::new(String::new());
    #[allow(unused_variables)]
    let reload = RwSignal::new(0u32);

    #[allow(unused_variables)]
    let (listing, setListing) = signal(Option::<Result<Vec<Job>, Failure>>::None);
    #[allow(unused_variables)]
    let (busyJob, setBusyJob) = signal(Option::<i64>::None);
    #[allow(unused_variables)]
    let toasts = use_toasts();

    #[cfg(feature = "hydrate")]
    {
        use crate::backend::to_failure;
        use crate::directory::FetchGeneration;
        use wasm_bindgen_futures::spawn_local;

        let generation = FetchGeneration::default();
        Effect::new(move |_| {
            let slug = slug.get();
            let filters = JobFilters::from_inputs(&search.get(), &location.get(), &jobType.get());
            reload.track();
            if let Some(refresh) = refresh {
                refresh.track();
            }

            let ticket = generation.issue();
            let generation = generation.clone();
            spawn_local(async move {
                let result = list_jobs(slug, filters.clone())
                    .await
                    .map(|jobs| {
                        let mut jobs = filters.apply(jobs);
                        if !manage {
                            jobs.retain(|j| j.is_active);
                        }
                        jobs
                    })
                    .map_err(to_failure);
                if generation.is_latest(ticket) {
                    setListing.set(Some(result));
                }
            });
        });
    }
    #[cfg(not(feature = "hydrate"))]
    let _ = refresh;

    let runAction = Callback::new(move |action: JobAction| {
        #[cfg(feature = "hydrate")]
        {
            use crate::backend::{report, to_failure};
            use wasm_bindgen_futures::spawn_local;

            let slug = slug.get_untracked();
            let jobId = match action {
                JobAction::Toggle { job_id, .. } | JobAction::Delete { job_id } => job_id,
            };

            if matches!(action, JobAction::Delete { .. }) {
                let confirmed = window()
                    .confirm_with_message("Delete this job posting?")
                    .unwrap_or(false);
                if !confirmed {
                    return;
                }
            }

            setBusyJob.set(Some(jobId));
            spawn_local(async move {
                let result = match action {
                    JobAction::Toggle { job_id, is_active } => toggle_job(slug, job_id, is_active)
                        .await
                        .map(|job| {
                            if job.is_active {
                                "Job activated."
                            } else {
                                "Job deactivated."
                            }
                        }),
                    JobAction::Delete { job_id } => {
                        delete_job(slug, job_id).await.map(|_| "Job deleted.")
                    }
                };
                setBusyJob.set(None);
                match result {
                    Ok(message) => {
                        toasts.success(message);
                        reload.update(|n| *n += 1);
                    }
                    Err(e) => report(&to_failure(e), toasts),
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = action;
        }
    });

    let clearFilters = move |_| {
        search.set(String::new());
        location.set(String::new());
        jobType.set(String::new());
    };

    view! {
        <div class="job-list">
            <div class="job-filters">
                <input
                    type="search"
                    placeholder="Search by title"
                    prop:value=move || search.get()
                    on:input=move |ev| search.set(event_target_value(&ev))
                />
                <input
                    type="text"
                    placeholder="Location"
                    prop:value=move || location.get()
                    on:input=move |ev| location.set(event_target_value(&ev))
                />
                <select
                    prop:value=move || jobType.get()
                    on:change=move |ev| jobType.set(event_target_value(&ev))
                >
                    <option value="">"All types"</option>
                    {JobType::ALL
                        .into_iter()
                        .map(|t| view! { <option value=t.label()>{t.label()}</option> })
                        .collect_view()}
                </select>
                <button class="btn btn-ghost" on:click=clearFilters>
                    "Clear filters"
                </button>
            </div>

            {move || match listing.get() {
                None => {
                    view! {
                        <div class="loading">
                            <div class="spinner"></div>
                            "Loading jobs..."
                        </div>
                    }
                        .into_any()
                }
                Some(Err(failure)) => {
                    view! { <p class="inline-error">{failure.user_message()}</p> }.into_any()
                }
                Some(Ok(jobs)) if jobs.is_empty() => {
                    view! { <div class="job-empty">"No jobs found"</div> }.into_any()
                }
                Some(Ok(jobs)) => {
                    let slug = slug.get();
                    let busy = busyJob.get();
                    view! {
                        <ul class="job-rows">
                            {jobs
                                .into_iter()
                                .map(|job| {
                                    let isBusy = busy == Some(job.id);
                                    view! {
                                        <JobRow
                                            job=job
                                            slug=slug.clone()
                                            manage=manage
                                            busy=isBusy
                                            on_action=runAction
                                        />
                                    }
                                })
                                .collect_view()}
                        </ul>
                    }
                        .into_any()
                }
            }}
        </div>
    }
}

#[component]
fn JobRow(
    job: Job,
    slug: String,
    manage: bool,
    busy: bool,
    on_action: Callback<JobAction>,
) -> impl IntoView {
    let href = format!("/{slug}/jobs/{}", job.id);
    let salary = salary_range(&job);
    let jobId = job.id;
    let isActive = job.is_active;

    let controls = manage.then(|| {
        let (badgeClass, badgeText, toggleText) = if isActive {
            ("status-badge status-active", "Active", "Deactivate")
        } else {
            ("status-badge status-inactive", "Inactive", "Activate")
        };
        view! {
            <div class="job-actions">
                <span class=badgeClass>{badgeText}</span>
                <button
                    class="btn btn-secondary"
                    disabled=busy
                    on:click=move |_| {
                        on_action.run(JobAction::Toggle {
                            job_id: jobId,
                            is_active: !isActive,
                        })
                    }
                >
                    {toggleText}
                </button>
                <button
                    class="btn btn-danger"
                    disabled=busy
                    on:click=move |_| on_action.run(JobAction::Delete { job_id: jobId })
                >
                    "Delete"
                </button>
            </div>
        }
    });

    view! {
        <li class="job-row">
            <div class="job-main">
                <a class="job-title" href=href>{job.title}</a>
                <div class="job-meta">
                    <span>{job.location}</span>
                    <span>{job.job_type.label()}</span>
                    {salary.map(|s| view! { <span>{s}</span> })}
                </div>
            </div>
            {controls}
        </li>
    }
}
