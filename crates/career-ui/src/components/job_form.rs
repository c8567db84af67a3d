use career_types::{Failure, Job, JobCreate, JobType, MIN_DESCRIPTION_CHARS};
use leptos::prelude::*;
use leptos::server_fn::codec::Json;

use crate::components::toast::use_toasts;
use crate::directory::JobForm;

#[server(input = Json)]
pub async fn create_job(slug: String, job: JobCreate) -> Result<Job, ServerFnError<Failure>> {
    use crate::backend::ssr::{gateway, reject};
    use career_services::JobsService;

    let gateway = gateway()?;
    let created = JobsService::new(&gateway)
        .create(&slug, &job)
        .await
        .map_err(reject)?;
    tracing::info!("created job {} for {slug}", created.id);
    Ok(created)
}

/// Form for posting a new job. Validation runs before anything is sent;
/// `on_created` fires after the backend accepted the job.
#[component]
pub fn JobCreateForm(slug: String, on_created: Callback<()>) -> impl IntoView {
    let form = RwSignal::new(JobForm::default());
    let (error, setError) = signal(Option::<String>::None);
    #[allow(unused_variables)]
    let (submitting, setSubmitting) = signal(false);
    #[allow(unused_variables)]
    let toasts = use_toasts();

    let submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if submitting.get_untracked() {
            return;
        }
        let payload = match form.with_untracked(JobForm::validate) {
            Ok(payload) => payload,
            Err(failure) => {
                setError.set(Some(failure.to_string()));
                return;
            }
        };
        setError.set(None);

        #[cfg(feature = "hydrate")]
        {
            use crate::backend::{report, to_failure};
            use wasm_bindgen_futures::spawn_local;

            setSubmitting.set(true);
            let slug = slug.clone();
            spawn_local(async move {
                let result = create_job(slug, payload).await;
                setSubmitting.set(false);
                match result {
                    Ok(_) => {
                        form.set(JobForm::default());
                        toasts.success("Job posted.");
                        on_created.run(());
                    }
                    Err(e) => report(&to_failure(e), toasts),
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (payload, &slug, on_created);
        }
    };

    view! {
        <form class="job-form card" on:submit=submit>
            <div class="form-group">
                <label for="job-title">"Title"</label>
                <input
                    id="job-title"
                    type="text"
                    required
                    prop:value=move || form.with(|f| f.title.clone())
                    on:input=move |ev| form.update(|f| f.title = event_target_value(&ev))
                />
            </div>
            <div class="form-row">
                <div class="form-group">
                    <label for="job-location">"Location"</label>
                    <input
                        id="job-location"
                        type="text"
                        required
                        prop:value=move || form.with(|f| f.location.clone())
                        on:input=move |ev| form.update(|f| f.location = event_target_value(&ev))
                    />
                </div>
                <div class="form-group">
                    <label for="job-type">"Type"</label>
                    <select
                        id="job-type"
                        prop:value=move || form.with(|f| f.job_type.label())
                        on:change=move |ev| {
                            if let Some(t) = JobType::from_label(&event_target_value(&ev)) {
                                form.update(|f| f.job_type = t);
                            }
                        }
                    >
                        {JobType::ALL
                            .into_iter()
                            .map(|t| view! { <option value=t.label()>{t.label()}</option> })
                            .collect_view()}
                    </select>
                </div>
            </div>
            <div class="form-row">
                <div class="form-group">
                    <label for="job-min">"Minimum salary"</label>
                    <input
                        id="job-min"
                        type="text"
                        inputmode="numeric"
                        prop:value=move || form.with(|f| f.min_salary.clone())
                        on:input=move |ev| form.update(|f| f.min_salary = event_target_value(&ev))
                    />
                </div>
                <div class="form-group">
                    <label for="job-max">"Maximum salary"</label>
                    <input
                        id="job-max"
                        type="text"
                        inputmode="numeric"
                        prop:value=move || form.with(|f| f.max_salary.clone())
                        on:input=move |ev| form.update(|f| f.max_salary = event_target_value(&ev))
                    />
                </div>
                <div class="form-group">
                    <label for="job-currency">"Currency"</label>
                    <input
                        id="job-currency"
                        type="text"
                        maxlength="3"
                        prop:value=move || form.with(|f| f.currency.clone())
                        on:input=move |ev| form.update(|f| f.currency = event_target_value(&ev))
                    />
                </div>
            </div>
            <div class="form-group">
                <label for="job-description">"Description"</label>
                <textarea
                    id="job-description"
                    rows="8"
                    prop:value=move || form.with(|f| f.description.clone())
                    on:input=move |ev| form.update(|f| f.description = event_target_value(&ev))
                ></textarea>
                <span class="form-hint">
                    {format!("At least {MIN_DESCRIPTION_CHARS} characters.")}
                </span>
            </div>

            {move || error.get().map(|message| view! { <p class="inline-error">{message}</p> })}

            <button
                type="submit"
                class="btn btn-primary"
                disabled=move || submitting.get() || !form.with(JobForm::can_submit)
            >
                {move || if submitting.get() { "Posting..." } else { "Post job" }}
            </button>
        </form>
    }
}
