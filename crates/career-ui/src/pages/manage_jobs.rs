use leptos::prelude::*;

use crate::components::job_form::JobCreateForm;
use crate::components::job_list::JobList;

#[derive(Clone, Copy, PartialEq, Eq)]
enum Tab {
    Openings,
    Create,
}

#[component]
pub fn ManageJobsPage(slug: String) -> impl IntoView {
    let tab = RwSignal::new(Tab::Openings);
    let refresh = RwSignal::new(0u32);

    let onCreated = Callback::new(move |_: ()| {
        refresh.update(|n| *n += 1);
        tab.set(Tab::Openings);
    });

    let tabClass = move |which: Tab| {
        if tab.get() == which {
            "tab active"
        } else {
            "tab"
        }
    };

    let builderHref = format!("/page-builder/{slug}");
    let careersHref = format!("/{slug}/careers");
    let listSlug = slug.clone();

    view! {
        <div class="dashboard-header">
            <div>
                <h1>"Manage jobs"</h1>
                <p class="subtitle">{format!("/{slug}/careers")}</p>
            </div>
            <div class="header-actions">
                <a class="btn btn-secondary" href=builderHref>
                    "Edit page"
                </a>
                <a class="btn btn-ghost" href=careersHref target="_blank">
                    "View live"
                </a>
            </div>
        </div>
        <div class="tabs">
            <button class=move || tabClass(Tab::Openings) on:click=move |_| tab.set(Tab::Openings)>
                "Openings"
            </button>
            <button class=move || tabClass(Tab::Create) on:click=move |_| tab.set(Tab::Create)>
                "Post a job"
            </button>
        </div>
        <div class="tab-panel" class:hidden=move || tab.get() != Tab::Openings>
            <JobList slug=listSlug manage=true refresh=Signal::from(refresh) />
        </div>
        {move || {
            (tab.get() == Tab::Create)
                .then(|| view! { <JobCreateForm slug=slug.clone() on_created=onCreated /> })
        }}
    }
}
