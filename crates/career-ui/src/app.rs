use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::{
    components::{Route, Router, Routes},
    hooks::{use_params_map, use_query_map},
    ParamSegment, StaticSegment,
};

use crate::components::nav::Nav;
use crate::components::toast::ToastProvider;
use crate::pages::auth::AuthPage;
use crate::pages::careers::CareersPage;
use crate::pages::dashboard::DashboardPage;
use crate::pages::home::HomePage;
use crate::pages::job_detail::JobDetailPage;
use crate::pages::manage_jobs::ManageJobsPage;
use crate::pages::page_builder::{BuilderHandoff, PageBuilderPage};

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <link rel="icon" href="/favicon.svg" type="image/svg+xml" />
                <AutoReload options=options.clone() />
                <HydrationScripts options />
                <MetaTags />
            </head>
            <body>
                <App />
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();
    BuilderHandoff::provide();

    view! {
        <Stylesheet id="leptos" href="/pkg/career-console.css" />
        <Title text="Careers Builder" />
        <ToastProvider>
            <Router>
                <Routes fallback=|| view! { <p class="not-found">"Page not found."</p> }.into_any()>
                    <Route path=StaticSegment("") view=HomePage />
                    <Route path=StaticSegment("auth") view=AuthPage />
                    <Route path=StaticSegment("dashboard") view=DashboardView />
                    <Route path=StaticSegment("page-builder") view=PageBuilderView />
                    <Route
                        path=(StaticSegment("page-builder"), ParamSegment("slug"))
                        view=PageBuilderView
                    />
                    <Route path=(ParamSegment("slug"), StaticSegment("careers")) view=CareersView />
                    <Route
                        path=(ParamSegment("slug"), StaticSegment("jobs"), ParamSegment("job_id"))
                        view=JobDetailView
                    />
                    <Route
                        path=(ParamSegment("slug"), StaticSegment("manage-jobs"))
                        view=ManageJobsView
                    />
                </Routes>
            </Router>
        </ToastProvider>
    }
}

/// Current value of the `slug` path parameter.
fn slug_param() -> Memo<Option<String>> {
    let params = use_params_map();
    Memo::new(move |_| params.with(|p| p.get("slug")))
}

#[component]
fn DashboardView() -> impl IntoView {
    view! {
        <div class="app-layout">
            <Nav />
            <main class="main-content">
                <DashboardPage />
            </main>
        </div>
    }
}

#[component]
fn PageBuilderView() -> impl IntoView {
    let slug = slug_param();
    let query = use_query_map();

    move || {
        let revealLink = query.with_untracked(|q| q.get("published").is_some());
        view! { <PageBuilderPage slug=slug.get() reveal_link=revealLink /> }
    }
}

#[component]
fn CareersView() -> impl IntoView {
    let slug = slug_param();
    move || view! { <CareersPage slug=slug.get().unwrap_or_default() /> }
}

#[component]
fn JobDetailView() -> impl IntoView {
    let slug = slug_param();
    let params = use_params_map();
    let jobId = Memo::new(move |_| {
        params.with(|p| p.get("job_id").and_then(|id| id.parse::<i64>().ok()))
    });

    move || {
        view! { <JobDetailPage slug=slug.get().unwrap_or_default() job_id=jobId.get() /> }
    }
}

#[component]
fn ManageJobsView() -> impl IntoView {
    let slug = slug_param();

    view! {
        <div class="app-layout">
            <Nav />
            <main class="main-content">
                {move || view! { <ManageJobsPage slug=slug.get().unwrap_or_default() /> }}
            </main>
        </div>
    }
}
