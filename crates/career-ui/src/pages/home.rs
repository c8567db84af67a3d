use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

#[component]
pub fn HomePage() -> impl IntoView {
    #[allow(unused_variables)]
    let (checking, setChecking) = signal(false);
    #[allow(unused_variables)]
    let navigate = use_navigate();

    let getStarted = move |_| {
        #[cfg(feature = "hydrate")]
        {
            use crate::pages::auth::session_status;
            use wasm_bindgen_futures::spawn_local;

            let navigate = navigate.clone();
            setChecking.set(true);
            spawn_local(async move {
                let signedIn = session_status().await.unwrap_or(false);
                setChecking.set(false);
                let target = if signedIn { "/dashboard" } else { "/auth" };
                navigate(target, Default::default());
            });
        }
    };

    view! {
        <div class="home-page">
            <section class="home-hero">
                <h1>"Careers pages your candidates will actually read."</h1>
                <p class="subtitle">
                    "Brand your page, tell your story section by section, and publish open roles in minutes."
                </p>
                <button class="btn btn-primary" disabled=move || checking.get() on:click=getStarted>
                    {move || if checking.get() { "One moment..." } else { "Get started" }}
                </button>
            </section>
            <section class="home-features">
                <div class="card">
                    <h3>"Live preview"</h3>
                    <p>"See exactly what candidates will see while you edit."</p>
                </div>
                <div class="card">
                    <h3>"Job board built in"</h3>
                    <p>"Post, pause and remove openings from one place."</p>
                </div>
                <div class="card">
                    <h3>"Share a link"</h3>
                    <p>"Every company gets its own public careers address."</p>
                </div>
            </section>
        </div>
    }
}
