use leptos::prelude::*;
use leptos_router::hooks::use_location;

/// Top bar shown on recruiter pages.
#[component]
pub fn Nav() -> impl IntoView {
    let location = use_location();
    let itemClass = move |prefix: &'static str| {
        if location.pathname.get().starts_with(prefix) {
            "nav-item active"
        } else {
            "nav-item"
        }
    };

    view! {
        <nav class="nav-bar">
            <a class="nav-brand" href="/dashboard">
                <div class="brand-icon">"C"</div>
                <span class="brand-text">"Careers Builder"</span>
            </a>
            <ul class="nav-links">
                <li class=move || itemClass("/dashboard")>
                    <a href="/dashboard">"Dashboard"</a>
                </li>
                <li class=move || itemClass("/page-builder")>
                    <a href="/page-builder">"New page"</a>
                </li>
            </ul>
            <form class="nav-signout" method="post" action="/session/logout">
                <button type="submit" class="btn btn-ghost">
                    "Sign out"
                </button>
            </form>
        </nav>
    }
}
