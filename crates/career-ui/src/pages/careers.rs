use career_types::{Company, Failure};
use leptos::prelude::*;

use crate::components::company_renderer::CompanyRenderer;
use crate::render::CareerPage;

#[server]
async fn load_careers_page(slug: String) -> Result<Company, ServerFnError<Failure>> {
    use crate::backend::ssr::{gateway, reject};
    use career_services::CompanyService;

    let gateway = gateway()?;
    CompanyService::new(&gateway)
        .public_page(&slug)
        .await
        .map_err(reject)
}

/// Public careers page of one company.
#[component]
pub fn CareersPage(slug: String) -> impl IntoView {
    #[allow(unused_variables)]
    let (company, setCompany) = signal(Option::<Result<Company, Failure>>::None);

    #[cfg(feature = "hydrate")]
    {
        use crate::backend::to_failure;
        use wasm_bindgen_futures::spawn_local;

        spawn_local(async move {
            let result = load_careers_page(slug).await.map_err(to_failure);
            setCompany.set(Some(result));
        });
    }
    #[cfg(not(feature = "hydrate"))]
    let _ = slug;

    move || match company.get() {
        None => view! {
            <div class="loading page-loading">
                <div class="spinner"></div>
                "Loading..."
            </div>
        }
        .into_any(),
        Some(Err(Failure::NotFound)) => view! {
            <div class="not-found">
                <h1>"Company not found"</h1>
                <p>"This careers page does not exist or is no longer published."</p>
            </div>
        }
        .into_any(),
        Some(Err(failure)) => view! {
            <div class="not-found">
                <p class="inline-error">{failure.user_message()}</p>
            </div>
        }
        .into_any(),
        Some(Ok(company)) => view! { <CompanyRenderer page=CareerPage::published(&company) /> }
            .into_any(),
    }
}
