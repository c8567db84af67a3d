use career_types::{Company, Failure};
use leptos::prelude::*;

#[server]
async fn list_my_companies() -> Result<Vec<Company>, ServerFnError<Failure>> {
    use crate::backend::ssr::{gateway, reject};
    use career_services::CompanyService;

    let gateway = gateway()?;
    CompanyService::new(&gateway).list_mine().await.map_err(reject)
}

#[component]
pub fn DashboardPage() -> impl IntoView {
    #[allow(unused_variables)]
    let (companies, setCompanies) = signal(Option::<Result<Vec<Company>, Failure>>::None);

    #[cfg(feature = "hydrate")]
    {
        use crate::backend::{redirect_to_sign_in, to_failure};
        use wasm_bindgen_futures::spawn_local;

        spawn_local(async move {
            let result = list_my_companies().await.map_err(to_failure);
            if let Err(failure) = &result {
                if failure.is_unauthorized() {
                    redirect_to_sign_in();
                }
            }
            setCompanies.set(Some(result));
        });
    }

    view! {
        <div class="dashboard-header">
            <div>
                <h1>"Your careers pages"</h1>
                <p class="subtitle">"Edit a page, manage its openings or share it"</p>
            </div>
            <a class="btn btn-primary" href="/page-builder">
                "Create company page"
            </a>
        </div>
        {move || match companies.get() {
            None => {
                view! {
                    <div class="loading">
                        <div class="spinner"></div>
                        "Loading companies..."
                    </div>
                }
                    .into_any()
            }
            Some(Err(failure)) => {
                view! {
                    <div class="card">
                        <p class="inline-error">{failure.user_message()}</p>
                    </div>
                }
                    .into_any()
            }
            Some(Ok(list)) if list.is_empty() => {
                view! {
                    <div class="card company-empty">
                        <p>"You have not created a careers page yet."</p>
                    </div>
                }
                    .into_any()
            }
            Some(Ok(list)) => {
                view! {
                    <div class="company-grid">
                        {list
                            .into_iter()
                            .map(|company| view! { <CompanyCard company=company /> })
                            .collect_view()}
                    </div>
                }
                    .into_any()
            }
        }}
    }
}

#[component]
fn CompanyCard(company: Company) -> impl IntoView {
    let slug = company.slug;
    let swatch = format!("background-color: {}", company.branding.primary_color);

    view! {
        <div class="card company-card">
            <div class="company-swatch" style=swatch></div>
            <h3>{company.company_name}</h3>
            <p class="company-slug">{format!("/{slug}/careers")}</p>
            <div class="company-actions">
                <a class="btn btn-secondary" href=format!("/page-builder/{slug}")>
                    "Edit page"
                </a>
                <a class="btn btn-secondary" href=format!("/{slug}/manage-jobs")>
                    "Manage jobs"
                </a>
                <a class="btn btn-ghost" href=format!("/{slug}/careers") target="_blank">
                    "View live"
                </a>
            </div>
        </div>
    }
}
