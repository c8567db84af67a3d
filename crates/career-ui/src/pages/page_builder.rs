use career_types::{Alignment, Company, Failure, SectionEdit};
use leptos::prelude::*;
use leptos::server_fn::codec::Json;
use leptos_router::hooks::use_navigate;

use crate::builder::{BuilderPhase, PageBuilder, PublishRequest};
use crate::components::company_renderer::CompanyRenderer;
use crate::components::live_link::LiveLinkPopUp;
use crate::components::toast::use_toasts;
use crate::render::CareerPage;

#[server]
async fn load_company_for_edit(slug: String) -> Result<Company, ServerFnError<Failure>> {
    use crate::backend::ssr::{gateway, reject};
    use career_services::CompanyService;

    let gateway = gateway()?;
    CompanyService::new(&gateway)
        .for_edit(&slug)
        .await
        .map_err(reject)
}

#[server(input = Json)]
async fn publish_page(request: PublishRequest) -> Result<Company, ServerFnError<Failure>> {
    use crate::backend::ssr::{gateway, reject};
    use career_services::CompanyService;

    let gateway = gateway()?;
    let companies = CompanyService::new(&gateway);
    match request {
        PublishRequest::Create(payload) => {
            if payload.company_name.trim().is_empty() {
                return Err(ServerFnError::WrappedServerError(Failure::Validation(
                    "Company name is required.".into(),
                )));
            }
            let company = companies.create(&payload).await.map_err(reject)?;
            tracing::info!("published new careers page {}", company.slug);
            Ok(company)
        }
        PublishRequest::Update { slug, update } => {
            let company = companies.update(&slug, &update).await.map_err(reject)?;
            tracing::info!("updated careers page {slug}");
            Ok(company)
        }
    }
}

/// Holds the builder of a just-created page while the router moves from
/// `/page-builder` to `/page-builder/{slug}`.
#[derive(Clone, Copy)]
pub struct BuilderHandoff(StoredValue<Option<PageBuilder>>);

impl BuilderHandoff {
    pub fn provide() {
        provide_context(Self(StoredValue::new(None)));
    }

    #[cfg(feature = "hydrate")]
    fn stash(self, builder: PageBuilder) {
        self.0.set_value(Some(builder));
    }

    fn take(self) -> Option<PageBuilder> {
        self.0.try_update_value(Option::take).flatten()
    }
}

/// Editor and live preview for one careers page. Without a slug it creates a
/// new company on first publish.
#[component]
pub fn PageBuilderPage(slug: Option<String>, reveal_link: bool) -> impl IntoView {
    #[allow(unused_variables)]
    let handoff = use_context::<BuilderHandoff>();
    let builder = RwSignal::new(match slug.clone() {
        Some(slug) => {
            PageBuilder::resume(handoff.and_then(BuilderHandoff::take), slug, reveal_link)
        }
        None => PageBuilder::new(),
    });
    #[allow(unused_variables)]
    let (origin, setOrigin) = signal(String::new());
    #[allow(unused_variables)]
    let toasts = use_toasts();
    #[allow(unused_variables)]
    let navigate = use_navigate();

    #[cfg(feature = "hydrate")]
    {
        use crate::backend::{redirect_to_sign_in, to_failure};
        use wasm_bindgen_futures::spawn_local;

        setOrigin.set(window().location().origin().unwrap_or_default());

        let needsLoad = builder.with_untracked(|b| b.phase()) == BuilderPhase::Loading;
        if let Some(slug) = slug.filter(|_| needsLoad) {
            spawn_local(async move {
                match load_company_for_edit(slug).await {
                    Ok(company) => builder.update(|b| b.loaded(&company)),
                    Err(e) => {
                        let failure = to_failure(e);
                        if failure.is_unauthorized() {
                            redirect_to_sign_in();
                        }
                        builder.update(|b| b.load_failed(&failure));
                    }
                }
            });
        }
    }
    #[cfg(not(feature = "hydrate"))]
    let _ = slug;

    let publish = move |_| {
        let Some(request) = builder.try_update(|b| b.begin_publish()).flatten() else {
            return;
        };

        #[cfg(feature = "hydrate")]
        {
            use crate::backend::{report, to_failure};
            use crate::builder::PublishOutcome;
            use leptos_router::NavigateOptions;
            use wasm_bindgen_futures::spawn_local;

            let navigate = navigate.clone();
            spawn_local(async move {
                match publish_page(request).await {
                    Ok(company) => match builder.try_update(|b| b.publish_succeeded(&company)) {
                        Some(PublishOutcome::Created { slug }) => {
                            toasts.success("Your careers page is live.");
                            if let Some(handoff) = handoff {
                                handoff.stash(builder.get_untracked());
                            }
                            navigate(
                                &format!("/page-builder/{slug}?published=1"),
                                NavigateOptions {
                                    replace: true,
                                    ..Default::default()
                                },
                            );
                        }
                        _ => toasts.success("Changes published."),
                    },
                    Err(e) => {
                        let failure = to_failure(e);
                        builder.update(|b| b.publish_failed(&failure));
                        report(&failure, toasts);
                    }
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (request, &navigate);
        }
    };

    let phase = Memo::new(move |_| builder.with(|b| b.phase()));
    let currentSlug = Memo::new(move |_| builder.with(|b| b.slug().map(str::to_string)));
    // The form stays mounted while saving.
    let panel = Memo::new(move |_| match phase.get() {
        BuilderPhase::Saving => BuilderPhase::Editing,
        other => other,
    });

    let liveLink = move || {
        let url = builder.with(|b| {
            b.live_link_open()
                .then(|| b.live_url(&origin.get()))
                .flatten()
        })?;
        let onClose = Callback::new(move |_: ()| builder.update(|b| b.close_live_link()));
        Some(view! { <LiveLinkPopUp url=url on_close=onClose /> })
    };

    view! {
        <div class="builder-layout">
            <aside class="builder-editor">
                <div class="builder-toolbar">
                    <a class="btn btn-ghost" href="/dashboard">
                        "\u{2190} Exit"
                    </a>
                    {move || {
                        currentSlug
                            .get()
                            .map(|slug| {
                                view! {
                                    <a class="btn btn-secondary" href=format!("/{slug}/manage-jobs")>
                                        "Manage jobs"
                                    </a>
                                    <button
                                        class="btn btn-ghost"
                                        on:click=move |_| builder.update(|b| b.open_live_link())
                                    >
                                        "Share link"
                                    </button>
                                }
                            })
                    }}
                    <button
                        class="btn btn-primary"
                        disabled=move || phase.get() != BuilderPhase::Editing
                        on:click=publish
                    >
                        {move || match (phase.get(), currentSlug.with(Option::is_some)) {
                            (BuilderPhase::Saving, _) => "Publishing...",
                            (_, true) => "Publish changes",
                            (_, false) => "Publish",
                        }}
                    </button>
                </div>

                {move || {
                    builder
                        .with(|b| b.notice().map(str::to_string))
                        .map(|notice| {
                            view! {
                                <div class="builder-notice">
                                    <span>{notice}</span>
                                    <button
                                        class="link-button"
                                        on:click=move |_| builder.update(|b| b.dismiss_notice())
                                    >
                                        "Dismiss"
                                    </button>
                                </div>
                            }
                        })
                }}

                {move || match panel.get() {
                    BuilderPhase::Loading => view! {
                        <div class="loading">
                            <div class="spinner"></div>
                            "Loading page..."
                        </div>
                    }
                    .into_any(),
                    BuilderPhase::Missing => view! {
                        <div class="not-found">
                            <h2>"Company not found"</h2>
                            <a href="/dashboard">"Back to dashboard"</a>
                        </div>
                    }
                    .into_any(),
                    BuilderPhase::Editing | BuilderPhase::Saving => {
                        view! { <BuilderForm builder=builder /> }.into_any()
                    }
                }}
            </aside>

            <main class="builder-preview">
                {move || {
                    (phase.get() != BuilderPhase::Missing)
                        .then(|| {
                            let page = builder.with(|b| CareerPage::preview(b.draft()));
                            view! { <CompanyRenderer page=page /> }
                        })
                }}
            </main>

            {liveLink}
        </div>
    }
}

#[component]
fn BuilderForm(builder: RwSignal<PageBuilder>) -> impl IntoView {
    let sectionCount = move || builder.with(|b| b.draft().page_content.about_sections.len());

    view! {
        <div class="builder-form">
            <h3>"Company"</h3>
            <div class="form-group">
                <label for="company-name">"Company name"</label>
                <input
                    id="company-name"
                    type="text"
                    disabled=move || !builder.with(|b| b.can_edit_name())
                    prop:value=move || builder.with(|b| b.draft().company_name.clone())
                    on:input=move |ev| {
                        builder.update(|b| {
                            b.set_company_name(event_target_value(&ev));
                        })
                    }
                />
                {move || {
                    (!builder.with(|b| b.can_edit_name()))
                        .then(|| {
                            view! {
                                <span class="form-hint">
                                    "The name is fixed once the page is published."
                                </span>
                            }
                        })
                }}
            </div>

            <h3>"Branding"</h3>
            <div class="form-row">
                <div class="form-group">
                    <label for="primary-color">"Primary color"</label>
                    <input
                        id="primary-color"
                        type="color"
                        prop:value=move || builder.with(|b| b.draft().branding.primary_color.clone())
                        on:input=move |ev| {
                            builder.update(|b| {
                                b.edit(|d| d.set_primary_color(event_target_value(&ev)));
                            })
                        }
                    />
                </div>
                <div class="form-group">
                    <label for="logo-url">"Logo URL"</label>
                    <input
                        id="logo-url"
                        type="url"
                        placeholder="https://"
                        prop:value=move || {
                            builder.with(|b| b.draft().branding.logo_url.clone().unwrap_or_default())
                        }
                        on:input=move |ev| {
                            builder.update(|b| {
                                b.edit(|d| d.set_logo_url(&event_target_value(&ev)));
                            })
                        }
                    />
                </div>
            </div>

            <h3>"Header"</h3>
            <div class="form-group">
                <label for="header-title">"Title"</label>
                <input
                    id="header-title"
                    type="text"
                    prop:value=move || builder.with(|b| b.draft().page_content.header.title.clone())
                    on:input=move |ev| {
                        builder.update(|b| {
                            b.edit(|d| d.set_header_title(event_target_value(&ev)));
                        })
                    }
                />
            </div>
            <div class="form-group">
                <label for="header-subtitle">"Subtitle"</label>
                <textarea
                    id="header-subtitle"
                    rows="2"
                    prop:value=move || {
                        builder.with(|b| b.draft().page_content.header.subtitle.clone())
                    }
                    on:input=move |ev| {
                        builder.update(|b| {
                            b.edit(|d| d.set_header_subtitle(event_target_value(&ev)));
                        })
                    }
                ></textarea>
            </div>

            <div class="section-heading">
                <h3>"About sections"</h3>
                <button
                    class="btn btn-secondary"
                    on:click=move |_| {
                        builder.update(|b| {
                            b.edit(|d| {
                                d.add_section();
                            });
                        })
                    }
                >
                    "Add section"
                </button>
            </div>
            <For each=move || 0..sectionCount() key=|idx| *idx let:idx>
                <SectionEditor builder=builder index=idx />
            </For>
        </div>
    }
}

#[component]
fn SectionEditor(builder: RwSignal<PageBuilder>, index: usize) -> impl IntoView {
    let read = move |pick: fn(&career_types::Section) -> String| {
        builder.with(|b| {
            b.draft()
                .page_content
                .about_sections
                .get(index)
                .map(pick)
                .unwrap_or_default()
        })
    };
    let apply = move |edit: SectionEdit| {
        builder.update(|b| {
            b.edit(|d| {
                d.update_section(index, edit);
            });
        })
    };

    view! {
        <div class="card section-editor">
            <div class="section-editor-header">
                <span class="section-number">{format!("Section {}", index + 1)}</span>
                <button
                    class="btn btn-danger"
                    on:click=move |_| {
                        builder.update(|b| {
                            b.edit(|d| {
                                d.remove_section(index);
                            });
                        })
                    }
                >
                    "Remove"
                </button>
            </div>
            <div class="form-group">
                <label>"Title"</label>
                <input
                    type="text"
                    prop:value=move || read(|s| s.title.clone())
                    on:input=move |ev| apply(SectionEdit::Title(event_target_value(&ev)))
                />
            </div>
            <div class="form-group">
                <label>"Description"</label>
                <textarea
                    rows="4"
                    prop:value=move || read(|s| s.description.clone())
                    on:input=move |ev| apply(SectionEdit::Description(event_target_value(&ev)))
                ></textarea>
            </div>
            <div class="form-row">
                <div class="form-group">
                    <label>"Image URL"</label>
                    <input
                        type="url"
                        placeholder="https://"
                        prop:value=move || read(|s| s.image_url.clone().unwrap_or_default())
                        on:input=move |ev| apply(SectionEdit::ImageUrl(event_target_value(&ev)))
                    />
                </div>
                <div class="form-group">
                    <label>"Image side"</label>
                    <select
                        prop:value=move || read(|s| s.alignment.as_str().to_string())
                        on:change=move |ev| {
                            apply(SectionEdit::Alignment(Alignment::from_form_value(&event_target_value(&ev))))
                        }
                    >
                        <option value="left">"Text first"</option>
                        <option value="right">"Image first"</option>
                    </select>
                </div>
            </div>
        </div>
    }
}
