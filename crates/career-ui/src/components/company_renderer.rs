use chrono::Datelike;
use leptos::prelude::*;

use crate::components::job_list::JobList;
use crate::render::{CareerPage, ImageSlot, JobsArea, SectionBlock};

/// Renders a [`CareerPage`]. Used unchanged by the builder preview and the
/// public careers page.
#[component]
pub fn CompanyRenderer(page: CareerPage) -> impl IntoView {
    let year = chrono::Utc::now().year();
    let headerStyle = format!("background-color: {}", page.accent);
    let accentStyle = format!("color: {}", page.accent);
    let footer = format!("\u{a9} {year} {}", page.company_name);
    let rootClass = page.root_class();

    let logo = match page.logo {
        ImageSlot::Image { src, alt } => {
            view! { <img class="career-logo" src=src alt=alt /> }.into_any()
        }
        ImageSlot::Placeholder(initial) => {
            view! { <div class="career-logo career-logo-placeholder">{initial}</div> }.into_any()
        }
    };

    let sections = page
        .sections
        .into_iter()
        .map(|block| view! { <SectionBand block=block /> })
        .collect_view();

    let jobs = match page.jobs {
        JobsArea::Live { slug } => view! { <JobList slug=slug /> }.into_any(),
        JobsArea::Placeholder(text) => {
            view! { <div class="jobs-placeholder">{text}</div> }.into_any()
        }
    };

    view! {
        <div class=rootClass>
            <header class="career-header" style=headerStyle>
                {logo}
                <h1 class="career-title">{page.title}</h1>
                <p class="career-subtitle">{page.subtitle}</p>
            </header>

            <div class="career-sections">
                {sections}
                {page.empty_hint.map(|hint| view! { <p class="career-empty-hint">{hint}</p> })}
            </div>

            <section class="career-jobs">
                <h2 style=accentStyle>"Open positions"</h2>
                {jobs}
            </section>

            <footer class="career-footer">{footer}</footer>
        </div>
    }
}

#[component]
fn SectionBand(block: SectionBlock) -> impl IntoView {
    let bandClass = if block.shaded {
        "career-section band-shaded"
    } else {
        "career-section"
    };
    let rowClass = if block.text_first {
        "section-row"
    } else {
        "section-row section-row-reversed"
    };

    let image = match block.image {
        ImageSlot::Image { src, alt } => {
            view! { <img class="section-image" src=src alt=alt /> }.into_any()
        }
        ImageSlot::Placeholder(label) => {
            view! { <div class="section-image section-image-placeholder">{label}</div> }.into_any()
        }
    };

    view! {
        <section class=bandClass>
            <div class=rowClass>
                <div class="section-text">
                    <h2>{block.title}</h2>
                    <p>{block.description}</p>
                </div>
                {image}
            </div>
        </section>
    }
}
