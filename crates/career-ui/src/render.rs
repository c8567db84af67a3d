//! Render model shared by the builder preview and the public careers page.
//!
//! Both surfaces go through [`CareerPage::compose`]; the only input that
//! differs between them is the [`RenderMode`].

use career_types::{Alignment, Branding, Company, PageContent, PageDraft};

const FALLBACK_ACCENT: &str = "#000";
const FALLBACK_TITLE: &str = "Welcome";
const NO_IMAGE: &str = "No Image";
pub const NO_SECTIONS_HINT: &str = "Add sections to tell candidates about your company.";
pub const JOBS_PLACEHOLDER: &str = "Open positions will appear here once the page is live.";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RenderMode {
    Preview,
    Published,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ImageSlot {
    Image { src: String, alt: String },
    Placeholder(String),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum JobsArea {
    Placeholder(&'static str),
    /// Live listing for the company behind `slug`.
    Live { slug: String },
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SectionBlock {
    pub title: String,
    pub description: String,
    pub image: ImageSlot,
    pub text_first: bool,
    /// Alternating background band.
    pub shaded: bool,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CareerPage {
    pub mode: RenderMode,
    pub company_name: String,
    pub accent: String,
    pub logo: ImageSlot,
    pub title: String,
    pub subtitle: String,
    pub sections: Vec<SectionBlock>,
    pub empty_hint: Option<&'static str>,
    pub jobs: JobsArea,
}

impl CareerPage {
    /// `slug` is only used in published mode, where it feeds the live job
    /// list. Without it the jobs area stays a placeholder.
    pub fn compose(
        companyName: &str,
        branding: &Branding,
        content: &PageContent,
        mode: RenderMode,
        slug: Option<&str>,
    ) -> Self {
        let accent = match branding.primary_color.trim() {
            "" => FALLBACK_ACCENT.to_string(),
            color => color.to_string(),
        };

        let title = match content.header.title.trim() {
            "" => FALLBACK_TITLE.to_string(),
            _ => content.header.title.clone(),
        };

        let logo = match present(branding.logo_url.as_deref()) {
            Some(src) => ImageSlot::Image {
                src,
                alt: format!("{companyName} logo"),
            },
            None => ImageSlot::Placeholder(initial(companyName)),
        };

        let sections: Vec<SectionBlock> = content
            .about_sections
            .iter()
            .enumerate()
            .map(|(idx, section)| SectionBlock {
                title: section.title.clone(),
                description: section.description.clone(),
                image: match present(section.image_url.as_deref()) {
                    Some(src) => ImageSlot::Image {
                        src,
                        alt: section.title.clone(),
                    },
                    None => ImageSlot::Placeholder(NO_IMAGE.into()),
                },
                text_first: section.alignment == Alignment::Left,
                shaded: idx % 2 == 1,
            })
            .collect();

        let empty_hint = match (mode, sections.is_empty()) {
            (RenderMode::Preview, true) => Some(NO_SECTIONS_HINT),
            _ => None,
        };

        let jobs = match (mode, slug) {
            (RenderMode::Published, Some(slug)) => JobsArea::Live {
                slug: slug.to_string(),
            },
            _ => JobsArea::Placeholder(JOBS_PLACEHOLDER),
        };

        Self {
            mode,
            company_name: companyName.to_string(),
            accent,
            logo,
            title,
            subtitle: content.header.subtitle.clone(),
            sections,
            empty_hint,
            jobs,
        }
    }

    pub fn preview(draft: &PageDraft) -> Self {
        Self::compose(
            &draft.company_name,
            &draft.branding,
            &draft.page_content,
            RenderMode::Preview,
            None,
        )
    }

    pub fn published(company: &Company) -> Self {
        Self::compose(
            &company.company_name,
            &company.branding,
            &company.page_content,
            RenderMode::Published,
            Some(&company.slug),
        )
    }

    /// Preview pages ignore pointer input.
    pub fn root_class(&self) -> &'static str {
        match self.mode {
            RenderMode::Preview => "career-page is-preview",
            RenderMode::Published => "career-page",
        }
    }
}

fn present(url: Option<&str>) -> Option<String> {
    url.map(str::trim)
        .filter(|u| !u.is_empty())
        .map(str::to_string)
}

fn initial(companyName: &str) -> String {
    companyName
        .trim()
        .chars()
        .next()
        .map(|c| c.to_uppercase().collect())
        .unwrap_or_else(|| "?".into())
}
